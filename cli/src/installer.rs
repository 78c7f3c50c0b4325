#![deny(missing_docs)]

//! # Installer Registry
//!
//! Knows which generator plugin bundles can be scaffolded, which npm
//! dependencies each one pins, and how to record them in the project's
//! `package.json` without disturbing unrelated fields.

use crate::error::{CliError, CliResult};
use serde_json::{json, Map, Value};
use std::fs;
use std::path::Path;

/// The `package.json` key under which init metadata is recorded.
pub const METADATA_KEY: &str = "sdkScribeMetadata";

/// The plugin bundles a user can select during `init`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvailablePackage {
    /// Typed axios clients (`@kubb/swagger-client`).
    KubbAxios,
    /// TanStack Query hooks (`@kubb/swagger-tanstack-query`).
    KubbTanstack,
}

impl AvailablePackage {
    /// Every selectable bundle, in prompt order.
    pub const ALL: [AvailablePackage; 2] =
        [AvailablePackage::KubbAxios, AvailablePackage::KubbTanstack];

    /// The name shown in prompts and logs.
    pub fn label(&self) -> &'static str {
        match self {
            AvailablePackage::KubbAxios => "kubbAxios",
            AvailablePackage::KubbTanstack => "kubbTanstack",
        }
    }

    /// The npm dependencies this bundle needs.
    pub fn dependencies(&self) -> &'static [&'static str] {
        match self {
            AvailablePackage::KubbAxios => &[
                "@kubb/core",
                "@kubb/react",
                "@kubb/swagger",
                "@kubb/swagger-client",
                "@kubb/swagger-ts",
            ],
            AvailablePackage::KubbTanstack => &[
                "@kubb/core",
                "@kubb/swagger",
                "@kubb/swagger-tanstack-query",
                "@kubb/swagger-ts",
            ],
        }
    }
}

/// Pinned dependency versions. Pinning here avoids a registry round-trip
/// per scaffolded dependency.
const DEPENDENCY_VERSIONS: &[(&str, &str)] = &[
    ("@kubb/core", "^2.11.0"),
    ("@kubb/react", "^2.11.0"),
    ("@kubb/swagger", "^2.11.0"),
    ("@kubb/swagger-client", "^2.11.0"),
    ("@kubb/swagger-tanstack-query", "^2.11.0"),
    ("@kubb/swagger-ts", "^2.11.0"),
];

fn pinned_version(name: &str) -> CliResult<&'static str> {
    DEPENDENCY_VERSIONS
        .iter()
        .find(|(dep, _)| *dep == name)
        .map(|(_, version)| *version)
        .ok_or_else(|| CliError::General(format!("No pinned version for dependency '{}'", name)))
}

/// Reads the project's `package.json` into a JSON value.
pub fn read_package_json(project_dir: &Path) -> CliResult<Value> {
    let path = project_dir.join("package.json");
    let content = fs::read_to_string(&path).map_err(|e| {
        CliError::General(format!("Failed to read {}: {}", path.display(), e))
    })?;
    serde_json::from_str(&content)
        .map_err(|e| CliError::General(format!("Invalid {}: {}", path.display(), e)))
}

/// Writes the project's `package.json` back, pretty-printed.
pub fn write_package_json(project_dir: &Path, pkg: &Value) -> CliResult<()> {
    let path = project_dir.join("package.json");
    let content = serde_json::to_string_pretty(pkg)
        .map_err(|e| CliError::General(format!("Failed to serialize package.json: {}", e)))?;
    fs::write(&path, content + "\n").map_err(|e| {
        CliError::General(format!("Failed to write {}: {}", path.display(), e))
    })?;
    Ok(())
}

/// Adds pinned dependencies to `package.json`, keeping the dependency
/// table sorted by name. Existing entries are overwritten with the pinned
/// version; everything else in the file is preserved.
pub fn add_package_dependencies(
    project_dir: &Path,
    dependencies: &[&str],
    dev_mode: bool,
) -> CliResult<()> {
    let mut pkg = read_package_json(project_dir)?;

    let root = pkg
        .as_object_mut()
        .ok_or_else(|| CliError::General("package.json is not a JSON object".to_string()))?;

    let table_key = if dev_mode { "devDependencies" } else { "dependencies" };
    let table = root
        .entry(table_key)
        .or_insert_with(|| json!({}))
        .as_object_mut()
        .ok_or_else(|| {
            CliError::General(format!("package.json '{}' is not an object", table_key))
        })?;

    for name in dependencies {
        let version = pinned_version(name)?;
        table.insert((*name).to_string(), Value::String(version.to_string()));
    }
    sort_object(table);

    write_package_json(project_dir, &pkg)
}

/// Records the init metadata block and (optionally) the `packageManager`
/// field in `package.json`.
pub fn record_init_metadata(
    project_dir: &Path,
    init_version: &str,
    package_manager: Option<&str>,
) -> CliResult<()> {
    let mut pkg = read_package_json(project_dir)?;

    let root = pkg
        .as_object_mut()
        .ok_or_else(|| CliError::General("package.json is not a JSON object".to_string()))?;

    root.insert(
        METADATA_KEY.to_string(),
        json!({ "initVersion": init_version }),
    );
    if let Some(manager) = package_manager {
        root.insert("packageManager".to_string(), Value::String(manager.to_string()));
    }

    write_package_json(project_dir, &pkg)
}

fn sort_object(obj: &mut Map<String, Value>) {
    let mut entries: Vec<(String, Value)> = std::mem::take(obj).into_iter().collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    obj.extend(entries);
}
