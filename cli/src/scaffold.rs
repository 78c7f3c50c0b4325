#![deny(missing_docs)]

//! # Generator Config Scaffolding
//!
//! Renders the `kubb.config.ts` consumed by the downstream kubb code
//! generator. The config's input is always the repaired `_updated`
//! document, and the plugin list follows the bundles selected at init.

use crate::error::{CliError, CliResult};
use crate::installer::AvailablePackage;
use std::fs;
use std::path::{Path, PathBuf};

/// Renders the generator configuration source for the selected bundles.
pub fn kubb_config(updated_document: &Path, packages: &[AvailablePackage]) -> String {
    let input_path = updated_document.display().to_string();
    let with_axios = packages.contains(&AvailablePackage::KubbAxios);
    let with_tanstack = packages.contains(&AvailablePackage::KubbTanstack);

    let mut lines: Vec<String> = vec![
        "import { defineConfig } from '@kubb/core';".to_string(),
        "import { definePlugin as createSwagger } from '@kubb/swagger';".to_string(),
        "import { definePlugin as createSwaggerTS } from '@kubb/swagger-ts';".to_string(),
    ];
    if with_axios {
        lines.push(
            "import { definePlugin as createSwaggerClient } from '@kubb/swagger-client';"
                .to_string(),
        );
    }
    if with_tanstack {
        lines.push(
            "import { definePlugin as createSwaggerTanstackQuery } from '@kubb/swagger-tanstack-query';"
                .to_string(),
        );
    }

    lines.extend([
        String::new(),
        "export default defineConfig(async () => {".to_string(),
        "  return {".to_string(),
        "    root: '.',".to_string(),
        "    input: {".to_string(),
        format!("      path: '{}',", input_path),
        "    },".to_string(),
        "    output: {".to_string(),
        "      path: './src/gen',".to_string(),
        "    },".to_string(),
        "    logLevel: 'info',".to_string(),
        "    plugins: [".to_string(),
        "      createSwagger({ output: false, validate: true }),".to_string(),
        "      createSwaggerTS({".to_string(),
        "        output: { path: 'models/ts' },".to_string(),
        "        group: { type: 'tag' },".to_string(),
        "        enumType: 'asPascalConst',".to_string(),
        "        dateType: 'date',".to_string(),
        "      }),".to_string(),
    ]);

    if with_axios {
        lines.extend([
            "      createSwaggerClient({".to_string(),
            "        output: { path: './clients/axios' },".to_string(),
            "        group: { type: 'tag', output: './clients/axios/{{tag}}Service' },".to_string(),
            "      }),".to_string(),
        ]);
    }
    if with_tanstack {
        lines.extend([
            "      createSwaggerTanstackQuery({".to_string(),
            "        output: { path: './hooks' },".to_string(),
            "        framework: 'react',".to_string(),
            "        suspense: {},".to_string(),
            "      }),".to_string(),
        ]);
    }

    lines.extend([
        "    ],".to_string(),
        "  };".to_string(),
        "});".to_string(),
        String::new(),
    ]);

    lines.join("\n")
}

/// Writes `kubb.config.ts` into the project directory.
///
/// # Returns
///
/// The path of the written config file.
pub fn write_kubb_config(
    project_dir: &Path,
    updated_document: &Path,
    packages: &[AvailablePackage],
) -> CliResult<PathBuf> {
    let destination = project_dir.join("kubb.config.ts");
    let content = kubb_config(updated_document, packages);

    fs::write(&destination, content).map_err(|e| {
        CliError::General(format!("Failed to write {}: {}", destination.display(), e))
    })?;

    Ok(destination)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_config_points_at_updated_document() {
        let config = kubb_config(
            Path::new("./openapi_updated.yaml"),
            &[AvailablePackage::KubbTanstack],
        );

        assert!(config.contains("path: './openapi_updated.yaml',"));
        assert!(config.contains("createSwagger({ output: false, validate: true })"));
        assert!(config.contains("createSwaggerTanstackQuery({"));
        assert!(!config.contains("createSwaggerClient"));
    }

    #[test]
    fn test_config_with_both_bundles() {
        let config = kubb_config(
            Path::new("api_updated.yml"),
            &[AvailablePackage::KubbAxios, AvailablePackage::KubbTanstack],
        );

        assert!(config.contains("createSwaggerClient({"));
        assert!(config.contains("'./clients/axios/{{tag}}Service'"));
        assert!(config.contains("createSwaggerTanstackQuery({"));
    }

    #[test]
    fn test_write_kubb_config() {
        let dir = tempdir().unwrap();
        let written = write_kubb_config(
            dir.path(),
            Path::new("openapi_updated.yaml"),
            &[AvailablePackage::KubbAxios],
        )
        .unwrap();

        assert_eq!(written, dir.path().join("kubb.config.ts"));
        let content = fs::read_to_string(&written).unwrap();
        assert!(content.contains("export default defineConfig"));
    }
}
