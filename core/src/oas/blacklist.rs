//! # Blacklist Filter
//!
//! Force-removes explicitly listed path parameters from a document,
//! regardless of placeholder matching. The blacklist lives in a JSON file:
//!
//! ```json
//! { "blacklisted": [{ "url": "/pets/{petId}", "parameterName": "petId" }] }
//! ```

use crate::error::{AppError, AppResult};
use crate::oas::document::Document;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One parameter to drop: an exact path pattern and a parameter name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlacklistEntry {
    /// The exact path pattern keying the document's path mapping.
    pub url: String,
    /// The name of the `in: path` parameter to remove.
    pub parameter_name: String,
}

/// The blacklist file contents, applied in order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Blacklist {
    /// Entries to apply. Each is independent; duplicates are harmless.
    pub blacklisted: Vec<BlacklistEntry>,
}

/// Loads the blacklist from a JSON file.
///
/// # Errors
///
/// * `AppError::NotFound` - the file does not exist.
/// * `AppError::Parse` - the content is not valid JSON of the expected shape.
pub fn load_blacklist(path: &Path) -> AppResult<Blacklist> {
    if !path.exists() {
        return Err(AppError::NotFound(format!(
            "Blacklist file not found: {}",
            path.display()
        )));
    }

    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| AppError::Parse(format!("{}: {}", path.display(), e)))
}

/// Removes every blacklisted `in: path` parameter from the document.
///
/// For each entry the path item keyed by `url` is looked up; an absent url
/// is expected and skipped silently. On a hit, matching parameters are
/// removed from the path-level list and from every operation's list.
/// Parameters with the same name but a different `in` are untouched.
pub fn apply_blacklist(document: &mut Document, blacklist: &Blacklist) {
    for entry in &blacklist.blacklisted {
        let Some(item) = document.paths.get_mut(&entry.url) else {
            // Missing blacklist target is not an error
            continue;
        };

        for params in item.parameter_lists_mut() {
            params.retain(|param| !param.is_path_param_named(&entry.parameter_name));
        }
    }
}
