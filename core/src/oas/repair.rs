//! # Document Repair Pipeline
//!
//! Ties the loader, the two filter passes and the writer into the single
//! entry point the CLI calls before handing the document to the code
//! generator. The source file is never modified; the corrected copy lands
//! next to it with an `_updated` suffix.

use crate::error::AppResult;
use crate::oas::blacklist::{apply_blacklist, load_blacklist};
use crate::oas::document::{load_document, save_document};
use crate::oas::placeholders::strip_unmatched_path_params;
use std::path::{Path, PathBuf};

/// Derives the destination path for the corrected document:
/// `<stem>_updated.<ext>` next to the source.
pub fn derive_updated_path(source: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    match source.extension() {
        Some(ext) => source.with_file_name(format!("{}_updated.{}", stem, ext.to_string_lossy())),
        None => source.with_file_name(format!("{}_updated", stem)),
    }
}

/// Repairs an OpenAPI document and writes the corrected copy.
///
/// Steps, each a hard dependency on the prior succeeding:
/// 1. Load the document from `source`.
/// 2. Remove path parameters without a matching `{name}` placeholder.
/// 3. Write the result to the derived `_updated` path.
/// 4. If a blacklist is supplied, apply it to the in-memory document and
///    rewrite the destination.
///
/// # Arguments
///
/// * `source` - Path to the OpenAPI YAML document. Never modified.
/// * `blacklist_path` - Optional path to the blacklist JSON file.
///
/// # Returns
///
/// The path of the written `_updated` document.
pub fn repair_document(source: &Path, blacklist_path: Option<&Path>) -> AppResult<PathBuf> {
    let mut document = load_document(source)?;

    strip_unmatched_path_params(&mut document);

    let destination = derive_updated_path(source);
    save_document(&destination, &document)?;

    if let Some(blacklist_path) = blacklist_path {
        let blacklist = load_blacklist(blacklist_path)?;
        apply_blacklist(&mut document, &blacklist);
        save_document(&destination, &document)?;
    }

    Ok(destination)
}
