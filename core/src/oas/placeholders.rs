//! # Placeholder-Match Filter
//!
//! Removes path parameter declarations whose name does not correspond to a
//! `{name}` placeholder in the owning path pattern. Parameters living
//! anywhere else (`query`, `header`, `cookie`, ...) are never touched.

use crate::oas::document::{Document, Parameter};
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Extracts the set of `{name}` placeholder tokens from a path pattern.
///
/// Matching is by exact token membership, not substring containment, so
/// `id` does not match a pattern that only contains `{userId}`.
pub fn placeholder_tokens(pattern: &str) -> HashSet<String> {
    static TOKEN_RE: OnceLock<Regex> = OnceLock::new();
    let token_re =
        TOKEN_RE.get_or_init(|| Regex::new(r"\{([^{}/]+)\}").expect("Invalid regex"));

    token_re
        .captures_iter(pattern)
        .map(|cap| cap[1].to_string())
        .collect()
}

/// Drops every `in: path` parameter whose name is not a placeholder of its
/// path pattern. Applies to the path-level parameter list and to every
/// operation's list; relative order of retained parameters is preserved.
///
/// The pass is a projection: applying it twice equals applying it once.
pub fn strip_unmatched_path_params(document: &mut Document) {
    for (pattern, item) in document.paths.iter_mut() {
        let tokens = placeholder_tokens(pattern);
        for params in item.parameter_lists_mut() {
            params.retain(|param| is_declared(param, &tokens));
        }
    }
}

/// A parameter survives unless it is a path parameter whose name is known
/// and absent from the pattern's placeholder set. Declarations without a
/// name (e.g. `$ref` entries) are kept.
fn is_declared(param: &Parameter, tokens: &HashSet<String>) -> bool {
    if param.location.as_deref() != Some("path") {
        return true;
    }
    match param.name.as_deref() {
        Some(name) => tokens.contains(name),
        None => true,
    }
}
