#![deny(missing_docs)]

//! # Scribe Core
//!
//! Document repair engine for OpenAPI descriptions: loads a YAML document,
//! removes path parameter declarations with no matching `{name}`
//! placeholder in their path pattern, optionally strips blacklisted
//! parameters, and writes the corrected copy next to the source.

/// Shared error types.
pub mod error;

/// OpenAPI document model and repair passes.
pub mod oas;

pub use error::{AppError, AppResult};
pub use oas::{
    apply_blacklist, derive_updated_path, load_blacklist, load_document, repair_document,
    save_document, strip_unmatched_path_params, Blacklist, BlacklistEntry, Document, Operation,
    Parameter, PathItem,
};
