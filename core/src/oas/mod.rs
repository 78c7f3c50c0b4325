//! # OpenAPI Document Repair Module
//!
//! - **document**: tolerant document model, YAML loader and writer.
//! - **placeholders**: unmatched path-parameter filter.
//! - **blacklist**: explicit parameter blacklist, JSON loader and filter.
//! - **repair**: the linear load -> filter -> write pipeline.

pub mod blacklist;
pub mod document;
pub mod placeholders;
pub mod repair;

// Re-export public API to keep caller imports flat
pub use blacklist::{apply_blacklist, load_blacklist, Blacklist, BlacklistEntry};
pub use document::{load_document, save_document, Document, Operation, Parameter, PathItem};
pub use placeholders::{placeholder_tokens, strip_unmatched_path_params};
pub use repair::{derive_updated_path, repair_document};
