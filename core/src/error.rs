//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// Input is not well-formed YAML/JSON, or does not match the expected
    /// document shape (e.g. missing `paths`).
    #[from(ignore)]
    #[display("Parse Error: {_0}")]
    Parse(String),

    /// Source document or blacklist file does not exist.
    #[from(ignore)]
    #[display("Not Found: {_0}")]
    NotFound(String),

    /// Destination is not writable, or serialization failed before any byte
    /// reached disk.
    #[from(ignore)]
    #[display("Write Error: {_0}")]
    Write(String),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
///
/// We implement this manually (instead of `derive(Error)`) because the
/// `String`-carrying variants do not implement `std::error::Error`, causing
/// auto-derived `source()` implementations to fail compilation.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
