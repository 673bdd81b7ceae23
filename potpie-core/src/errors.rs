//! errors.rs - Custom error types for the potpie-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `potpie-core` library.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PotpieError {
    #[error("Unknown transform '{0}'; expected one of: brackets, unicode, planguage, extend, mixed")]
    UnknownTransform(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to parse catalog '{path}': {reason}")]
    MalformedCatalog { path: String, reason: String },

    #[error("Unsupported catalog type for '{0}'; expected a .po, .pot or .json file")]
    UnsupportedCatalog(String),

    #[error("Failed to update catalog entry '{msgid}': {reason}")]
    EntryUpdate { msgid: String, reason: String },

    #[error("{0}")]
    Validation(String),

    #[error("Failed to serialize catalog: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),
}

/// Convenience alias used across the crate.
pub type Result<T, E = PotpieError> = std::result::Result<T, E>;
