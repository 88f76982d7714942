//! Error types for triple table operations.

use std::path::PathBuf;

/// Errors that can occur while parsing triples or loading table documents.
///
/// Looking up a `(platform, arch)` pair never produces one of these; an
/// absent pair is an empty result.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML deserialization error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// I/O error reading/writing table documents.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Table document not found.
    #[error("table document not found: {}", path.display())]
    NotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The file extension does not name a known document format.
    #[error("unsupported document format: {} (expected .json or .toml)", path.display())]
    UnsupportedFormat {
        /// The offending path.
        path: PathBuf,
    },

    /// A target triple could not be split into its components.
    #[error("invalid target triple '{triple}': {detail}")]
    InvalidTriple {
        /// The triple as given.
        triple: String,
        /// Why it was rejected.
        detail: String,
    },
}

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, TableError>;
