//! Error types for the goo_getf crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while scanning documents for Google links.
#[derive(Error, Debug)]
pub enum GooError {
    #[error("Failed to read file {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read path list: {0}")]
    ReadPathList(#[from] std::io::Error),

    #[error("Invalid URL template (expected exactly one {{id}} slot): {0}")]
    InvalidTemplate(String),

    #[error("Pattern marker must not be empty")]
    EmptyMarker,
}

/// Result type alias for GooError.
pub type Result<T> = std::result::Result<T, GooError>;
