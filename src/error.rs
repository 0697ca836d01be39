#![deny(warnings)]

// Error types for the file-access crate

use thiserror::Error;

/// Error taxonomy for the file access facade, one variant per underlying
/// failure class. Every error carries a message naming the attempted
/// operation and the resolved path, and is logged once at the point of
/// occurrence before being returned unchanged to the caller.
#[derive(Error, Debug)]
pub enum FileAccessError {
    /// Underlying read failed (missing file, permission denied)
    #[error("Read error: {0}")]
    Read(String),

    /// Underlying write failed, or the payload could not be serialized
    #[error("Write error: {0}")]
    Write(String),

    /// Rename failed (missing source, destination cannot be created)
    #[error("Rename error: {0}")]
    Rename(String),

    /// File content could not be parsed as JSON
    #[error("Parse error: {0}")]
    Parse(String),

    /// Directory listing failed (missing or inaccessible directory)
    #[error("List error: {0}")]
    List(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, FileAccessError>;
