#![deny(warnings)]

// Read a file's content as UTF-8 text

use crate::error::{FileAccessError, Result};
use std::path::Path;
use tokio::fs;
use tracing::error;

/// Read the file at `path` and decode its content as UTF-8 text.
pub async fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).await.map_err(|e| {
        error!(path = %path.display(), "error reading file: {}", e);
        FileAccessError::Read(format!("Failed to read file {}: {e}", path.display()))
    })
}
