#![deny(warnings)]

// Write text content to a file

use crate::error::{FileAccessError, Result};
use std::path::Path;
use tokio::fs;
use tracing::error;

/// Write `content` to the file at `path`, overwriting any existing content.
/// No temp-file dance and no parent directory creation: a missing parent or
/// full disk surfaces directly as a write error.
pub async fn write_text(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).await.map_err(|e| {
        error!(path = %path.display(), "error writing file: {}", e);
        FileAccessError::Write(format!("Failed to write file {}: {e}", path.display()))
    })
}
