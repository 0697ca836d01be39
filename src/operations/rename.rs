#![deny(warnings)]

// Rename a file in place

use crate::error::{FileAccessError, Result};
use std::path::Path;
use tokio::fs;
use tracing::error;

/// Rename `from` to `to`. Fails when the source does not exist or the
/// destination cannot be created.
pub async fn rename_file(from: &Path, to: &Path) -> Result<()> {
    fs::rename(from, to).await.map_err(|e| {
        error!(from = %from.display(), to = %to.display(), "error renaming file: {}", e);
        FileAccessError::Rename(format!(
            "Failed to rename {} to {}: {e}",
            from.display(),
            to.display()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_rename_file() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("old.txt");
        let dst = dir.path().join("new.txt");
        std_fs::write(&src, "content").unwrap();

        rename_file(&src, &dst).await.unwrap();

        assert!(!src.exists());
        assert_eq!(std_fs::read_to_string(&dst).unwrap(), "content");
    }

    #[tokio::test]
    async fn test_rename_missing_source() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("no_such_file.txt");
        let dst = dir.path().join("new.txt");

        let err = rename_file(&src, &dst).await.unwrap_err();
        assert!(matches!(err, FileAccessError::Rename(_)));
    }
}
