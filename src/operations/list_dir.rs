#![deny(warnings)]

// List the entry names directly under a directory

use crate::error::{FileAccessError, Result};
use std::path::Path;
use tokio::fs;
use tracing::error;

/// Return the names of all entries directly under `path`. Non-recursive and
/// unfiltered: subdirectory names are included and no distinction is made
/// between files and directories. Order is unspecified.
pub async fn list_directory(path: &Path) -> Result<Vec<String>> {
    let mut dir = fs::read_dir(path).await.map_err(|e| {
        error!(path = %path.display(), "error reading directory: {}", e);
        FileAccessError::List(format!(
            "Failed to read directory {}: {e}",
            path.display()
        ))
    })?;

    let mut names = Vec::new();
    while let Some(entry) = dir.next_entry().await.map_err(|e| {
        error!(path = %path.display(), "error reading directory entry: {}", e);
        FileAccessError::List(format!(
            "Failed to read entry in directory {}: {e}",
            path.display()
        ))
    })? {
        names.push(entry.file_name().to_string_lossy().into_owned());
    }

    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_list_directory() {
        let dir = TempDir::new().unwrap();
        std_fs::write(dir.path().join("file1.txt"), "content1").unwrap();
        std_fs::write(dir.path().join("file2.txt"), "content2").unwrap();
        std_fs::create_dir(dir.path().join("subdir")).unwrap();

        let mut names = list_directory(dir.path()).await.unwrap();
        names.sort();
        assert_eq!(names, vec!["file1.txt", "file2.txt", "subdir"]);
    }

    #[tokio::test]
    async fn test_list_directory_empty() {
        let dir = TempDir::new().unwrap();

        let names = list_directory(dir.path()).await.unwrap();
        assert!(names.is_empty());
    }

    #[tokio::test]
    async fn test_list_directory_missing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no_such_dir");

        let err = list_directory(&path).await.unwrap_err();
        assert!(matches!(err, FileAccessError::List(_)));
    }
}
