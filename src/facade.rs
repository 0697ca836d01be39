#![deny(warnings)]

// File access facade: default-path resolution, serialization and the
// format-specific convenience readers, delegating to the operations modules

use crate::error::{FileAccessError, Result};
use crate::operations::{list_dir, read_file, rename, write_file};
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};
use tracing::{debug, error};

/// Base directory used when a path argument is omitted and no other base was
/// configured at construction time.
pub const DEFAULT_INPUT_DIR: &str = "./data/input/";

/// Facade bundling all file operations. Holds only the configured base
/// directory, so instances are cheap to clone and share across tasks;
/// concurrent calls against the same file are not coordinated.
#[derive(Debug, Clone)]
pub struct FileStore {
    base_dir: String,
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_DIR)
    }
}

impl FileStore {
    /// Create a facade rooted at `base_dir`. The base directory is used
    /// whenever a per-call path argument is omitted.
    pub fn new(base_dir: impl Into<String>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// The configured default input directory.
    pub fn base_dir(&self) -> &str {
        &self.base_dir
    }

    /// Read the file `name` under `path` (or the base directory) as text.
    ///
    /// The `encoding` argument is accepted for compatibility but never
    /// changes decoding: content is always decoded as UTF-8 regardless of
    /// its value. This is a long-standing quirk kept for compatibility;
    /// callers must not rely on the argument having any effect.
    pub async fn read_text(
        &self,
        name: &str,
        path: Option<&str>,
        encoding: Option<&str>,
    ) -> Result<String> {
        if let Some(encoding) = encoding {
            debug!(encoding, "encoding argument is ignored; content is always decoded as UTF-8");
        }
        let full = self.resolve(name, path, FileAccessError::Read)?;
        read_file::read_text(&full).await
    }

    /// Write pre-formatted text to the file `name` under `path` (or the base
    /// directory), overwriting any existing content.
    pub async fn write_text(&self, name: &str, data: &str, path: Option<&str>) -> Result<()> {
        let full = self.resolve(name, path, FileAccessError::Write)?;
        write_file::write_text(&full, data).await
    }

    /// Serialize `value` to JSON text and write it to the file `name` under
    /// `path` (or the base directory). Serialization failure surfaces as a
    /// write error before anything touches the filesystem.
    pub async fn write_json<T: Serialize>(
        &self,
        name: &str,
        value: &T,
        path: Option<&str>,
    ) -> Result<()> {
        let full = self.resolve(name, path, FileAccessError::Write)?;
        let text = serde_json::to_string(value).map_err(|e| {
            error!(path = %full.display(), "error serializing payload: {}", e);
            FileAccessError::Write(format!(
                "Failed to serialize payload for {}: {e}",
                full.display()
            ))
        })?;
        write_file::write_text(&full, &text).await
    }

    /// Rename `old_name` to `new_name` inside `path`. Unlike the readers and
    /// writers, `path` is required here. A single trailing path separator on
    /// `path` is normalized before both full paths are constructed.
    pub async fn rename_file(&self, old_name: &str, new_name: &str, path: &str) -> Result<()> {
        let expanded = expand_dir(path, FileAccessError::Rename)?;
        let trimmed = expanded
            .strip_suffix(MAIN_SEPARATOR)
            .unwrap_or(&expanded);
        let dir = Path::new(trimmed);
        rename::rename_file(&dir.join(old_name), &dir.join(new_name)).await
    }

    /// Read `name` + `.json` under `path` (or the base directory) and parse
    /// it as JSON. `name` must not contain the extension.
    pub async fn read_json(&self, name: &str, path: Option<&str>) -> Result<Value> {
        let full = self.resolve(&format!("{name}.json"), path, FileAccessError::Read)?;
        let text = read_file::read_text(&full).await?;
        parse_json(&full, &text)
    }

    /// Read `name` + `.prj` under `path` (or the base directory) as raw
    /// text. The prj format is application-defined; no structure is imposed.
    pub async fn read_prj(&self, name: &str, path: Option<&str>) -> Result<String> {
        let full = self.resolve(&format!("{name}.prj"), path, FileAccessError::Read)?;
        read_file::read_text(&full).await
    }

    /// Read `name` + `.geojson` under `path` (or the base directory) and
    /// parse it as JSON. No GeoJSON schema validation is applied.
    pub async fn read_geojson(&self, name: &str, path: Option<&str>) -> Result<Value> {
        let full = self.resolve(&format!("{name}.geojson"), path, FileAccessError::Read)?;
        let text = read_file::read_text(&full).await?;
        parse_json(&full, &text)
    }

    /// List the entry names directly under `path`. `path` is required; the
    /// base directory does not apply here.
    pub async fn list_directory(&self, path: &str) -> Result<Vec<String>> {
        let expanded = expand_dir(path, FileAccessError::List)?;
        list_dir::list_directory(Path::new(&expanded)).await
    }

    /// Resolve `name` against the per-call path override or the configured
    /// base directory. Expansion failure is classed as the calling
    /// operation's error.
    fn resolve(
        &self,
        name: &str,
        path: Option<&str>,
        fail: fn(String) -> FileAccessError,
    ) -> Result<PathBuf> {
        let dir = expand_dir(path.unwrap_or(&self.base_dir), fail)?;
        Ok(Path::new(&dir).join(name))
    }
}

/// Expand `~` and environment variables in a user-supplied directory path.
fn expand_dir(path: &str, fail: fn(String) -> FileAccessError) -> Result<String> {
    shellexpand::full(path)
        .map(|expanded| expanded.into_owned())
        .map_err(|e| {
            error!(path, "error expanding path: {e}");
            fail(format!("Failed to expand path '{path}': {e}"))
        })
}

/// Parse text read from `path` as JSON. Malformed text is a parse error,
/// distinct from the read error raised when the file itself was unreadable.
fn parse_json(path: &Path, text: &str) -> Result<Value> {
    serde_json::from_str(text).map_err(|e| {
        error!(path = %path.display(), "error parsing JSON: {}", e);
        FileAccessError::Parse(format!(
            "Failed to parse JSON in {}: {e}",
            path.display()
        ))
    })
}
