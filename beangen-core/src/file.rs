use std::io;
use std::path::{Path, PathBuf};

/// Result of a write operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was absent and has been written.
    Written,
    /// File already exists; its content was left untouched.
    Skipped,
}

impl WriteResult {
    /// Whether the file was newly created by this write.
    pub fn created(self) -> bool {
        matches!(self, WriteResult::Written)
    }
}

/// A generated file pending materialization.
///
/// Writing is non-destructive: an existing file at the target path is never
/// overwritten, so re-running generation cannot clobber hand-edited output.
/// Parent directories are the caller's responsibility; a missing parent
/// surfaces as an I/O error.
pub struct File {
    path: PathBuf,
    content: String,
}

impl File {
    /// Create a new file with the given path and content.
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the file exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the file if absent.
    pub fn write(&self) -> io::Result<WriteResult> {
        if self.exists() {
            return Ok(WriteResult::Skipped);
        }
        std::fs::write(&self.path, &self.content)?;
        Ok(WriteResult::Written)
    }
}
