use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading the text to scan.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The file is missing, unreadable, or not valid UTF-8.
    #[error("failed to read source file at {}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    pub fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileAccess {
            path: path.into(),
            source,
        }
    }

    /// Path of the file that could not be read.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::FileAccess { path, .. } => path,
        }
    }
}
