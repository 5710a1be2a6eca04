use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::debug;

use super::{SourceRepository, SourceText};
use crate::error::ScanError;

/// Loads the text to scan from a file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source reading from the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SourceRepository for FileSource {
    fn load_source(&self) -> Result<SourceText, ScanError> {
        // The handle is closed before scanning starts.
        let content = fs::read_to_string(&self.path)
            .map_err(|err| ScanError::file_access(&self.path, err))?;
        let source = SourceText::parse(&content);
        debug!(path = %self.path.display(), lines = source.len(), "loaded source");
        Ok(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn loads_lines_from_disk() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("editor.ts");
        fs::write(&path, "class Editor {\r\n  build() {}\r\n}\r\n").unwrap();

        let source = FileSource::new(&path).load_source().unwrap();
        assert_eq!(source.lines(), ["class Editor {", "  build() {}", "}"]);
    }

    #[test]
    fn missing_file_is_file_access_error() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("missing.ts");

        let err = FileSource::new(&path).load_source().unwrap_err();
        let ScanError::FileAccess { path: failed, source } = err;
        assert_eq!(failed, path);
        assert_eq!(source.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn invalid_utf8_is_file_access_error() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("binary.bin");
        fs::write(&path, [b'{', 0xff, 0xfe, b'}']).unwrap();

        let err = FileSource::new(&path).load_source().unwrap_err();
        let ScanError::FileAccess { source, .. } = err;
        assert_eq!(source.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn directory_is_not_readable_as_source() {
        let temp = tempfile::tempdir().unwrap();
        let err = FileSource::new(temp.path()).load_source().unwrap_err();
        assert_eq!(err.path(), temp.path());
    }
}
