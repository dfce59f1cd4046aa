//! Where input documents come from.

use std::{
    collections::HashMap,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use encoding_rs::{Encoding, UTF_8};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("the document does not exist")]
    NotFound,
    #[error("{0:?} is not a plain document name")]
    InvalidName(String),
    #[error("the document could not be read")]
    Io(#[from] std::io::Error),
    /// For [`DocumentSource`] implementations whose failures fit none of the other variants,
    /// e.g. a database or archive backend.
    #[error("an unspecified error occurred while loading the document")]
    UnspecifiedLoad(Box<dyn std::error::Error + Send + Sync>),
}

/// Supplies the text of input documents by name (`index.xml`, `classFoo.xml`, ...).
pub trait DocumentSource {
    fn read_document(&self, name: &str) -> Result<String, SourceError>;
}

/// Reads documents from a directory on disk.
#[derive(Clone, Debug)]
pub struct DirectorySource {
    base_path: PathBuf,
}

impl DirectorySource {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

impl DocumentSource for DirectorySource {
    fn read_document(&self, name: &str) -> Result<String, SourceError> {
        if name.is_empty() || name.contains(['/', '\\', ':']) || name == ".." {
            return Err(SourceError::InvalidName(name.to_string()));
        }
        let buf = std::fs::read(self.base_path.join(name)).map_err(|e| match e.kind() {
            ErrorKind::NotFound => SourceError::NotFound,
            _ => SourceError::Io(e),
        })?;
        // Sniffs a BOM, falls back to UTF-8
        let (decoded, _, had_errors) = Encoding::decode(UTF_8, &buf);
        if had_errors {
            log::warn!("{name}: replaced malformed byte sequences while decoding");
        }
        Ok(decoded.into_owned())
    }
}

/// Documents held in memory, mostly useful for tests and for callers that fetched the XML
/// themselves.
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    documents: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, text: impl Into<String>) {
        self.documents.insert(name.into(), text.into());
    }

    pub fn with_document(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(name, text);
        self
    }
}

impl DocumentSource for MemorySource {
    fn read_document(&self, name: &str) -> Result<String, SourceError> {
        self.documents.get(name).cloned().ok_or(SourceError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_source_reads_and_strips_bom() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.xml"), b"\xEF\xBB\xBF<a/>").unwrap();
        let source = DirectorySource::new(dir.path());
        assert_eq!(source.read_document("a.xml").unwrap(), "<a/>");
        assert!(matches!(
            source.read_document("b.xml"),
            Err(SourceError::NotFound)
        ));
    }

    #[test]
    fn directory_source_rejects_paths() {
        let source = DirectorySource::new("/nonexistent");
        for name in ["../a.xml", "sub/a.xml", "c:a.xml", ""] {
            assert!(
                matches!(source.read_document(name), Err(SourceError::InvalidName(_))),
                "{name}"
            );
        }
    }

    #[test]
    fn memory_source() {
        let source = MemorySource::new().with_document("index.xml", "<doxygenindex/>");
        assert_eq!(source.read_document("index.xml").unwrap(), "<doxygenindex/>");
        assert!(matches!(
            source.read_document("Doxyfile.xml"),
            Err(SourceError::NotFound)
        ));
    }
}
