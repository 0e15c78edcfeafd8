//! Where knowledge documents come from.

use std::path::{Path, PathBuf};

use super::{parse_file, ParseError, ParsedDocument};

/// Loads and parses a knowledge document by its registry file name (e.g. `claude-4.md`).
///
/// The rule store only talks to this trait, so tests can count or fake document loads.
pub trait KnowledgeSource: Send + Sync {
    fn load(&self, document: &str) -> Result<ParsedDocument, ParseError>;
}

/// Reads documents from a base directory on disk.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    base: PathBuf,
}

impl DirectorySource {
    pub fn new(base: impl AsRef<Path>) -> Self {
        Self {
            base: base.as_ref().to_path_buf(),
        }
    }
}

impl KnowledgeSource for DirectorySource {
    fn load(&self, document: &str) -> Result<ParsedDocument, ParseError> {
        parse_file(self.base.join(document))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_relative_to_base() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("m.md"), "# Model\n").unwrap();
        let source = DirectorySource::new(dir.path());
        assert_eq!(source.load("m.md").unwrap().title, "Model");
    }

    #[test]
    fn missing_document_is_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let source = DirectorySource::new(dir.path());
        assert!(matches!(
            source.load("nope.md"),
            Err(ParseError::FileNotFound { .. })
        ));
    }
}
