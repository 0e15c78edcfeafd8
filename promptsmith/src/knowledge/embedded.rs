//! Knowledge documents compiled into the binary.
//!
//! **Canonical source**: `promptsmith/knowledge/*.md`. They are embedded at compile time and used
//! when no knowledge directory is configured.

use std::path::PathBuf;

use super::{parse_text, KnowledgeSource, ParseError, ParsedDocument};

macro_rules! embed_knowledge {
    ($name:literal) => {
        ($name, include_str!(concat!("../../knowledge/", $name)))
    };
}

const EMBEDDED: &[(&str, &str)] = &[
    embed_knowledge!("claude-4.md"),
    embed_knowledge!("gpt-5.md"),
    embed_knowledge!("grok-4.md"),
    embed_knowledge!("gemini-3.md"),
    embed_knowledge!("nano-banana.md"),
    embed_knowledge!("grok-aurora.md"),
    embed_knowledge!("perplexity-pro.md"),
];

/// Serves the bundled documents without touching the filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl EmbeddedSource {
    /// Raw markdown of a bundled document.
    pub fn text(document: &str) -> Option<&'static str> {
        EMBEDDED
            .iter()
            .find(|(name, _)| *name == document)
            .map(|(_, text)| *text)
    }
}

impl KnowledgeSource for EmbeddedSource {
    fn load(&self, document: &str) -> Result<ParsedDocument, ParseError> {
        let text = Self::text(document).ok_or_else(|| ParseError::FileNotFound {
            path: PathBuf::from(document),
        })?;
        Ok(parse_text(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::all_models;

    #[test]
    fn every_registry_document_is_embedded() {
        for model in all_models() {
            assert!(
                EmbeddedSource::text(model.document).is_some(),
                "{} not embedded",
                model.document
            );
        }
    }

    #[test]
    fn unknown_document_is_not_found() {
        assert!(matches!(
            EmbeddedSource.load("llama.md"),
            Err(ParseError::FileNotFound { .. })
        ));
    }

    #[test]
    fn embedded_documents_have_tldr() {
        for (name, _) in EMBEDDED {
            let doc = EmbeddedSource.load(name).unwrap();
            let tldr = doc.tldr.unwrap_or_default();
            assert!(!tldr.rules.is_empty(), "{name} has no rules");
            assert!(!tldr.avoid.is_empty(), "{name} has no avoid list");
            assert!(!tldr.quick_start.is_empty(), "{name} has no quick start");
            assert!(!doc.checklist.is_empty(), "{name} has no checklist");
        }
    }
}
