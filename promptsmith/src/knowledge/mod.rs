//! Knowledge documents: parse per-model best-practice markdown into structured rules.
//!
//! A document is split into flat [`Section`]s at heading boundaries. On top of that the parser
//! recognises a TL;DR block (rules, avoid-list, quick-start example) and a checklist, and
//! [`extract_rules`] folds everything into [`ExtractedRules`].
//!
//! # Example
//!
//! ```
//! use promptsmith::knowledge::{extract_rules, parse_text};
//!
//! let doc = parse_text("# Claude\n\n## Checklist\n- [ ] Use XML tags\n");
//! assert_eq!(doc.title, "Claude");
//! assert_eq!(extract_rules(&doc).checklist, vec!["Use XML tags"]);
//! ```

mod document;
mod embedded;
mod error;
mod extract;
mod markdown;
mod parser;
mod source;

pub use document::{ParsedDocument, Section, TldrBlock};
pub use embedded::EmbeddedSource;
pub use error::ParseError;
pub use extract::{extract_rules, ExtractedRules};
pub use parser::{parse_file, parse_text};
pub use source::{DirectorySource, KnowledgeSource};
