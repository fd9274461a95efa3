pub mod io;
pub mod models;
pub mod parsing;
pub mod queries;

// Re-export key types for easier usage
pub use models::document::{Document, FrontMatterSpan};
pub use parsing::footnotes::{DefinitionIndex, FootnoteDefinition, ReferenceDefinition};
pub use parsing::inline::{InlineSpan, SpanKind};
pub use parsing::kinds::{Alignment, TaskState};
pub use parsing::options::ParseOptions;
pub use parsing::sequence::{ElementKind, SequentialElement};
pub use parsing::table::TableModel;
pub use parsing::types::{Block, BlockKind, ListItem};
pub use parsing::{ParsedDocument, parse_document, parse_document_with};
