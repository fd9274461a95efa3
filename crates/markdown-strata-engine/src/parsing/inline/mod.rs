//! Inline extraction: per-block scanning for links, images, reference
//! links, inline HTML, footnote references and emphasis. Blocks are
//! independent of each other at this stage.

pub mod cursor;
pub mod parser;
pub mod types;

pub use parser::extract_spans;
pub use types::{InlineSpan, SpanKind};

use super::kinds::BlockQuote;
use super::types::{Block, BlockKind};

/// Extracts the inline spans of one block, scanning line by line so every
/// span carries an exact 1-indexed source line.
pub fn spans_for_block(block: &Block) -> Vec<InlineSpan> {
    match &block.kind {
        BlockKind::Heading { .. } => {
            extract_spans(block.start_line, block.raw.lines().next().unwrap_or(""))
        }
        BlockKind::Paragraph { .. } => {
            let mut out = Vec::new();
            for (offset, raw) in block.raw.lines().enumerate() {
                out.extend(extract_spans(block.start_line + offset, raw));
            }
            out
        }
        BlockKind::BlockQuote { .. } => {
            let mut out = Vec::new();
            for (offset, raw) in block.raw.lines().enumerate() {
                let (_, text) = BlockQuote::strip_prefixes(raw);
                out.extend(extract_spans(block.start_line + offset, text));
            }
            out
        }
        BlockKind::List { items, .. } => {
            items.iter().flat_map(|i| extract_spans(i.line, &i.text)).collect()
        }
        _ => Vec::new(),
    }
}
