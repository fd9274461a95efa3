//! # Document Parsing
//!
//! The classification-and-assembly engine, in stages:
//!
//! 1. **Line classification** (`classify`): each raw line gets a
//!    context-sensitive kind, with the carried [`classify::ParseMode`]
//!    threaded explicitly through every call.
//! 2. **Block assembly** (`builder`): classified lines are grouped into
//!    [`types::Block`]s, resolving fences, Setext promotion, list nesting
//!    and table candidacy.
//! 3. **Inline extraction** (`inline`): each textual block is scanned for
//!    links, images, inline HTML, footnote references and emphasis.
//! 4. **Table specialization** (`table`): table candidates become
//!    column-typed grids.
//! 5. **Resolution** (`footnotes`): footnote and reference definitions are
//!    collected document-wide, then references bind to them.
//! 6. **Sequential stream** (`sequence`): everything merges into one
//!    line-ordered timeline with strictly increasing ids.
//!
//! The whole pass is a pure function of the document's raw lines; every
//! stage consumes immutable output of the stage before it.

pub mod builder;
pub mod classify;
pub mod footnotes;
pub mod inline;
pub mod kinds;
pub mod options;
pub mod sequence;
pub mod snapshot;
pub mod table;
pub mod types;

use crate::models::document::Document;
use builder::BlockBuilder;
use footnotes::{DefinitionIndex, resolve_spans};
use inline::{InlineSpan, SpanKind, spans_for_block};
use options::ParseOptions;
use sequence::{SequentialElement, build_sequence};
use types::{Block, BlockKind};

/// The frozen result of one parsing pass.
///
/// Everything in here is immutable once construction completes; the
/// accessors expose per-category views and the flattened timeline.
#[derive(Debug)]
pub struct ParsedDocument {
    blocks: Vec<Block>,
    spans: Vec<InlineSpan>,
    definitions: DefinitionIndex,
    sequence: Vec<SequentialElement>,
}

/// Parses a document with default options.
pub fn parse_document(doc: &Document) -> ParsedDocument {
    parse_document_with(doc, ParseOptions::default())
}

/// Parses a document with explicit options.
pub fn parse_document_with(doc: &Document, opts: ParseOptions) -> ParsedDocument {
    let mut builder = BlockBuilder::new(opts);
    let skip_until = doc.front_matter().map(|fm| fm.end_line).unwrap_or(0);
    for (line_no, raw) in doc.numbered_lines() {
        if line_no <= skip_until {
            continue;
        }
        builder.push(line_no, raw);
    }
    let mut blocks = builder.finish();

    if let Some(fm) = doc.front_matter() {
        let raw: Vec<&str> = (fm.start_line..=fm.end_line).filter_map(|n| doc.line(n)).collect();
        blocks.insert(0, Block {
            kind: BlockKind::FrontMatter,
            start_line: fm.start_line,
            end_line: fm.end_line,
            raw: raw.join("\n"),
        });
    }

    let mut spans: Vec<InlineSpan> = blocks.iter().flat_map(spans_for_block).collect();
    let definitions = DefinitionIndex::collect(&blocks);
    resolve_spans(&mut spans, &definitions);
    let sequence = build_sequence(&blocks, &spans);

    ParsedDocument { blocks, spans, definitions, sequence }
}

impl ParsedDocument {
    /// All blocks in document order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// All inline spans in document order.
    pub fn spans(&self) -> &[InlineSpan] {
        &self.spans
    }

    pub fn definitions(&self) -> &DefinitionIndex {
        &self.definitions
    }

    /// The flattened, line-ordered timeline.
    pub fn sequence(&self) -> &[SequentialElement] {
        &self.sequence
    }

    pub fn headings(&self) -> Vec<&Block> {
        self.blocks_of(|k| matches!(k, BlockKind::Heading { .. }))
    }

    pub fn paragraphs(&self) -> Vec<&Block> {
        self.blocks_of(|k| matches!(k, BlockKind::Paragraph { .. }))
    }

    pub fn block_quotes(&self) -> Vec<&Block> {
        self.blocks_of(|k| matches!(k, BlockKind::BlockQuote { .. }))
    }

    pub fn code_blocks(&self) -> Vec<&Block> {
        self.blocks_of(|k| matches!(k, BlockKind::Code { .. }))
    }

    pub fn lists(&self) -> Vec<&Block> {
        self.blocks_of(|k| matches!(k, BlockKind::List { .. }))
    }

    pub fn tables(&self) -> Vec<&Block> {
        self.blocks_of(|k| matches!(k, BlockKind::Table(_)))
    }

    pub fn html_blocks(&self) -> Vec<&Block> {
        self.blocks_of(|k| matches!(k, BlockKind::Html { .. }))
    }

    pub fn links(&self) -> Vec<&InlineSpan> {
        self.spans_of(|k| matches!(k, SpanKind::TextLink | SpanKind::RefLink))
    }

    pub fn images(&self) -> Vec<&InlineSpan> {
        self.spans_of(|k| matches!(k, SpanKind::ImageLink))
    }

    fn blocks_of(&self, pred: impl Fn(&BlockKind) -> bool) -> Vec<&Block> {
        self.blocks.iter().filter(|b| pred(&b.kind)).collect()
    }

    fn spans_of(&self, pred: impl Fn(&SpanKind) -> bool) -> Vec<&InlineSpan> {
        self.spans.iter().filter(|s| pred(&s.kind)).collect()
    }
}
