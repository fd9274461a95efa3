use serde::Serialize;

use super::kinds::TaskState;
use super::table::TableModel;

/// A contiguous block of the document.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub kind: BlockKind,
    /// First contributing raw line, 1-indexed.
    pub start_line: usize,
    /// Last contributing raw line, inclusive.
    pub end_line: usize,
    /// The raw source lines of the block, joined with `\n`.
    pub raw: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BlockKind {
    Heading {
        level: u8,
        text: String,
        /// True for underlined (Setext) headings.
        setext: bool,
    },
    Paragraph {
        text: String,
    },
    BlockQuote {
        /// Quoted text with the `>` prefixes stripped, lines joined with `\n`.
        text: String,
    },
    Code {
        language: Option<String>,
        /// Content without the fence lines themselves.
        content: String,
        fenced: bool,
        /// An unterminated fence ran to end of document.
        incomplete: bool,
    },
    List {
        ordered: bool,
        items: Vec<ListItem>,
    },
    Table(TableModel),
    Html {
        /// The block ran to end of document without blank line or close tag.
        incomplete: bool,
    },
    FootnoteDef {
        id: String,
        body: String,
    },
    ReferenceDef {
        id: String,
        url: String,
        title: Option<String>,
    },
    ThematicBreak,
    FrontMatter,
}

/// One item of a list block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListItem {
    /// Source line of the item's marker, 1-indexed.
    pub line: usize,
    /// Nesting depth derived from indentation; 0 for top-level items.
    pub depth: usize,
    pub ordered: bool,
    pub task: TaskState,
    pub text: String,
}
