use serde::Serialize;

use super::inline::{InlineSpan, SpanKind};
use super::kinds::TaskState;
use super::types::{Block, BlockKind};

/// Element kinds of the flattened document timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    FrontMatter,
    Header,
    Paragraph,
    Blockquote,
    CodeBlock,
    List,
    ListItem,
    Table,
    HtmlBlock,
    FootnoteDefinition,
    ThematicBreak,
    Link,
    Image,
}

impl ElementKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FrontMatter => "front_matter",
            Self::Header => "header",
            Self::Paragraph => "paragraph",
            Self::Blockquote => "blockquote",
            Self::CodeBlock => "code_block",
            Self::List => "list",
            Self::ListItem => "list_item",
            Self::Table => "table",
            Self::HtmlBlock => "html_block",
            Self::FootnoteDefinition => "footnote_definition",
            Self::ThematicBreak => "thematic_break",
            Self::Link => "link",
            Self::Image => "image",
        }
    }
}

/// One record of the canonical ordered timeline: the single source of
/// truth consumed by export, statistics and search collaborators.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SequentialElement {
    /// Strictly increasing, in document order.
    pub id: usize,
    #[serde(rename = "type")]
    pub kind: ElementKind,
    /// 1-indexed source line the element starts on.
    pub line: usize,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl SequentialElement {
    fn new(kind: ElementKind, line: usize, content: String) -> Self {
        Self { id: 0, kind, line, content, url: None, level: None, checked: None, language: None }
    }
}

// Tiebreak ranks for elements starting on the same line: the owning block
// first, then list items, then inline spans in scan order.
const RANK_BLOCK: u8 = 0;
const RANK_ITEM: u8 = 1;
const RANK_SPAN: u8 = 2;

/// Merges blocks, list items and link/image spans into one stream ordered
/// by source line, assigning strictly increasing ids.
///
/// This is a merge by line number across the per-category collections, not
/// a concatenation: thematic breaks, front matter and HTML blocks interleave
/// with block-derived elements in true document order.
pub fn build_sequence(blocks: &[Block], spans: &[InlineSpan]) -> Vec<SequentialElement> {
    let mut staged: Vec<(usize, u8, SequentialElement)> = Vec::new();

    for b in blocks {
        stage_block(b, &mut staged);
    }
    for s in spans {
        let kind = match s.kind {
            SpanKind::TextLink | SpanKind::RefLink => ElementKind::Link,
            SpanKind::ImageLink => ElementKind::Image,
            _ => continue,
        };
        let mut e = SequentialElement::new(kind, s.line, s.text.clone());
        e.url = s.url.clone();
        staged.push((s.line, RANK_SPAN, e));
    }

    staged.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));

    staged
        .into_iter()
        .enumerate()
        .map(|(i, (_, _, mut e))| {
            e.id = i + 1;
            e
        })
        .collect()
}

fn stage_block(b: &Block, staged: &mut Vec<(usize, u8, SequentialElement)>) {
    match &b.kind {
        BlockKind::FrontMatter => {
            let inner: Vec<&str> = b.raw.lines().collect();
            let content =
                if inner.len() > 2 { inner[1..inner.len() - 1].join("\n") } else { String::new() };
            staged.push((b.start_line, RANK_BLOCK, SequentialElement::new(
                ElementKind::FrontMatter,
                b.start_line,
                content,
            )));
        }
        BlockKind::Heading { level, text, .. } => {
            let mut e = SequentialElement::new(ElementKind::Header, b.start_line, text.clone());
            e.level = Some(*level as usize);
            staged.push((b.start_line, RANK_BLOCK, e));
        }
        BlockKind::Paragraph { text } => {
            staged.push((b.start_line, RANK_BLOCK, SequentialElement::new(
                ElementKind::Paragraph,
                b.start_line,
                text.clone(),
            )));
        }
        BlockKind::BlockQuote { text } => {
            staged.push((b.start_line, RANK_BLOCK, SequentialElement::new(
                ElementKind::Blockquote,
                b.start_line,
                text.clone(),
            )));
        }
        BlockKind::Code { language, content, .. } => {
            let mut e =
                SequentialElement::new(ElementKind::CodeBlock, b.start_line, content.clone());
            e.language = language.clone();
            staged.push((b.start_line, RANK_BLOCK, e));
        }
        BlockKind::List { items, .. } => {
            // One marker element for the block, then one element per item.
            staged.push((b.start_line, RANK_BLOCK, SequentialElement::new(
                ElementKind::List,
                b.start_line,
                String::new(),
            )));
            for item in items {
                let mut e =
                    SequentialElement::new(ElementKind::ListItem, item.line, item.text.clone());
                e.level = Some(item.depth);
                e.checked = match item.task {
                    TaskState::None => None,
                    TaskState::Unchecked => Some(false),
                    TaskState::Checked => Some(true),
                };
                staged.push((item.line, RANK_ITEM, e));
            }
        }
        // Row structure lives in the TableModel; the timeline only carries
        // a marker for the table's position.
        BlockKind::Table(_) => {
            staged.push((b.start_line, RANK_BLOCK, SequentialElement::new(
                ElementKind::Table,
                b.start_line,
                String::new(),
            )));
        }
        BlockKind::Html { .. } => {
            staged.push((b.start_line, RANK_BLOCK, SequentialElement::new(
                ElementKind::HtmlBlock,
                b.start_line,
                b.raw.clone(),
            )));
        }
        BlockKind::FootnoteDef { body, .. } => {
            staged.push((b.start_line, RANK_BLOCK, SequentialElement::new(
                ElementKind::FootnoteDefinition,
                b.start_line,
                body.clone(),
            )));
        }
        // Reference definitions are binding metadata, not timeline content.
        BlockKind::ReferenceDef { .. } => {}
        BlockKind::ThematicBreak => {
            staged.push((b.start_line, RANK_BLOCK, SequentialElement::new(
                ElementKind::ThematicBreak,
                b.start_line,
                String::new(),
            )));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::types::ListItem;

    fn block(kind: BlockKind, start: usize, end: usize) -> Block {
        Block { kind, start_line: start, end_line: end, raw: String::new() }
    }

    #[test]
    fn ids_are_strictly_increasing_and_line_ordered() {
        let blocks = vec![
            block(BlockKind::Heading { level: 1, text: "t".into(), setext: false }, 1, 1),
            block(BlockKind::Paragraph { text: "p".into() }, 3, 3),
            block(BlockKind::ThematicBreak, 5, 5),
        ];
        let seq = build_sequence(&blocks, &[]);
        let ids: Vec<usize> = seq.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(seq.windows(2).all(|w| w[0].line <= w[1].line));
    }

    #[test]
    fn list_contributes_marker_plus_items() {
        let items = vec![
            ListItem { line: 2, depth: 0, ordered: false, task: TaskState::Unchecked, text: "a".into() },
            ListItem { line: 3, depth: 0, ordered: false, task: TaskState::Checked, text: "b".into() },
        ];
        let blocks = vec![block(BlockKind::List { ordered: false, items }, 2, 3)];
        let seq = build_sequence(&blocks, &[]);
        assert_eq!(seq.len(), 3);
        assert_eq!(seq[0].kind, ElementKind::List);
        assert_eq!(seq[1].checked, Some(false));
        assert_eq!(seq[2].checked, Some(true));
    }

    #[test]
    fn spans_interleave_after_their_block() {
        let blocks = vec![block(BlockKind::Paragraph { text: "p".into() }, 1, 1)];
        let mut span = InlineSpan::new(SpanKind::TextLink, 1, "x".into());
        span.url = Some("https://example.com".into());
        let seq = build_sequence(&blocks, &[span]);
        assert_eq!(seq[0].kind, ElementKind::Paragraph);
        assert_eq!(seq[1].kind, ElementKind::Link);
        assert_eq!(seq[1].url.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn table_contributes_only_a_marker() {
        let model = crate::parsing::table::parse_table(&[
            "|a|b|".to_string(),
            "|-|-|".to_string(),
            "|1|2|".to_string(),
        ]);
        let blocks = vec![block(BlockKind::Table(model), 1, 3)];
        let seq = build_sequence(&blocks, &[]);
        assert_eq!(seq.len(), 1);
        assert_eq!(seq[0].kind, ElementKind::Table);
    }

    #[test]
    fn footnote_refs_are_not_timeline_elements() {
        let mut s = InlineSpan::new(SpanKind::FootnoteRef, 1, "1".into());
        s.reference = Some("1".into());
        let seq = build_sequence(&[], &[s]);
        assert!(seq.is_empty());
    }
}
