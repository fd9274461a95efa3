use std::collections::HashMap;

use serde::Serialize;

use super::inline::{InlineSpan, SpanKind};
use super::types::{Block, BlockKind};

/// A footnote definition collected in pass one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FootnoteDefinition {
    pub id: String,
    pub body: String,
    /// Defining line, 1-indexed.
    pub line: usize,
}

/// A reference-link definition (`[id]: url "title"`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceDefinition {
    pub id: String,
    pub url: String,
    pub title: Option<String>,
    pub line: usize,
}

/// Document-wide definition table. The first definition of an id wins;
/// later duplicates are recorded but never used.
#[derive(Debug, Default)]
pub struct DefinitionIndex {
    footnotes: Vec<FootnoteDefinition>,
    footnote_ids: HashMap<String, usize>,
    pub duplicate_footnotes: Vec<FootnoteDefinition>,
    references: Vec<ReferenceDefinition>,
    reference_ids: HashMap<String, usize>,
    pub duplicate_references: Vec<ReferenceDefinition>,
}

impl DefinitionIndex {
    /// Pass one: collect every definition block in document order.
    pub fn collect(blocks: &[Block]) -> Self {
        let mut idx = Self::default();
        for b in blocks {
            match &b.kind {
                BlockKind::FootnoteDef { id, body } => {
                    let def = FootnoteDefinition {
                        id: id.clone(),
                        body: body.clone(),
                        line: b.start_line,
                    };
                    if idx.footnote_ids.contains_key(id) {
                        idx.duplicate_footnotes.push(def);
                    } else {
                        idx.footnote_ids.insert(id.clone(), idx.footnotes.len());
                        idx.footnotes.push(def);
                    }
                }
                BlockKind::ReferenceDef { id, url, title } => {
                    let def = ReferenceDefinition {
                        id: id.clone(),
                        url: url.clone(),
                        title: title.clone(),
                        line: b.start_line,
                    };
                    if idx.reference_ids.contains_key(id) {
                        idx.duplicate_references.push(def);
                    } else {
                        idx.reference_ids.insert(id.clone(), idx.references.len());
                        idx.references.push(def);
                    }
                }
                _ => {}
            }
        }
        idx
    }

    pub fn footnote(&self, id: &str) -> Option<&FootnoteDefinition> {
        self.footnote_ids.get(id).map(|&i| &self.footnotes[i])
    }

    pub fn reference(&self, id: &str) -> Option<&ReferenceDefinition> {
        self.reference_ids.get(id).map(|&i| &self.references[i])
    }

    pub fn footnotes(&self) -> &[FootnoteDefinition] {
        &self.footnotes
    }

    pub fn references(&self) -> &[ReferenceDefinition] {
        &self.references
    }
}

/// Pass two: bind footnote references and reference links to their
/// definitions. Unmatched ids are flagged `unresolved`, never dropped.
pub fn resolve_spans(spans: &mut [InlineSpan], index: &DefinitionIndex) {
    for span in spans.iter_mut() {
        match span.kind {
            SpanKind::FootnoteRef => {
                let id = span.reference.as_deref().unwrap_or("");
                span.unresolved = index.footnote(id).is_none();
            }
            SpanKind::RefLink => {
                let id = span.reference.as_deref().unwrap_or("");
                match index.reference(id) {
                    Some(def) => span.url = Some(def.url.clone()),
                    None => span.unresolved = true,
                }
            }
            _ => {}
        }
    }
}
