//! Query helpers layered on [`ParsedDocument`]: outline views and the feed
//! handed to the external link-validation collaborator.

use serde::Serialize;

use crate::parsing::ParsedDocument;
use crate::parsing::inline::SpanKind;
use crate::parsing::types::{Block, BlockKind};

/// One entry of the heading outline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TocEntry {
    pub level: u8,
    pub text: String,
    pub line: usize,
}

/// A link candidate for the external validator: ordered, with the line and
/// display text it was found with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkCandidate {
    pub url: String,
    pub line: usize,
    pub text: String,
}

impl ParsedDocument {
    /// Headings of one level, in document order.
    pub fn headings_by_level(&self, level: u8) -> Vec<&Block> {
        self.headings()
            .into_iter()
            .filter(|b| matches!(&b.kind, BlockKind::Heading { level: l, .. } if *l == level))
            .collect()
    }

    /// The document outline down to `max_level`.
    pub fn table_of_contents(&self, max_level: u8) -> Vec<TocEntry> {
        self.headings()
            .into_iter()
            .filter_map(|b| match &b.kind {
                BlockKind::Heading { level, text, .. } if *level <= max_level => {
                    Some(TocEntry { level: *level, text: text.clone(), line: b.start_line })
                }
                _ => None,
            })
            .collect()
    }

    /// Ordered network-link candidates. Fragment-only, relative, `mailto:`
    /// and `ftp:` targets are excluded; only http/https URLs go to the
    /// validator.
    pub fn link_candidates(&self) -> Vec<LinkCandidate> {
        self.spans()
            .iter()
            .filter(|s| {
                matches!(s.kind, SpanKind::TextLink | SpanKind::ImageLink | SpanKind::RefLink)
            })
            .filter_map(|s| {
                let url = s.url.clone()?;
                is_network_url(&url)
                    .then(|| LinkCandidate { url, line: s.line, text: s.text.clone() })
            })
            .collect()
    }
}

fn is_network_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}
