use serde::Serialize;

/// The kind of an inline span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanKind {
    TextLink,
    ImageLink,
    /// `[text][id]` reference link, bound to a reference definition.
    RefLink,
    InlineHtml,
    /// `[^id]` footnote reference, bound to a footnote definition.
    FootnoteRef,
    Emphasis,
}

/// An inline construct found inside a textual block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InlineSpan {
    pub kind: SpanKind,
    /// 1-indexed source line the span was found on.
    pub line: usize,
    /// Display text: link text, image alt, emphasis content or raw HTML.
    pub text: String,
    /// Target URL for links and images; filled in for resolved reference
    /// links during footnote/reference resolution.
    pub url: Option<String>,
    /// Definition id for reference links and footnote references.
    pub reference: Option<String>,
    /// Set when a reference/footnote id had no matching definition. The
    /// span is kept as plain inline text for rendering purposes.
    pub unresolved: bool,
}

impl InlineSpan {
    pub(crate) fn new(kind: SpanKind, line: usize, text: String) -> Self {
        Self { kind, line, text, url: None, reference: None, unresolved: false }
    }
}
