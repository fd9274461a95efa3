use super::kinds::{
    AtxHeading, BlockQuote, CodeFence, FenceSig, FootnoteDefLine, HtmlBlock, ListItemLine,
    ReferenceDefLine, SetextUnderline, TableRow, TaskState, ThematicBreak, Underline, depth_for,
};
use super::options::ParseOptions;

/// Parsing mode carried from one line classification to the next.
///
/// One sum type instead of ad hoc flags, so every transition is handled
/// exhaustively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseMode {
    Normal,
    /// Inside a fenced code block; every line is raw until the close.
    Fence(FenceSig),
    /// Inside a pipe-row run. `columns` is fixed by the alignment row.
    Table { columns: Option<usize> },
    /// The previous line was a blockquote continuation.
    BlockQuote,
    /// Inside a list item at the given nesting depth.
    List { depth: usize },
}

/// Context-sensitive classification of one raw line.
#[derive(Debug, Clone, PartialEq)]
pub enum LineKind {
    Blank,
    FenceOpen(FenceSig),
    FenceClose,
    /// Raw content inside an open fence.
    CodeLine,
    Atx { level: u8, text: String },
    /// A `=`-only underline; promotes the pending line to a level-1 heading.
    EqualsRun,
    /// A `-`-only run. Heading underline, thematic break or plain text
    /// depending on what the assembler holds pending.
    DashRun { len: usize },
    ThematicBreak,
    Quote { depth: usize, text: String },
    FootnoteDef { id: String, body: String },
    ReferenceDef { id: String, url: String, title: Option<String> },
    ListMarker { depth: usize, ordered: bool, task: TaskState, text: String },
    /// Indented text continuing the current list item.
    ListContinuation { text: String },
    /// A line containing an unescaped pipe; a table candidate.
    PipeRow,
    HtmlOpen { tag: String },
    /// A line indented four or more spaces outside list context.
    Indented,
    Text,
}

/// Classifies one line given the carried mode, returning the classification
/// and the mode for the next line. Pure function of its inputs.
pub fn classify(mode: &ParseMode, line: &str, opts: &ParseOptions) -> (LineKind, ParseMode) {
    match mode {
        ParseMode::Fence(sig) => {
            if CodeFence::closes(sig, line) {
                (LineKind::FenceClose, ParseMode::Normal)
            } else {
                (LineKind::CodeLine, ParseMode::Fence(sig.clone()))
            }
        }
        ParseMode::Table { columns } => classify_in_table(*columns, line, opts),
        ParseMode::List { depth } => classify_in_list(*depth, line, opts),
        ParseMode::BlockQuote | ParseMode::Normal => classify_normal(line, opts),
    }
}

fn classify_in_table(
    columns: Option<usize>,
    line: &str,
    opts: &ParseOptions,
) -> (LineKind, ParseMode) {
    if line.trim().is_empty() {
        return (LineKind::Blank, ParseMode::Normal);
    }
    if TableRow::is_row(line) {
        let columns = columns.or_else(|| {
            TableRow::is_alignment_row(line).then(|| TableRow::split_cells(line).len())
        });
        return (LineKind::PipeRow, ParseMode::Table { columns });
    }
    classify_normal(line, opts)
}

fn classify_in_list(depth: usize, line: &str, opts: &ParseOptions) -> (LineKind, ParseMode) {
    if line.trim().is_empty() {
        return (LineKind::Blank, ParseMode::Normal);
    }
    if let Some(m) = ListItemLine::parse(line) {
        let d = depth_for(&m.indent, opts.indent_width);
        let kind = LineKind::ListMarker { depth: d, ordered: m.ordered, task: m.task, text: m.text };
        return (kind, ParseMode::List { depth: d });
    }
    if line.starts_with([' ', '\t']) {
        return (
            LineKind::ListContinuation { text: line.trim().to_string() },
            ParseMode::List { depth },
        );
    }
    classify_normal(line, opts)
}

fn classify_normal(line: &str, opts: &ParseOptions) -> (LineKind, ParseMode) {
    if line.trim().is_empty() {
        return (LineKind::Blank, ParseMode::Normal);
    }
    if let Some(sig) = CodeFence::sig(line) {
        return (LineKind::FenceOpen(sig.clone()), ParseMode::Fence(sig));
    }
    match SetextUnderline::parse(line) {
        Some(Underline::Equals) => return (LineKind::EqualsRun, ParseMode::Normal),
        Some(Underline::Dashes { len }) => return (LineKind::DashRun { len }, ParseMode::Normal),
        None => {}
    }
    if let Some((level, text)) = AtxHeading::parse(line) {
        return (LineKind::Atx { level, text }, ParseMode::Normal);
    }
    let (depth, rest) = BlockQuote::strip_prefixes(line);
    if depth > 0 {
        return (LineKind::Quote { depth, text: rest.to_string() }, ParseMode::BlockQuote);
    }
    if ThematicBreak::matches(line) {
        return (LineKind::ThematicBreak, ParseMode::Normal);
    }
    if let Some((id, body)) = FootnoteDefLine::parse(line) {
        return (LineKind::FootnoteDef { id, body }, ParseMode::Normal);
    }
    if let Some((id, url, title)) = ReferenceDefLine::parse(line) {
        return (LineKind::ReferenceDef { id, url, title }, ParseMode::Normal);
    }
    if let Some(m) = ListItemLine::parse(line) {
        let d = depth_for(&m.indent, opts.indent_width);
        let kind = LineKind::ListMarker { depth: d, ordered: m.ordered, task: m.task, text: m.text };
        return (kind, ParseMode::List { depth: d });
    }
    if TableRow::is_row(line) {
        return (LineKind::PipeRow, ParseMode::Table { columns: None });
    }
    if let Some(tag) = HtmlBlock::open_tag(line) {
        return (LineKind::HtmlOpen { tag }, ParseMode::Normal);
    }
    if line.starts_with("    ") || line.starts_with('\t') {
        return (LineKind::Indented, ParseMode::Normal);
    }
    (LineKind::Text, ParseMode::Normal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn normal(line: &str) -> LineKind {
        classify(&ParseMode::Normal, line, &ParseOptions::default()).0
    }

    #[rstest]
    #[case("# Title", LineKind::Atx { level: 1, text: "Title".to_string() })]
    #[case("====", LineKind::EqualsRun)]
    #[case("---", LineKind::DashRun { len: 3 })]
    #[case("***", LineKind::ThematicBreak)]
    #[case("", LineKind::Blank)]
    #[case("   ", LineKind::Blank)]
    #[case("plain words", LineKind::Text)]
    #[case("|a|b|", LineKind::PipeRow)]
    fn normal_mode_shapes(#[case] line: &str, #[case] expected: LineKind) {
        assert_eq!(normal(line), expected);
    }

    #[test]
    fn fence_open_enters_fence_mode() {
        let (kind, mode) = classify(&ParseMode::Normal, "```rust", &ParseOptions::default());
        assert!(matches!(kind, LineKind::FenceOpen(_)));
        assert!(matches!(mode, ParseMode::Fence(_)));
    }

    #[test]
    fn everything_is_raw_inside_a_fence() {
        let (_, mode) = classify(&ParseMode::Normal, "```", &ParseOptions::default());
        let (kind, mode) = classify(&mode, "# not a heading", &ParseOptions::default());
        assert_eq!(kind, LineKind::CodeLine);
        let (kind, mode) = classify(&mode, "", &ParseOptions::default());
        assert_eq!(kind, LineKind::CodeLine);
        let (kind, mode) = classify(&mode, "```", &ParseOptions::default());
        assert_eq!(kind, LineKind::FenceClose);
        assert_eq!(mode, ParseMode::Normal);
    }

    #[test]
    fn longer_close_matches_shorter_open() {
        let (_, mode) = classify(&ParseMode::Normal, "```", &ParseOptions::default());
        let (kind, _) = classify(&mode, "````", &ParseOptions::default());
        assert_eq!(kind, LineKind::FenceClose);
    }

    #[test]
    fn tilde_fence_does_not_close_backticks() {
        let (_, mode) = classify(&ParseMode::Normal, "```", &ParseOptions::default());
        let (kind, _) = classify(&mode, "~~~", &ParseOptions::default());
        assert_eq!(kind, LineKind::CodeLine);
    }

    #[test]
    fn quote_lines_set_quote_mode() {
        let (kind, mode) = classify(&ParseMode::Normal, "> quoted", &ParseOptions::default());
        assert_eq!(kind, LineKind::Quote { depth: 1, text: "quoted".to_string() });
        assert_eq!(mode, ParseMode::BlockQuote);
    }

    #[test]
    fn list_marker_sets_depth_from_indent() {
        let (kind, mode) = classify(&ParseMode::Normal, "  - nested", &ParseOptions::default());
        assert_eq!(
            kind,
            LineKind::ListMarker {
                depth: 1,
                ordered: false,
                task: TaskState::None,
                text: "nested".to_string()
            }
        );
        assert_eq!(mode, ParseMode::List { depth: 1 });
    }

    #[test]
    fn indented_text_continues_a_list_item() {
        let mode = ParseMode::List { depth: 0 };
        let (kind, next) = classify(&mode, "  wrapped text", &ParseOptions::default());
        assert_eq!(kind, LineKind::ListContinuation { text: "wrapped text".to_string() });
        assert_eq!(next, ParseMode::List { depth: 0 });
    }

    #[test]
    fn alignment_row_fixes_table_columns() {
        let (_, mode) = classify(&ParseMode::Normal, "|a|b|", &ParseOptions::default());
        assert_eq!(mode, ParseMode::Table { columns: None });
        let (_, mode) = classify(&mode, "|-|-|", &ParseOptions::default());
        assert_eq!(mode, ParseMode::Table { columns: Some(2) });
        let (_, mode) = classify(&mode, "|1|2|3|", &ParseOptions::default());
        assert_eq!(mode, ParseMode::Table { columns: Some(2) });
    }

    #[test]
    fn blank_leaves_table_mode() {
        let mode = ParseMode::Table { columns: Some(2) };
        let (kind, next) = classify(&mode, "", &ParseOptions::default());
        assert_eq!(kind, LineKind::Blank);
        assert_eq!(next, ParseMode::Normal);
    }

    #[test]
    fn indented_code_outside_lists() {
        assert_eq!(normal("    let x = 1;"), LineKind::Indented);
        let mode = ParseMode::List { depth: 0 };
        let (kind, _) = classify(&mode, "    let x = 1;", &ParseOptions::default());
        assert_eq!(kind, LineKind::ListContinuation { text: "let x = 1;".to_string() });
    }

    #[test]
    fn definitions_are_recognized() {
        assert_eq!(
            normal("[^1]: Note"),
            LineKind::FootnoteDef { id: "1".to_string(), body: "Note".to_string() }
        );
        assert_eq!(
            normal("[docs]: https://example.com"),
            LineKind::ReferenceDef {
                id: "docs".to_string(),
                url: "https://example.com".to_string(),
                title: None
            }
        );
    }

    #[test]
    fn html_block_opener() {
        assert_eq!(normal("<div>"), LineKind::HtmlOpen { tag: "div".to_string() });
        assert_eq!(normal("<span>x</span>"), LineKind::Text);
    }
}
