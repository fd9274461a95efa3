use crate::models::document::Document;
use crate::parsing::ParsedDocument;
use crate::parsing::inline::SpanKind;
use crate::parsing::types::BlockKind;

/// Internal-consistency checks. A violation here is a logic bug in the
/// parser, never a property of the input, so this panics.
pub fn check(doc: &Document, parsed: &ParsedDocument) {
    let blocks = parsed.blocks();

    for b in blocks {
        assert!(
            b.start_line <= b.end_line,
            "inverted block range {}..{}",
            b.start_line,
            b.end_line
        );
        assert!(
            b.end_line <= doc.line_count(),
            "block range {}..{} exceeds document of {} lines",
            b.start_line,
            b.end_line,
            doc.line_count()
        );

        // Raw text must reproduce the source lines of the range exactly.
        let source: Vec<&str> =
            (b.start_line..=b.end_line).filter_map(|n| doc.line(n)).collect();
        assert_eq!(
            b.raw,
            source.join("\n"),
            "block raw text diverges from source lines {}..{}",
            b.start_line,
            b.end_line
        );

        if let BlockKind::List { items, .. } = &b.kind {
            assert!(!items.is_empty(), "empty list block at line {}", b.start_line);
            for item in items {
                assert!(
                    item.line >= b.start_line && item.line <= b.end_line,
                    "list item at line {} outside its block {}..{}",
                    item.line,
                    b.start_line,
                    b.end_line
                );
            }
        }
    }

    for pair in blocks.windows(2) {
        assert!(
            pair[0].end_line < pair[1].start_line,
            "block ranges overlap: ..{} then {}..",
            pair[0].end_line,
            pair[1].start_line
        );
    }

    let mut last_id = 0usize;
    let mut last_line = 0usize;
    for e in parsed.sequence() {
        assert!(e.id > last_id, "sequential ids must strictly increase at id {}", e.id);
        assert!(
            e.line >= last_line,
            "sequential element {} out of document order (line {} after {})",
            e.id,
            e.line,
            last_line
        );
        last_id = e.id;
        last_line = e.line;
    }

    for s in parsed.spans() {
        if s.kind == SpanKind::FootnoteRef && !s.unresolved {
            let id = s.reference.as_deref().unwrap_or("");
            assert!(
                parsed.definitions().footnote(id).is_some(),
                "resolved footnote reference without definition: {id}"
            );
        }
    }
}
