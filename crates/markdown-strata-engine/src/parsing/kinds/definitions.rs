use std::sync::OnceLock;

use regex::Regex;

/// Footnote definition lines: `[^id]: body`.
pub struct FootnoteDefLine;

impl FootnoteDefLine {
    pub fn parse(line: &str) -> Option<(String, String)> {
        let c = footnote_re().captures(line)?;
        Some((c[1].to_string(), c[2].trim().to_string()))
    }

    /// Continuation lines are indented under the definition.
    pub fn is_continuation(line: &str) -> bool {
        line.starts_with([' ', '\t']) && !line.trim().is_empty()
    }
}

/// Reference-link definition lines: `[id]: url "optional title"`.
pub struct ReferenceDefLine;

impl ReferenceDefLine {
    pub fn parse(line: &str) -> Option<(String, String, Option<String>)> {
        let c = reference_re().captures(line)?;
        let id = c[1].to_string();
        if id.starts_with('^') {
            return None;
        }
        Some((id, c[2].to_string(), c.get(3).map(|m| m.as_str().to_string())))
    }
}

fn footnote_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\[\^([^\]\s]+)\]:\s*(.*)$").expect("invalid footnote regex"))
}

fn reference_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"^ {0,3}\[([^\]]+)\]:\s+(\S+)(?:\s+"([^"]*)")?\s*$"#)
            .expect("invalid reference regex")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footnote_definition() {
        assert_eq!(
            FootnoteDefLine::parse("[^1]: Note body"),
            Some(("1".to_string(), "Note body".to_string()))
        );
        assert_eq!(
            FootnoteDefLine::parse("[^long-id]: text"),
            Some(("long-id".to_string(), "text".to_string()))
        );
    }

    #[test]
    fn footnote_requires_caret() {
        assert_eq!(FootnoteDefLine::parse("[1]: not a footnote"), None);
    }

    #[test]
    fn continuation_lines_are_indented() {
        assert!(FootnoteDefLine::is_continuation("  more body"));
        assert!(FootnoteDefLine::is_continuation("\tmore body"));
        assert!(!FootnoteDefLine::is_continuation("top level"));
        assert!(!FootnoteDefLine::is_continuation("   "));
    }

    #[test]
    fn reference_definition() {
        assert_eq!(
            ReferenceDefLine::parse("[docs]: https://example.com"),
            Some(("docs".to_string(), "https://example.com".to_string(), None))
        );
        assert_eq!(
            ReferenceDefLine::parse("[docs]: https://example.com \"The docs\""),
            Some((
                "docs".to_string(),
                "https://example.com".to_string(),
                Some("The docs".to_string())
            ))
        );
    }

    #[test]
    fn footnote_shape_is_not_a_reference() {
        assert_eq!(ReferenceDefLine::parse("[^1]: body text"), None);
    }
}
