/// Block-level HTML regions. A line opening a known block-level tag starts
/// an HTML block that runs until a blank line or the matching closing tag.
pub struct HtmlBlock;

impl HtmlBlock {
    /// Tag names that open an HTML block when they start a line.
    pub const BLOCK_TAGS: &'static [&'static str] = &[
        "address", "article", "aside", "blockquote", "details", "dd", "div", "dl", "dt",
        "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6",
        "header", "hr", "iframe", "li", "main", "nav", "ol", "p", "pre", "script", "section",
        "style", "summary", "table", "tbody", "td", "th", "thead", "tr", "ul",
    ];

    /// Returns the (lowercased) tag name when the line opens a block-level
    /// element.
    pub fn open_tag(line: &str) -> Option<String> {
        let t = line.trim_start();
        let rest = t.strip_prefix('<')?;
        if !rest.chars().next().is_some_and(|c| c.is_ascii_alphabetic()) {
            return None;
        }
        let name_len = rest.bytes().take_while(|b| b.is_ascii_alphanumeric()).count();
        let name = rest[..name_len].to_ascii_lowercase();
        let after = &rest[name_len..];
        if !(after.is_empty() || after.starts_with(['>', ' ', '\t', '/'])) {
            return None;
        }
        Self::BLOCK_TAGS.contains(&name.as_str()).then_some(name)
    }

    /// True when the line contains the matching closing tag.
    pub fn closes(tag: &str, line: &str) -> bool {
        line.to_ascii_lowercase().contains(&format!("</{tag}>"))
    }

    /// True when the opening line already terminates its own block.
    pub fn self_contained(tag: &str, line: &str) -> bool {
        Self::closes(tag, line) || line.trim_end().ends_with("/>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_tags_open() {
        assert_eq!(HtmlBlock::open_tag("<div class=\"x\">"), Some("div".to_string()));
        assert_eq!(HtmlBlock::open_tag("<table>"), Some("table".to_string()));
        assert_eq!(HtmlBlock::open_tag("<DIV>"), Some("div".to_string()));
    }

    #[test]
    fn inline_tags_do_not_open_blocks() {
        assert_eq!(HtmlBlock::open_tag("<span>text</span>"), None);
        assert_eq!(HtmlBlock::open_tag("<em>hi</em>"), None);
    }

    #[test]
    fn non_tags_are_rejected() {
        assert_eq!(HtmlBlock::open_tag("< div>"), None);
        assert_eq!(HtmlBlock::open_tag("<3 hearts"), None);
        assert_eq!(HtmlBlock::open_tag("plain text"), None);
    }

    #[test]
    fn closing_detection() {
        assert!(HtmlBlock::closes("div", "</div>"));
        assert!(HtmlBlock::closes("div", "text</DIV> tail"));
        assert!(!HtmlBlock::closes("div", "</span>"));
    }

    #[test]
    fn single_line_blocks_are_self_contained() {
        assert!(HtmlBlock::self_contained("div", "<div>done</div>"));
        assert!(HtmlBlock::self_contained("hr", "<hr/>"));
        assert!(!HtmlBlock::self_contained("div", "<div>"));
    }
}
