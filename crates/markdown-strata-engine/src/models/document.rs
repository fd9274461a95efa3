use crate::parsing::kinds::FrontMatter;

/// Location of a front-matter span, delimiter lines included. The body is
/// opaque; only the span is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontMatterSpan {
    /// Opening `---` line, always 1.
    pub start_line: usize,
    /// Closing `---`/`...` line, inclusive.
    pub end_line: usize,
}

/// An immutable Markdown source buffer: the ordered raw lines plus the
/// located front-matter span. Loaded once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
    front_matter: Option<FrontMatterSpan>,
}

impl Document {
    pub fn from_text(text: &str) -> Self {
        let lines: Vec<String> = text.lines().map(str::to_string).collect();
        let front_matter = locate_front_matter(&lines);
        Self { lines, front_matter }
    }

    /// Returns a raw line by 1-indexed number.
    pub fn line(&self, n: usize) -> Option<&str> {
        self.lines.get(n.checked_sub(1)?).map(String::as_str)
    }

    /// Iterates `(line_number, raw_line)` pairs, 1-indexed.
    pub fn numbered_lines(&self) -> impl Iterator<Item = (usize, &str)> {
        self.lines.iter().enumerate().map(|(i, l)| (i + 1, l.as_str()))
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn front_matter(&self) -> Option<&FrontMatterSpan> {
        self.front_matter.as_ref()
    }
}

/// Front matter must open on line 1 and close with `---` or `...`; without
/// a closer the opening dashes are ordinary content.
fn locate_front_matter(lines: &[String]) -> Option<FrontMatterSpan> {
    let first = lines.first()?;
    if !FrontMatter::is_open(first) {
        return None;
    }
    for (i, line) in lines.iter().enumerate().skip(1) {
        if FrontMatter::is_close(line) {
            return Some(FrontMatterSpan { start_line: 1, end_line: i + 1 });
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_are_one_indexed() {
        let doc = Document::from_text("first\nsecond");
        assert_eq!(doc.line(1), Some("first"));
        assert_eq!(doc.line(2), Some("second"));
        assert_eq!(doc.line(0), None);
        assert_eq!(doc.line(3), None);
        assert_eq!(doc.line_count(), 2);
    }

    #[test]
    fn front_matter_span_is_located() {
        let doc = Document::from_text("---\ntitle: x\n---\nbody");
        let fm = doc.front_matter().unwrap();
        assert_eq!((fm.start_line, fm.end_line), (1, 3));
    }

    #[test]
    fn dotted_closer_is_accepted() {
        let doc = Document::from_text("---\ntitle: x\n...\nbody");
        assert_eq!(doc.front_matter().unwrap().end_line, 3);
    }

    #[test]
    fn unterminated_front_matter_is_ignored() {
        let doc = Document::from_text("---\ntitle: x\nbody");
        assert!(doc.front_matter().is_none());
    }

    #[test]
    fn front_matter_must_start_on_line_one() {
        let doc = Document::from_text("intro\n---\ntitle: x\n---");
        assert!(doc.front_matter().is_none());
    }

    #[test]
    fn empty_document() {
        let doc = Document::from_text("");
        assert!(doc.is_empty());
        assert!(doc.front_matter().is_none());
    }
}
