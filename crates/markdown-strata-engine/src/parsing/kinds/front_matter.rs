/// Front-matter delimiters. The span is located, never parsed: the body is
/// opaque to this engine.
pub struct FrontMatter;

impl FrontMatter {
    /// Opening delimiter, only recognized on the first line of a document.
    pub const OPEN: &'static str = "---";
    /// YAML documents may also terminate with `...`.
    pub const CLOSE_ALT: &'static str = "...";

    pub fn is_open(line: &str) -> bool {
        line.trim_end() == Self::OPEN
    }

    pub fn is_close(line: &str) -> bool {
        let t = line.trim_end();
        t == Self::OPEN || t == Self::CLOSE_ALT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_is_exact_dashes() {
        assert!(FrontMatter::is_open("---"));
        assert!(!FrontMatter::is_open("----"));
        assert!(!FrontMatter::is_open("--- title"));
    }

    #[test]
    fn close_accepts_dots() {
        assert!(FrontMatter::is_close("---"));
        assert!(FrontMatter::is_close("..."));
        assert!(!FrontMatter::is_close("...."));
    }
}
