/// Blockquote prefix handling; all `>`-syntax knowledge lives here.
pub struct BlockQuote;

impl BlockQuote {
    pub const PREFIX: char = '>';

    /// Strips `>` prefixes from a line, returning the quote depth and the
    /// content after the prefixes.
    ///
    /// Handles `> text`, `>> nested` and `> > spaced nested`. Depth 0 means
    /// the line is not a blockquote; the original line is returned as-is.
    pub fn strip_prefixes(line: &str) -> (usize, &str) {
        let b = line.as_bytes();
        let mut i = 0usize;
        let mut depth = 0usize;

        loop {
            while i < b.len() && b[i] == b' ' {
                i += 1;
            }
            if i < b.len() && b[i] == (Self::PREFIX as u8) {
                depth += 1;
                i += 1;
                if i < b.len() && b[i] == b' ' {
                    i += 1;
                }
            } else {
                break;
            }
        }
        if depth == 0 { (0, line) } else { (depth, &line[i..]) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_line_is_not_a_quote() {
        assert_eq!(BlockQuote::strip_prefixes("hello"), (0, "hello"));
    }

    #[test]
    fn single_quote() {
        assert_eq!(BlockQuote::strip_prefixes("> hello"), (1, "hello"));
    }

    #[test]
    fn spaced_nested_quote() {
        assert_eq!(BlockQuote::strip_prefixes("> > hello"), (2, "hello"));
    }

    #[test]
    fn tight_nested_quote() {
        assert_eq!(BlockQuote::strip_prefixes(">> hello"), (2, "hello"));
    }

    #[test]
    fn bare_marker_has_empty_content() {
        assert_eq!(BlockQuote::strip_prefixes(">"), (1, ""));
    }
}
