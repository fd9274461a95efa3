/// Fence marker character, backticks or tildes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceMarker {
    Backtick,
    Tilde,
}

impl FenceMarker {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '`' => Some(Self::Backtick),
            '~' => Some(Self::Tilde),
            _ => None,
        }
    }
}

/// Signature of a fence line: marker character, run length and the language
/// tag (first word of the info string, if any).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceSig {
    pub marker: FenceMarker,
    pub len: usize,
    pub language: Option<String>,
}

pub struct CodeFence;

impl CodeFence {
    pub const MIN_LEN: usize = 3;

    /// Reads a fence signature: a run of three or more identical backticks
    /// or tildes, indented at most three spaces.
    pub fn sig(line: &str) -> Option<FenceSig> {
        let t = line.trim_start_matches(' ');
        if line.len() - t.len() > 3 {
            return None;
        }
        let first = t.chars().next()?;
        let marker = FenceMarker::from_char(first)?;
        let len = t.chars().take_while(|&c| c == first).count();
        if len < Self::MIN_LEN {
            return None;
        }
        let language = t[len..].split_whitespace().next().map(str::to_string);
        Some(FenceSig { marker, len, language })
    }

    /// A closing line repeats the opening marker at least as many times and
    /// carries no info text.
    pub fn closes(open: &FenceSig, line: &str) -> bool {
        match Self::sig(line) {
            Some(close) => {
                close.marker == open.marker && close.len >= open.len && close.language.is_none()
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_backtick_fence_with_language() {
        let sig = CodeFence::sig("```python").unwrap();
        assert_eq!(sig.marker, FenceMarker::Backtick);
        assert_eq!(sig.len, 3);
        assert_eq!(sig.language.as_deref(), Some("python"));
    }

    #[test]
    fn detect_tilde_fence() {
        let sig = CodeFence::sig("~~~~").unwrap();
        assert_eq!(sig.marker, FenceMarker::Tilde);
        assert_eq!(sig.len, 4);
        assert_eq!(sig.language, None);
    }

    #[test]
    fn language_is_first_word_only() {
        let sig = CodeFence::sig("```rust ignore").unwrap();
        assert_eq!(sig.language.as_deref(), Some("rust"));
    }

    #[test]
    fn short_runs_are_not_fences() {
        assert_eq!(CodeFence::sig("``"), None);
        assert_eq!(CodeFence::sig("hello"), None);
    }

    #[test]
    fn close_needs_matching_marker_and_length() {
        let open = CodeFence::sig("````").unwrap();
        assert!(CodeFence::closes(&open, "````"));
        assert!(CodeFence::closes(&open, "`````"));
        assert!(!CodeFence::closes(&open, "```"));
        assert!(!CodeFence::closes(&open, "~~~~"));
    }

    #[test]
    fn close_must_be_bare() {
        let open = CodeFence::sig("```").unwrap();
        assert!(!CodeFence::closes(&open, "```rust"));
    }
}
