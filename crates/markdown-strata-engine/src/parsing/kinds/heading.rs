use std::sync::OnceLock;

use regex::Regex;

/// ATX heading syntax: `#`-prefixed lines, levels 1-6.
pub struct AtxHeading;

impl AtxHeading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: u8 = 6;

    /// Parses a heading line into `(level, text)`.
    ///
    /// The marker run must be followed by whitespace (or end the line). A
    /// run of seven or more `#` still yields level 6; the surplus markers
    /// stay in the text as literal characters. Image markup inside the
    /// heading is stripped from the captured text.
    pub fn parse(line: &str) -> Option<(u8, String)> {
        let hashes = line.chars().take_while(|&c| c == Self::MARKER).count();
        if hashes == 0 {
            return None;
        }
        let rest = &line[hashes..];
        if !rest.is_empty() && !rest.starts_with([' ', '\t']) {
            return None;
        }
        let max = Self::MAX_LEVEL as usize;
        if hashes <= max {
            Some((hashes as u8, strip_images(rest).trim().to_string()))
        } else {
            Some((Self::MAX_LEVEL, strip_images(&line[max..]).trim().to_string()))
        }
    }
}

/// Setext underline shapes. A dash run is ambiguous (heading underline,
/// thematic break, or plain text) and is resolved by the assembler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Underline {
    Equals,
    Dashes { len: usize },
}

pub struct SetextUnderline;

impl SetextUnderline {
    pub const MIN_LEN: usize = 2;

    pub fn parse(line: &str) -> Option<Underline> {
        let t = line.trim_end();
        if t.len() >= Self::MIN_LEN && t.chars().all(|c| c == '=') {
            return Some(Underline::Equals);
        }
        if t.len() >= Self::MIN_LEN && t.chars().all(|c| c == '-') {
            return Some(Underline::Dashes { len: t.len() });
        }
        None
    }
}

fn image_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"!\[[^\]]*\]\([^)]*\)").expect("invalid image regex"))
}

fn strip_images(text: &str) -> String {
    image_re().replace_all(text, "").into_owned()
}
