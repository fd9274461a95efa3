use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

/// Tri-state task marker on a list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskState {
    /// Not a task item at all.
    None,
    /// `[ ]` marker.
    Unchecked,
    /// `[x]` or `[X]` marker.
    Checked,
}

/// A parsed list-marker line, before nesting depth is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListMarker {
    pub ordered: bool,
    /// Raw leading whitespace before the marker.
    pub indent: String,
    pub task: TaskState,
    /// Item text with the marker and any task box removed.
    pub text: String,
}

pub struct ListItemLine;

impl ListItemLine {
    /// Parses `- item`, `* item`, `+ item`, `1. item` and `1) item` lines,
    /// peeling a leading `[ ]`/`[x]` task box off the text.
    pub fn parse(line: &str) -> Option<ListMarker> {
        if let Some(c) = unordered_re().captures(line) {
            let (task, text) = split_task(&c[3]);
            return Some(ListMarker { ordered: false, indent: c[1].to_string(), task, text });
        }
        if let Some(c) = ordered_re().captures(line) {
            let (task, text) = split_task(&c[3]);
            return Some(ListMarker { ordered: true, indent: c[1].to_string(), task, text });
        }
        None
    }
}

/// Converts a marker's leading indentation to a nesting depth.
///
/// Tabs count as one level each; spaces divide by the configured width.
pub fn depth_for(indent: &str, width: usize) -> usize {
    let tabs = indent.chars().take_while(|&c| c == '\t').count();
    if tabs > 0 {
        return tabs;
    }
    if width == 0 {
        return 0;
    }
    indent.chars().take_while(|&c| c == ' ').count() / width
}

fn split_task(rest: &str) -> (TaskState, String) {
    match task_re().captures(rest) {
        Some(c) => {
            let state = if &c[1] == " " { TaskState::Unchecked } else { TaskState::Checked };
            (state, c[2].to_string())
        }
        None => (TaskState::None, rest.to_string()),
    }
}

fn unordered_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^([ \t]*)([-*+])[ \t]+(.*)$").expect("invalid unordered list regex")
    })
}

fn ordered_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^([ \t]*)(\d{1,9})[.)][ \t]+(.*)$").expect("invalid ordered list regex")
    })
}

fn task_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\[([ xX])\]\s*(.*)$").expect("invalid task regex"))
}
