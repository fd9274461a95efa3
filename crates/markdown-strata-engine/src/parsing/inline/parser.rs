use super::cursor::Cursor;
use super::types::{InlineSpan, SpanKind};

/// Scans one line of block text for inline spans.
///
/// Left-to-right, non-overlapping, greedy on the first delimiter found.
/// Malformed or unterminated constructs are left as plain text; nothing
/// here ever fails.
pub fn extract_spans(line_no: usize, text: &str) -> Vec<InlineSpan> {
    let mut cur = Cursor::new(text);
    let mut out = Vec::new();
    while !cur.eof() {
        let matched = match cur.peek() {
            Some(b'!') if cur.starts_with("![") => try_image(&mut cur, line_no),
            Some(b'[') => try_bracket(&mut cur, line_no),
            Some(b'<') => try_inline_html(&mut cur, line_no),
            Some(b'*') | Some(b'_') => try_emphasis(&mut cur, line_no),
            _ => None,
        };
        match matched {
            Some(span) => out.push(span),
            None => {
                cur.bump();
            }
        }
    }
    out
}

fn try_image(cur: &mut Cursor<'_>, line: usize) -> Option<InlineSpan> {
    let saved = cur.clone();
    cur.bump_n(2); // ![
    match direct_link_tail(cur) {
        Some((alt, url)) => {
            let mut span = InlineSpan::new(SpanKind::ImageLink, line, alt);
            span.url = Some(url);
            Some(span)
        }
        None => {
            *cur = saved;
            None
        }
    }
}

/// Dispatches `[`-introduced constructs: footnote references, direct links
/// and reference links.
fn try_bracket(cur: &mut Cursor<'_>, line: usize) -> Option<InlineSpan> {
    let saved = cur.clone();
    cur.bump(); // [

    if cur.peek() == Some(b'^') {
        cur.bump();
        if let Some(id) = cur.take_until(b']')
            && !id.is_empty()
            && !id.contains(char::is_whitespace)
        {
            let mut span = InlineSpan::new(SpanKind::FootnoteRef, line, id.to_string());
            span.reference = Some(id.to_string());
            return Some(span);
        }
        *cur = saved;
        return None;
    }

    let Some(text) = cur.take_until(b']') else {
        *cur = saved;
        return None;
    };
    match cur.peek() {
        Some(b'(') => {
            cur.bump();
            match cur.take_until(b')') {
                Some(url) => {
                    let mut span = InlineSpan::new(SpanKind::TextLink, line, text.to_string());
                    span.url = Some(url.trim().to_string());
                    Some(span)
                }
                None => {
                    *cur = saved;
                    None
                }
            }
        }
        Some(b'[') => {
            cur.bump();
            match cur.take_until(b']') {
                Some(id) => {
                    // `[text][]` collapses to the text as its own id.
                    let id = if id.is_empty() { text } else { id };
                    let mut span = InlineSpan::new(SpanKind::RefLink, line, text.to_string());
                    span.reference = Some(id.to_string());
                    Some(span)
                }
                None => {
                    *cur = saved;
                    None
                }
            }
        }
        _ => {
            *cur = saved;
            None
        }
    }
}

fn direct_link_tail(cur: &mut Cursor<'_>) -> Option<(String, String)> {
    let text = cur.take_until(b']')?;
    if cur.peek() != Some(b'(') {
        return None;
    }
    cur.bump();
    let url = cur.take_until(b')')?;
    Some((text.to_string(), url.trim().to_string()))
}

fn try_inline_html(cur: &mut Cursor<'_>, line: usize) -> Option<InlineSpan> {
    let saved = cur.clone();
    cur.bump(); // <
    let rest = cur.rest();
    if !rest.chars().next().is_some_and(|c| c.is_ascii_alphabetic()) {
        *cur = saved;
        return None;
    }
    let name_len = rest.bytes().take_while(|b| b.is_ascii_alphanumeric()).count();
    let name = rest[..name_len].to_ascii_lowercase();
    let Some(tag_body) = cur.take_until(b'>') else {
        *cur = saved;
        return None;
    };
    let open = format!("<{tag_body}>");
    if open.ends_with("/>") {
        return Some(InlineSpan::new(SpanKind::InlineHtml, line, open));
    }

    // Pair with a closing tag on the same line when one exists; otherwise
    // the lone tag is the span.
    let close = format!("</{name}>");
    let remainder = cur.rest();
    if let Some(at) = remainder.to_ascii_lowercase().find(&close) {
        let consumed = at + close.len();
        let full = format!("{open}{}", &remainder[..consumed]);
        cur.bump_n(consumed);
        return Some(InlineSpan::new(SpanKind::InlineHtml, line, full));
    }
    Some(InlineSpan::new(SpanKind::InlineHtml, line, open))
}

fn try_emphasis(cur: &mut Cursor<'_>, line: usize) -> Option<InlineSpan> {
    let saved = cur.clone();
    let marker = if cur.starts_with("**") {
        "**"
    } else if cur.starts_with("__") {
        "__"
    } else if cur.peek() == Some(b'*') {
        "*"
    } else {
        "_"
    };
    cur.bump_n(marker.len());
    let rest = cur.rest();
    let Some(at) = rest.find(marker) else {
        *cur = saved;
        return None;
    };
    let inner = &rest[..at];
    if inner.trim().is_empty() {
        *cur = saved;
        return None;
    }
    cur.bump_n(at + marker.len());
    Some(InlineSpan::new(SpanKind::Emphasis, line, inner.to_string()))
}
