use crate::parsing::ParsedDocument;

/// Renders a parse as a compact, stable text form for snapshot tests: one
/// line per sequential element, with the optional fields spelled out.
pub fn normalize(parsed: &ParsedDocument) -> String {
    let mut out = String::new();
    for e in parsed.sequence() {
        let mut parts =
            vec![format!("{:03}", e.id), e.kind.as_str().to_string(), format!("L{}", e.line)];
        if let Some(level) = e.level {
            parts.push(format!("level={level}"));
        }
        if let Some(checked) = e.checked {
            parts.push(format!("checked={checked}"));
        }
        if let Some(lang) = &e.language {
            parts.push(format!("lang={lang}"));
        }
        if let Some(url) = &e.url {
            parts.push(format!("url={url}"));
        }
        parts.push(format!("{:?}", e.content));
        out.push_str(&parts.join(" "));
        out.push('\n');
    }
    out
}
