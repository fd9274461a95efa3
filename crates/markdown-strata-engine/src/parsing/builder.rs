use super::classify::{LineKind, ParseMode, classify};
use super::kinds::{FenceSig, FootnoteDefLine, HtmlBlock, TableRow, TaskState, ThematicBreak};
use super::options::ParseOptions;
use super::table;
use super::types::{Block, BlockKind, ListItem};

/// Assembles classified lines into [`Block`]s.
///
/// Carries the [`ParseMode`] between classifications and keeps one open
/// leaf run at a time. Setext promotion works on the open paragraph run
/// instead of mutating already-emitted output.
pub struct BlockBuilder {
    opts: ParseOptions,
    mode: ParseMode,
    leaf: Leaf,
    blocks: Vec<Block>,
}

/// Raw-line accumulator shared by all leaf kinds.
#[derive(Debug)]
struct Run {
    start: usize,
    end: usize,
    raw: Vec<String>,
}

impl Run {
    fn new(line_no: usize, raw: &str) -> Self {
        Self { start: line_no, end: line_no, raw: vec![raw.to_string()] }
    }

    fn push(&mut self, line_no: usize, raw: &str) {
        self.end = line_no;
        self.raw.push(raw.to_string());
    }

    fn raw_text(&self) -> String {
        self.raw.join("\n")
    }
}

#[derive(Debug)]
enum Leaf {
    None,
    Paragraph(Run),
    Quote { run: Run, text: Vec<String> },
    Fence { sig: FenceSig, run: Run, content: Vec<String> },
    IndentedCode { run: Run, content: Vec<String> },
    List { run: Run, ordered: bool, items: Vec<ListItem> },
    Table { run: Run, rows: Vec<String> },
    Html { tag: String, run: Run },
    FootnoteDef { id: String, run: Run, body: Vec<String> },
}

impl BlockBuilder {
    pub fn new(opts: ParseOptions) -> Self {
        Self { opts, mode: ParseMode::Normal, leaf: Leaf::None, blocks: Vec::new() }
    }

    pub fn push(&mut self, line_no: usize, raw: &str) {
        // An open HTML block consumes raw lines until a blank line or its
        // closing tag; classification is suspended inside it.
        if matches!(self.leaf, Leaf::Html { .. }) {
            self.push_html_line(line_no, raw);
            return;
        }

        let (kind, next_mode) = classify(&self.mode, raw, &self.opts);
        self.mode = next_mode;

        match kind {
            LineKind::Blank => self.flush(false),
            LineKind::FenceOpen(sig) => {
                self.flush(false);
                self.leaf = Leaf::Fence { sig, run: Run::new(line_no, raw), content: Vec::new() };
            }
            LineKind::CodeLine => self.push_code_line(line_no, raw),
            LineKind::FenceClose => self.close_fence(line_no, raw),
            LineKind::Atx { level, text } => {
                self.flush(false);
                self.blocks.push(Block {
                    kind: BlockKind::Heading { level, text, setext: false },
                    start_line: line_no,
                    end_line: line_no,
                    raw: raw.to_string(),
                });
            }
            LineKind::EqualsRun => self.underline(line_no, raw, 1, None),
            LineKind::DashRun { len } => self.underline(line_no, raw, 2, Some(len)),
            LineKind::ThematicBreak => {
                self.flush(false);
                self.blocks.push(Block {
                    kind: BlockKind::ThematicBreak,
                    start_line: line_no,
                    end_line: line_no,
                    raw: raw.to_string(),
                });
            }
            LineKind::Quote { text, .. } => self.push_quote(line_no, raw, text),
            LineKind::FootnoteDef { id, body } => {
                self.flush(false);
                self.leaf = Leaf::FootnoteDef { id, run: Run::new(line_no, raw), body: vec![body] };
            }
            LineKind::ReferenceDef { id, url, title } => {
                self.flush(false);
                self.blocks.push(Block {
                    kind: BlockKind::ReferenceDef { id, url, title },
                    start_line: line_no,
                    end_line: line_no,
                    raw: raw.to_string(),
                });
            }
            LineKind::ListMarker { depth, ordered, task, text } => {
                self.push_list_item(line_no, raw, depth, ordered, task, text)
            }
            LineKind::ListContinuation { text } => self.push_list_continuation(line_no, raw, text),
            LineKind::PipeRow => self.push_table_row(line_no, raw),
            LineKind::HtmlOpen { tag } => self.open_html(line_no, raw, tag),
            LineKind::Indented => self.push_indented(line_no, raw),
            LineKind::Text => self.push_text(line_no, raw),
        }
    }

    pub fn finish(mut self) -> Vec<Block> {
        self.flush(true);
        self.blocks
    }

    fn flush(&mut self, at_eof: bool) {
        match std::mem::replace(&mut self.leaf, Leaf::None) {
            Leaf::None => {}
            Leaf::Paragraph(run) => self.emit_paragraph(run),
            Leaf::Quote { run, text } => {
                self.blocks.push(Block {
                    kind: BlockKind::BlockQuote { text: text.join("\n") },
                    start_line: run.start,
                    end_line: run.end,
                    raw: run.raw_text(),
                });
            }
            Leaf::Fence { sig, run, content } => {
                // Only reachable at end of document: the fence never closed.
                self.blocks.push(Block {
                    kind: BlockKind::Code {
                        language: sig.language,
                        content: content.join("\n"),
                        fenced: true,
                        incomplete: true,
                    },
                    start_line: run.start,
                    end_line: run.end,
                    raw: run.raw_text(),
                });
            }
            Leaf::IndentedCode { run, content } => {
                self.blocks.push(Block {
                    kind: BlockKind::Code {
                        language: None,
                        content: content.join("\n"),
                        fenced: false,
                        incomplete: false,
                    },
                    start_line: run.start,
                    end_line: run.end,
                    raw: run.raw_text(),
                });
            }
            Leaf::List { run, ordered, items } => {
                self.blocks.push(Block {
                    kind: BlockKind::List { ordered, items },
                    start_line: run.start,
                    end_line: run.end,
                    raw: run.raw_text(),
                });
            }
            Leaf::Table { run, rows } => self.finish_table(run, rows),
            Leaf::Html { tag: _, run } => {
                self.blocks.push(Block {
                    kind: BlockKind::Html { incomplete: at_eof },
                    start_line: run.start,
                    end_line: run.end,
                    raw: run.raw_text(),
                });
            }
            Leaf::FootnoteDef { id, run, body } => {
                self.blocks.push(Block {
                    kind: BlockKind::FootnoteDef { id, body: body.join(" ") },
                    start_line: run.start,
                    end_line: run.end,
                    raw: run.raw_text(),
                });
            }
        }
    }

    fn emit_paragraph(&mut self, run: Run) {
        let text = run.raw.iter().map(|l| l.trim()).collect::<Vec<_>>().join("\n");
        self.blocks.push(Block {
            kind: BlockKind::Paragraph { text },
            start_line: run.start,
            end_line: run.end,
            raw: run.raw_text(),
        });
    }

    /// Handles `=`/`-` underlines: promote the last pending paragraph line
    /// to a Setext heading, or fall back to a thematic break / plain text.
    fn underline(&mut self, line_no: usize, raw: &str, level: u8, dash_len: Option<usize>) {
        match std::mem::replace(&mut self.leaf, Leaf::None) {
            Leaf::Paragraph(mut run) => {
                let text = run.raw.pop().unwrap_or_default();
                let heading_start = run.end;
                if !run.raw.is_empty() {
                    run.end = heading_start - 1;
                    self.emit_paragraph(run);
                }
                self.blocks.push(Block {
                    kind: BlockKind::Heading {
                        level,
                        text: text.trim().to_string(),
                        setext: true,
                    },
                    start_line: heading_start,
                    end_line: line_no,
                    raw: format!("{text}\n{raw}"),
                });
            }
            other => {
                self.leaf = other;
                match dash_len {
                    Some(len) if len >= ThematicBreak::MIN_LEN => {
                        self.flush(false);
                        self.blocks.push(Block {
                            kind: BlockKind::ThematicBreak,
                            start_line: line_no,
                            end_line: line_no,
                            raw: raw.to_string(),
                        });
                    }
                    _ => self.push_text(line_no, raw),
                }
            }
        }
    }

    fn push_text(&mut self, line_no: usize, raw: &str) {
        match &mut self.leaf {
            Leaf::Paragraph(run) => run.push(line_no, raw),
            Leaf::FootnoteDef { run, body, .. } if FootnoteDefLine::is_continuation(raw) => {
                run.push(line_no, raw);
                body.push(raw.trim().to_string());
            }
            _ => {
                self.flush(false);
                self.leaf = Leaf::Paragraph(Run::new(line_no, raw));
            }
        }
    }

    fn push_quote(&mut self, line_no: usize, raw: &str, text: String) {
        match &mut self.leaf {
            Leaf::Quote { run, text: lines } => {
                run.push(line_no, raw);
                lines.push(text);
            }
            _ => {
                self.flush(false);
                self.leaf = Leaf::Quote { run: Run::new(line_no, raw), text: vec![text] };
            }
        }
    }

    fn push_code_line(&mut self, line_no: usize, raw: &str) {
        match &mut self.leaf {
            Leaf::Fence { run, content, .. } => {
                run.push(line_no, raw);
                content.push(raw.to_string());
            }
            _ => self.push_text(line_no, raw),
        }
    }

    fn close_fence(&mut self, line_no: usize, raw: &str) {
        match std::mem::replace(&mut self.leaf, Leaf::None) {
            Leaf::Fence { sig, mut run, content } => {
                run.push(line_no, raw);
                self.blocks.push(Block {
                    kind: BlockKind::Code {
                        language: sig.language,
                        content: content.join("\n"),
                        fenced: true,
                        incomplete: false,
                    },
                    start_line: run.start,
                    end_line: run.end,
                    raw: run.raw_text(),
                });
            }
            other => {
                self.leaf = other;
                self.push_text(line_no, raw);
            }
        }
    }

    fn push_indented(&mut self, line_no: usize, raw: &str) {
        match &mut self.leaf {
            // Indented code cannot interrupt an open paragraph.
            Leaf::Paragraph(run) => run.push(line_no, raw),
            Leaf::FootnoteDef { run, body, .. } => {
                run.push(line_no, raw);
                body.push(raw.trim().to_string());
            }
            Leaf::IndentedCode { run, content } => {
                run.push(line_no, raw);
                content.push(strip_code_indent(raw));
            }
            _ => {
                self.flush(false);
                self.leaf = Leaf::IndentedCode {
                    run: Run::new(line_no, raw),
                    content: vec![strip_code_indent(raw)],
                };
            }
        }
    }

    fn push_list_item(
        &mut self,
        line_no: usize,
        raw: &str,
        depth: usize,
        ordered: bool,
        task: TaskState,
        text: String,
    ) {
        let item = ListItem { line: line_no, depth, ordered, task, text };
        match &mut self.leaf {
            // A change of ordering kind at the top level starts a new list;
            // nested items stay with the block that opened them.
            Leaf::List { run, ordered: block_ordered, items }
                if depth > 0 || ordered == *block_ordered =>
            {
                run.push(line_no, raw);
                items.push(item);
            }
            _ => {
                self.flush(false);
                self.leaf = Leaf::List { run: Run::new(line_no, raw), ordered, items: vec![item] };
            }
        }
    }

    fn push_list_continuation(&mut self, line_no: usize, raw: &str, text: String) {
        match &mut self.leaf {
            Leaf::List { run, items, .. } => {
                run.push(line_no, raw);
                if let Some(last) = items.last_mut() {
                    if !last.text.is_empty() {
                        last.text.push(' ');
                    }
                    last.text.push_str(&text);
                }
            }
            _ => self.push_text(line_no, raw),
        }
    }

    fn push_table_row(&mut self, line_no: usize, raw: &str) {
        match &mut self.leaf {
            Leaf::Table { run, rows } => {
                run.push(line_no, raw);
                rows.push(raw.to_string());
            }
            _ => {
                self.flush(false);
                self.leaf = Leaf::Table { run: Run::new(line_no, raw), rows: vec![raw.to_string()] };
            }
        }
    }

    /// A pipe-row run is only a table when its second row is an alignment
    /// row; anything else stays paragraph text.
    fn finish_table(&mut self, run: Run, rows: Vec<String>) {
        if rows.len() >= 2 && TableRow::is_alignment_row(&rows[1]) {
            let model = table::parse_table(&rows);
            self.blocks.push(Block {
                kind: BlockKind::Table(model),
                start_line: run.start,
                end_line: run.end,
                raw: run.raw_text(),
            });
        } else {
            self.emit_paragraph(run);
        }
    }

    fn open_html(&mut self, line_no: usize, raw: &str, tag: String) {
        self.flush(false);
        if HtmlBlock::self_contained(&tag, raw) {
            self.blocks.push(Block {
                kind: BlockKind::Html { incomplete: false },
                start_line: line_no,
                end_line: line_no,
                raw: raw.to_string(),
            });
        } else {
            self.leaf = Leaf::Html { tag, run: Run::new(line_no, raw) };
        }
    }

    fn push_html_line(&mut self, line_no: usize, raw: &str) {
        if raw.trim().is_empty() {
            self.flush(false);
            return;
        }
        let closed = match &mut self.leaf {
            Leaf::Html { tag, run } => {
                run.push(line_no, raw);
                HtmlBlock::closes(tag, raw)
            }
            _ => false,
        };
        if closed {
            self.flush(false);
        }
    }
}

fn strip_code_indent(raw: &str) -> String {
    raw.strip_prefix("    ")
        .or_else(|| raw.strip_prefix('\t'))
        .unwrap_or(raw)
        .to_string()
}
