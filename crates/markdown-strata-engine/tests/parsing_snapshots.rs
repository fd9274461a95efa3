use markdown_strata_engine::Document;
use markdown_strata_engine::parsing::{parse_document, snapshot};

#[test]
fn fixture_basic() {
    assert_fixture("basic");
}

#[test]
fn fixture_constructs() {
    assert_fixture("constructs");
}

fn assert_fixture(name: &str) {
    let md = std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap();
    let doc = Document::from_text(&md);

    let parsed = parse_document(&doc);
    snapshot::invariants(&doc, &parsed);

    let rendered = snapshot::normalize(&parsed);
    insta::assert_snapshot!(name, rendered);
}

/// Every non-blank source line belongs to exactly one block, and block raw
/// text reproduces its source range (checked inside `invariants`).
#[test]
fn blocks_tile_the_document() {
    let md = "\
# Guide

Intro paragraph
spanning two lines.

- item one
  - nested child
- [x] done

| a | b |
| - | - |
| 1 | 2 |

> a quote
> continues

```text
inside the fence

still inside
```

***

[^1]: a note
  with continuation
";
    let doc = Document::from_text(md);
    let parsed = parse_document(&doc);
    snapshot::invariants(&doc, &parsed);

    let mut covered = vec![false; doc.line_count() + 1];
    for b in parsed.blocks() {
        for n in b.start_line..=b.end_line {
            assert!(!covered[n], "line {n} claimed by two blocks");
            covered[n] = true;
        }
    }
    for (n, line) in doc.numbered_lines() {
        if !line.trim().is_empty() {
            assert!(covered[n], "line {n} not covered by any block: {line:?}");
        }
    }
}
