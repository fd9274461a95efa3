use criterion::{Criterion, black_box, criterion_group, criterion_main};
use markdown_strata_engine::{Document, parse_document};

fn synthetic_document(sections: usize) -> String {
    let mut md = String::new();
    for i in 0..sections {
        md.push_str(&format!(
            "## Section {i}\n\nSome paragraph with a [link](https://example.com/{i}) and \
             **emphasis**.\n\n- [ ] task one\n- [x] task two\n  - nested item\n\n```rust\nlet x = \
             {i};\n```\n\n| a | b |\n| - | - |\n| {i} | {i} |\n\n"
        ));
    }
    md
}

fn parsing_benchmark(c: &mut Criterion) {
    let md = synthetic_document(200);
    let doc = Document::from_text(&md);

    c.bench_function("parse_document", |b| b.iter(|| black_box(parse_document(&doc))));

    c.bench_function("document_from_text", |b| {
        b.iter(|| black_box(Document::from_text(&md)))
    });
}

criterion_group!(benches, parsing_benchmark);
criterion_main!(benches);
