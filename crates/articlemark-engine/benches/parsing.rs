use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use articlemark_engine::{generate_toc, parse, parsing::inline::parse_inline, render_html};
mod common;

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    for sections in [10, 100, 1000] {
        let content = common::generate_article(sections);
        group.bench_with_input(BenchmarkId::new("parse", sections), &content, |b, text| {
            b.iter(|| std::hint::black_box(parse(std::hint::black_box(text))));
        });
        group.bench_with_input(BenchmarkId::new("toc", sections), &content, |b, text| {
            b.iter(|| std::hint::black_box(generate_toc(std::hint::black_box(text))));
        });
    }

    group.finish();
}

fn bench_inline_recovery(c: &mut Criterion) {
    let line = common::generate_unclosed_inline(200);
    c.bench_function("inline_unclosed_delimiters", |b| {
        b.iter(|| std::hint::black_box(parse_inline(std::hint::black_box(&line))));
    });
}

fn bench_render(c: &mut Criterion) {
    let doc = parse(&common::generate_article(100));
    c.bench_function("render_html", |b| {
        b.iter(|| std::hint::black_box(render_html(std::hint::black_box(&doc))));
    });
}

criterion_group!(benches, bench_parse, bench_inline_recovery, bench_render);
criterion_main!(benches);
