use criterion::{Criterion, criterion_group, criterion_main};
use lingolog::fmt::{FormatTemplate, FormatValues, highlight_values};
use lingolog::{CallerContext, ColorFormatter, Format, Level, PlainFormatter, Record};
use std::hint::black_box;
use std::sync::Arc;

const MESSAGE: &str = "User [alice] logged in with token 'abc123' from \"eu-west\"";

fn bench_template_render(c: &mut Criterion) {
    let template = FormatTemplate::parse("{timestamp} [{level}] {msg}");
    let values = FormatValues::new()
        .timestamp("2025-01-15 14:30:00,123")
        .level("INFO")
        .msg("Application started successfully");

    c.bench_function("FormatTemplate::render", |b| {
        b.iter(|| template.render(black_box(&values)));
    });
}

fn bench_highlight(c: &mut Criterion) {
    let mut group = c.benchmark_group("highlight_values");

    group.bench_function("three_values", |b| {
        b.iter(|| highlight_values(black_box(MESSAGE), "\x1b[35m", "\x1b[39m"));
    });
    group.bench_function("no_values", |b| {
        b.iter(|| highlight_values(black_box("Nothing to see here"), "\x1b[35m", "\x1b[39m"));
    });

    group.finish();
}

fn bench_formatters(c: &mut Criterion) {
    let mut group = c.benchmark_group("Format::format");
    let record = Record::new(Level::Info, "bench", MESSAGE);

    let color = ColorFormatter::new();
    group.bench_function("color", |b| b.iter(|| color.format(black_box(&record))));

    let plain_console = ColorFormatter::new().colors(false);
    group.bench_function("color_disabled", |b| {
        b.iter(|| plain_console.format(black_box(&record)));
    });

    let translated = ColorFormatter::new().translator(Arc::new(
        |msg: &str, _ctx: &CallerContext| -> String { msg.to_lowercase() },
    ));
    group.bench_function("color_translated_label", |b| {
        b.iter(|| translated.format(black_box(&record)));
    });

    let file = PlainFormatter::new();
    group.bench_function("plain", |b| b.iter(|| file.format(black_box(&record))));

    group.finish();
}

criterion_group!(
    benches,
    bench_template_render,
    bench_highlight,
    bench_formatters
);
criterion_main!(benches);
