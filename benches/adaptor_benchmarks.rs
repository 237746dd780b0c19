//! Criterion benchmarks for orm_logger_adaptor

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use orm_logger_adaptor::prelude::*;
use serde_json::json;
use std::sync::Arc;

fn silent_base(options: &LoggerOptions) -> LoggerAdaptorBase {
    let sink: LoggerMethod = Arc::new(|message, _payload| {
        black_box(message.len());
    });
    LoggerAdaptorBase::new(
        SinkMethods::Basic(BasicLoggerMethods {
            log: Arc::clone(&sink),
            info: Arc::clone(&sink),
            warn: Arc::clone(&sink),
            error: sink,
        }),
        Box::new(TextFormatter::new()),
        options,
    )
}

fn bench_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting");
    group.throughput(Throughput::Elements(1));

    let formatter = TextFormatter::new();
    let parameters = vec![json!(1), json!("memo"), json!(null)];

    group.bench_function("query_plain", |b| {
        b.iter(|| formatter.format_query(black_box("select * from memo where id = ?"), None));
    });

    group.bench_function("query_with_parameters", |b| {
        b.iter(|| {
            formatter.format_query(
                black_box("select * from memo where id = ?"),
                Some(black_box(&parameters)),
            )
        });
    });

    group.bench_function("query_slow", |b| {
        b.iter(|| formatter.format_query_slow(black_box(2000), black_box("select sleep(2)"), None));
    });

    group.finish();
}

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    group.throughput(Throughput::Elements(1));

    let enabled = silent_base(&LoggerOptions::All);
    group.bench_function("query_enabled", |b| {
        b.iter(|| enabled.log_query(black_box("select 1"), None));
    });

    let disabled = silent_base(&LoggerOptions::Disabled);
    group.bench_function("query_disabled", |b| {
        b.iter(|| disabled.log_query(black_box("select 1"), None));
    });

    let failure = QueryFailure::from("boom");
    group.bench_function("query_error_enabled", |b| {
        b.iter(|| enabled.log_query_error(black_box(&failure), black_box("select 1"), None));
    });

    group.finish();
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");
    group.throughput(Throughput::Elements(1));

    group.bench_function("log_adaptor", |b| {
        b.iter(|| {
            let adaptor = LogAdaptor::new(black_box(&LoggerOptions::All));
            black_box(adaptor)
        });
    });

    group.bench_function("tracing_adaptor", |b| {
        b.iter(|| {
            let adaptor = TracingAdaptor::new(black_box(&LoggerOptions::All));
            black_box(adaptor)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_formatting, bench_dispatch, bench_construction);
criterion_main!(benches);
