//! Criterion benchmarks for visiondesk_logger

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use visiondesk_logger::prelude::*;
use visiondesk_logger::{FormatterConfig, SinkKind};

// ============================================================================
// Formatting Benchmarks
// ============================================================================

fn bench_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting");
    group.throughput(Throughput::Elements(1));

    let plain = LogEvent::new("bench", LogLevel::Info, "Region captured in 12ms");
    let marked = LogEvent::marked("bench", LogLevel::Info, Marker::Screenshot, "Region captured");
    let decorated = FormatterConfig::default();

    group.bench_function("file_line", |b| {
        b.iter(|| black_box(FormatterConfig::PLAIN.format(black_box(&plain), SinkKind::File)));
    });

    group.bench_function("console_decorated", |b| {
        b.iter(|| black_box(decorated.format(black_box(&marked), SinkKind::Console)));
    });

    group.finish();
}

// ============================================================================
// Logging Performance Benchmarks
// ============================================================================

fn bench_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("logging");
    group.throughput(Throughput::Elements(1));

    let dir = tempfile::tempdir().expect("temp dir");
    let buffer = MemoryBuffer::new();
    let system = LoggingSystem::new();
    system.configure(
        LoggingOptions::new()
            .with_default_level("WARNING")
            .with_log_dir(dir.path())
            .with_console_target(ConsoleTarget::Memory(buffer.clone())),
    );
    let logger = system.get_logger("bench");

    group.bench_function("info_file_only", |b| {
        b.iter(|| logger.info(black_box("Info message")));
    });

    group.bench_function("warning_both_sinks", |b| {
        b.iter(|| {
            logger.warning(black_box("Warning message"));
            buffer.clear();
        });
    });

    group.bench_function("semantic_helper", |b| {
        b.iter(|| log_network(&logger, black_box("GET /v1/models")));
    });

    group.finish();
}

fn bench_registry(c: &mut Criterion) {
    let system = LoggingSystem::new();
    system.get_logger("ui.main_window");

    c.bench_function("registry_lookup_hit", |b| {
        b.iter(|| black_box(system.get_logger(black_box("ui.main_window"))));
    });
}

criterion_group!(benches, bench_formatting, bench_logging, bench_registry);
criterion_main!(benches);
