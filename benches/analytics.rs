//! Benchmarks for chatlens parsing and aggregation operations.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench analytics -- topline`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chatlens::analytics::{
    activity_heatmap, emoji_helper, fetch_stats, monthly_timeline, most_busy_users,
    most_common_words,
};
use chatlens::calendar::normalize;
use chatlens::{AnalyzerConfig, ChatParser, Record, UserFilter};

// =============================================================================
// Test Data Generators
// =============================================================================

fn generate_export(count: usize) -> String {
    let senders = ["Alice", "Bob", "Carol"];
    let mut lines = Vec::with_capacity(count);
    for i in 0..count {
        let sender = senders[i % senders.len()];
        let day = 1 + (i / 96) % 28;
        let month = 1 + (i / 2688) % 12;
        let hour = (i / 4) % 24;
        let minute = (i * 13) % 60;
        let text = match i % 10 {
            0 => "<Media omitted>".to_string(),
            3 => format!("check https://example.com/{} when you can", i),
            7 => format!("sounds good 👍 see you at {}", hour),
            _ => format!("message number {} with a few ordinary words", i),
        };
        lines.push(format!(
            "{:02}/{:02}/23, {}:{:02} - {}: {}",
            day, month, hour, minute, sender, text
        ));
    }
    lines.join("\n")
}

fn generate_records(count: usize) -> Vec<Record> {
    let export = generate_export(count);
    normalize(ChatParser::new().parse_str(&export))
}

// =============================================================================
// Parsing Benchmarks
// =============================================================================

fn bench_parse_export(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_export");
    let parser = ChatParser::new();

    for size in [100_usize, 1_000, 10_000, 50_000] {
        let export = generate_export(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &export, |b, export| {
            b.iter(|| {
                let records = parser.parse_str(black_box(export));
                black_box(records)
            });
        });
    }
    group.finish();
}

fn bench_normalize_records(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize_records");
    let parser = ChatParser::new();

    for size in [100_usize, 1_000, 10_000, 50_000] {
        let raw = parser.parse_str(&generate_export(size));
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &raw, |b, raw| {
            b.iter(|| {
                let records = normalize(black_box(raw.clone()));
                black_box(records)
            });
        });
    }
    group.finish();
}

// =============================================================================
// Aggregation Benchmarks
// =============================================================================

fn bench_topline_stats(c: &mut Criterion) {
    let mut group = c.benchmark_group("topline_stats");
    let config = AnalyzerConfig::new();

    for size in [100_usize, 1_000, 10_000] {
        let records = generate_records(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &records,
            |b, records| {
                b.iter(|| {
                    let stats = fetch_stats(&UserFilter::Overall, black_box(records), &config);
                    black_box(stats)
                });
            },
        );
    }
    group.finish();
}

fn bench_monthly_timeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("monthly_timeline");

    for size in [100_usize, 1_000, 10_000] {
        let records = generate_records(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &records,
            |b, records| {
                b.iter(|| {
                    let timeline = monthly_timeline(&UserFilter::Overall, black_box(records));
                    black_box(timeline)
                });
            },
        );
    }
    group.finish();
}

fn bench_activity_heatmap(c: &mut Criterion) {
    let mut group = c.benchmark_group("activity_heatmap");

    for size in [100_usize, 1_000, 10_000] {
        let records = generate_records(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &records,
            |b, records| {
                b.iter(|| {
                    let heatmap = activity_heatmap(&UserFilter::Overall, black_box(records));
                    black_box(heatmap)
                });
            },
        );
    }
    group.finish();
}

fn bench_word_ranking(c: &mut Criterion) {
    let mut group = c.benchmark_group("word_ranking");
    let config = AnalyzerConfig::new().with_stopwords(["a", "the", "with", "at"]);

    for size in [100_usize, 1_000, 10_000] {
        let records = generate_records(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &records,
            |b, records| {
                b.iter(|| {
                    let words =
                        most_common_words(&UserFilter::Overall, black_box(records), &config, 20);
                    black_box(words)
                });
            },
        );
    }
    group.finish();
}

fn bench_emoji_ranking(c: &mut Criterion) {
    let mut group = c.benchmark_group("emoji_ranking");

    for size in [100_usize, 1_000, 10_000] {
        let records = generate_records(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &records,
            |b, records| {
                b.iter(|| {
                    let emojis = emoji_helper(&UserFilter::Overall, black_box(records));
                    black_box(emojis)
                });
            },
        );
    }
    group.finish();
}

fn bench_user_ranking(c: &mut Criterion) {
    let mut group = c.benchmark_group("user_ranking");

    for size in [100_usize, 1_000, 10_000, 100_000] {
        let records = generate_records(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &records,
            |b, records| {
                b.iter(|| {
                    let ranking = most_busy_users(black_box(records));
                    black_box(ranking)
                });
            },
        );
    }
    group.finish();
}

// =============================================================================
// End-to-End Pipeline Benchmark
// =============================================================================

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pipeline");
    let parser = ChatParser::new();
    let config = AnalyzerConfig::new();

    for size in [1_000_usize, 10_000, 50_000] {
        let export = generate_export(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &export, |b, export| {
            b.iter(|| {
                // Full pipeline: parse -> normalize -> aggregate
                let records = normalize(parser.parse_str(black_box(export)));
                let stats = fetch_stats(&UserFilter::Overall, &records, &config);
                let words = most_common_words(&UserFilter::Overall, &records, &config, 20);
                let ranking = most_busy_users(&records);
                black_box((stats, words, ranking))
            });
        });
    }
    group.finish();
}

// =============================================================================
// Criterion Configuration
// =============================================================================

criterion_group!(
    benches,
    bench_parse_export,
    bench_normalize_records,
    bench_topline_stats,
    bench_monthly_timeline,
    bench_activity_heatmap,
    bench_word_ranking,
    bench_emoji_ranking,
    bench_user_ranking,
    bench_full_pipeline,
);

criterion_main!(benches);
