use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use plainly::{Humanizer, clean_only, humanize, normalize, substitute_vocabulary};
use std::hint::black_box;
use std::time::Duration;

// ═══════════════════════════════════════════════════════════════════════════
// TEXT GENERATION
// ═══════════════════════════════════════════════════════════════════════════

/// Already clean prose: the normalizer should take its zero-copy paths.
const CLEAN_BASE: &str = "The team shipped the release on time. Everyone was happy with it. ";

/// Verbose, messy prose that triggers most of the rewrite passes.
const MESSY_BASE: &str = "It should be noted that the system was utilized by the team in order \
to achieve the objective; therefore we do not expect a large number of issues, and the \
implementation of the organization\u{2019}s plan is   sooooo good!!! <b>Really</b> \u{2014} \
it is.\n";

fn generate_text(base: &str, target_len: usize) -> String {
    let mut out = String::with_capacity(target_len + base.len());
    while out.len() < target_len {
        out.push_str(base);
    }
    out
}

// ═══════════════════════════════════════════════════════════════════════════
// BENCHMARKS
// ═══════════════════════════════════════════════════════════════════════════

fn bench_pipeline(c: &mut Criterion) {
    let sizes = [("short", 256), ("medium", 4 * 1024), ("long", 64 * 1024)];
    let mut group = c.benchmark_group("pipeline");

    for (label, base) in [("clean", CLEAN_BASE), ("messy", MESSY_BASE)] {
        for (size_name, size) in sizes {
            let text = generate_text(base, size);
            group.throughput(Throughput::Bytes(text.len() as u64));
            let id = format!("{label}/{size_name}");

            group.bench_with_input(BenchmarkId::new("normalize", &id), &text, |b, t| {
                b.iter(|| black_box(normalize(black_box(t))))
            });
            group.bench_with_input(BenchmarkId::new("clean_only", &id), &text, |b, t| {
                b.iter(|| black_box(clean_only(black_box(t))))
            });
            group.bench_with_input(BenchmarkId::new("humanize", &id), &text, |b, t| {
                b.iter(|| black_box(humanize(black_box(t))))
            });
        }
    }
    group.finish();
}

fn bench_substitution(c: &mut Criterion) {
    let mut group = c.benchmark_group("substitute_vocabulary");
    let text = generate_text(MESSY_BASE, 16 * 1024);
    group.throughput(Throughput::Bytes(text.len() as u64));

    group.bench_function("free_fn", |b| {
        b.iter(|| black_box(substitute_vocabulary(black_box(&text))))
    });

    let fused = Humanizer::builder()
        .substitute_on_clean(true)
        .build()
        .expect("default limits are valid");
    group.bench_function("fused_clean", |b| {
        b.iter(|| black_box(fused.clean_only(black_box(&text))))
    });
    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(3))
        .warm_up_time(Duration::from_secs(1));
    targets = bench_pipeline, bench_substitution
);

criterion_main!(benches);
