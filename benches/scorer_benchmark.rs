//! Benchmarks for sentiment scoring performance

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use review_insight::{AnalysisPipeline, Review, SentimentScorer};

fn benchmark_scorer(c: &mut Criterion) {
    let scorer = SentimentScorer::new();

    let texts = [
        "Excellent quality, works great and I highly recommend it",
        "Terrible quality, broke after a week, waste of money",
        "It's just okay, nothing special but does the job",
        "Fast shipping, beautiful design, very satisfied with the purchase",
    ];

    c.bench_function("score_single_review", |b| {
        b.iter(|| {
            scorer.score_text(
                black_box("Excellent quality, works great and I highly recommend it"),
                black_box(Some(5.0)),
            )
        })
    });

    let mut group = c.benchmark_group("score_corpus");
    for size in [10, 100, 1000].iter() {
        let reviews: Vec<Review> = texts
            .iter()
            .cycle()
            .take(*size)
            .enumerate()
            .map(|(i, text)| Review::new(format!("r{i}"), *text, Some((i % 5 + 1) as f64)))
            .collect();

        let pipeline = AnalysisPipeline::new();
        group.bench_with_input(BenchmarkId::from_parameter(size), &reviews, |b, reviews| {
            b.iter(|| pipeline.run(black_box(reviews)))
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_scorer);
criterion_main!(benches);
