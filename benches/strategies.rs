use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::fs;
use std::hint::black_box;
use std::path::PathBuf;
use tempfile::TempDir;
use wordfreq::process::{FileProcessor, Method};
use wordfreq::text::{compute, compute_chunked};

const WORDS: [&str; 8] = [
    "alpha", "bravo", "charlie", "delta", "echo", "foxtrot", "golf", "hotel",
];

/// Build a temporary corpus of `files` files with `words_per_file` words each
fn build_corpus(files: usize, words_per_file: usize) -> (TempDir, Vec<PathBuf>) {
    let temp_dir = TempDir::new().expect("create temp dir");
    for i in 0..files {
        let text: Vec<&str> = (0..words_per_file)
            .map(|j| WORDS[(i * 31 + j * 7) % WORDS.len()])
            .collect();
        fs::write(
            temp_dir.path().join(format!("doc_{i:03}.txt")),
            text.join(" "),
        )
        .expect("write corpus file");
    }

    let files = FileProcessor::default()
        .discover(temp_dir.path())
        .expect("discover corpus");
    (temp_dir, files)
}

/// Benchmark each processing method over the same corpus
fn bench_methods(c: &mut Criterion) {
    let (_corpus, files) = build_corpus(32, 2_000);
    let processor = FileProcessor::default();

    let mut group = c.benchmark_group("processing_methods");
    group.sample_size(20);

    for method in Method::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(method), &files, |b, files| {
            b.iter(|| {
                let batch = processor.process(method, black_box(files)).expect("process");
                black_box(batch.word_count())
            })
        });
    }
    group.finish();
}

/// Benchmark direct against chunked statistics
fn bench_statistics(c: &mut Criterion) {
    let words: Vec<String> = (0..200_000)
        .map(|i| WORDS[(i * 13) % WORDS.len()].to_string())
        .collect();

    let mut group = c.benchmark_group("statistics");
    group.bench_function("direct", |b| b.iter(|| compute(black_box(&words), 10)));
    for chunks in [2, 4, 8] {
        group.bench_with_input(BenchmarkId::new("chunked", chunks), &chunks, |b, &chunks| {
            b.iter(|| compute_chunked(black_box(&words), 10, chunks))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_methods, bench_statistics);
criterion_main!(benches);
