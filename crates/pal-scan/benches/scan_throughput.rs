use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pal_core::rng::RngHandle;
use pal_scan::workload::{random_text, repeated_text};
use pal_scan::{longest_palindrome_naive, longest_palindrome_span};

fn scan_bench(c: &mut Criterion) {
    let alphabet: Vec<char> = "acgt".chars().collect();
    let mut rng = RngHandle::from_seed(7);
    let mut group = c.benchmark_group("longest_palindrome");
    for len in [1_000usize, 10_000] {
        let random: Vec<char> = random_text(len, &alphabet, &mut rng)
            .unwrap()
            .chars()
            .collect();
        let uniform: Vec<char> = repeated_text('a', len).chars().collect();

        group.bench_with_input(BenchmarkId::new("linear/random", len), &random, |b, input| {
            b.iter(|| black_box(longest_palindrome_span(input)))
        });
        group.bench_with_input(BenchmarkId::new("linear/uniform", len), &uniform, |b, input| {
            b.iter(|| black_box(longest_palindrome_span(input)))
        });
        group.bench_with_input(BenchmarkId::new("naive/random", len), &random, |b, input| {
            b.iter(|| black_box(longest_palindrome_naive(input)))
        });
        group.bench_with_input(BenchmarkId::new("naive/uniform", len), &uniform, |b, input| {
            b.iter(|| black_box(longest_palindrome_naive(input)))
        });
    }
    group.finish();
}

criterion_group!(benches, scan_bench);
criterion_main!(benches);
