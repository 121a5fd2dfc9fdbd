use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use protean_bio::{embed, Analyzer, Sequence};

fn create_protein_sequence(length: usize) -> String {
    let amino_acids = b"ACDEFGHIKLMNPQRSTVWY";
    (0..length)
        .map(|i| amino_acids[i % 20] as char)
        .collect()
}

fn bench_full_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_analysis");
    let analyzer = Analyzer::builtin();

    for length in &[50, 100, 500, 1000] {
        let raw = create_protein_sequence(*length);
        let seq = Sequence::parse(&raw).unwrap();

        group.throughput(Throughput::Elements(*length as u64));
        group.bench_with_input(BenchmarkId::new("analyze_full", length), &seq, |b, seq| {
            b.iter(|| analyzer.analyze_full(black_box(seq)).unwrap());
        });
    }

    group.finish();
}

fn bench_embedding(c: &mut Criterion) {
    let mut group = c.benchmark_group("embedding");

    for length in &[100, 1000] {
        let raw = create_protein_sequence(*length);
        let seq = Sequence::parse(&raw).unwrap();

        group.throughput(Throughput::Elements(*length as u64));
        group.bench_with_input(BenchmarkId::new("embed", length), &seq, |b, seq| {
            b.iter(|| embed(black_box(seq)).unwrap());
        });
    }

    group.finish();
}

fn bench_comparison(c: &mut Criterion) {
    let analyzer = Analyzer::builtin();
    let original = Sequence::parse(&create_protein_sequence(500)).unwrap();
    // Shifted start simulates an N-terminal deletion
    let mutated = Sequence::parse(&create_protein_sequence(495)).unwrap();

    c.bench_function("compare_500", |b| {
        b.iter(|| {
            analyzer
                .compare(black_box(&original), black_box(&mutated))
                .unwrap()
        });
    });
}

criterion_group!(benches, bench_full_analysis, bench_embedding, bench_comparison);
criterion_main!(benches);
