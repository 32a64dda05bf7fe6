use gfa_records::gfa::*;
use gfa_records::parser::GFAParser;
use gfa_records::writer::gfa_string;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

/// A linear chain of `n` segments with a link between each pair of
/// neighbours, as GFA text.
fn chain_lines(n: usize) -> Vec<String> {
    let mut lines = vec!["H\tVN:Z:1.0".to_string()];
    for i in 0..n {
        lines.push(format!("S\t{}\tACGTACGTTGCA\tRC:i:{}", i, i + 1));
    }
    for i in 1..n {
        lines.push(format!("L\t{}\t+\t{}\t-\t4M", i - 1, i));
    }
    lines
}

fn build_graph(lines: &[String]) -> GFA {
    GFAParser::new().parse_lines(lines).unwrap()
}

fn bench_build(c: &mut Criterion) {
    for &n in &[1_000, 10_000] {
        let lines = chain_lines(n);
        c.bench_with_input(BenchmarkId::new("build", n), &lines, |b, l| {
            b.iter(|| build_graph(l));
        });
    }
}

fn bench_format(c: &mut Criterion) {
    for &n in &[1_000, 10_000] {
        let gfa = build_graph(&chain_lines(n));
        c.bench_with_input(BenchmarkId::new("format", n), &gfa, |b, g| {
            b.iter(|| gfa_string(g));
        });
    }
}

criterion_group!(
    name = graph_benches;
    config = Criterion::default().sample_size(25);
    targets = bench_build, bench_format
);

criterion_main!(graph_benches);
