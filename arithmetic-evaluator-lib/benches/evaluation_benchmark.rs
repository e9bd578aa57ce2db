use arithmetic_evaluator::interpreter::evaluate;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use itertools::Itertools;

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    let expressions = [
        "2^3^2".to_string(),
        "12 + 3 * (4 - 1)".to_string(),
        "((((1 + 2) * 3) - 4) / 5)^2".to_string(),
        "(9^2+17)^(3*2)+(1+2+3^4)-(8*7^2)".to_string(),
        (1..=100).join(" + "),
    ];
    for expression in expressions {
        group.throughput(Throughput::Elements(expression.len() as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(&expression),
            &expression,
            |bencher, expression| {
                bencher.iter(|| evaluate(expression));
            },
        );
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
