use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use payoffcurve::analysis::find_key_points;
use payoffcurve::core::{OptionLeg, PriceSweep};
use payoffcurve::pricing::payoff::evaluate;
use std::hint::black_box;

// Performance goals (guideline, measured on target hardware):
// - 4-leg evaluation, 600-point grid: < 10 us
// - key-point classification, 60k-point curve: < 1 ms

fn benchmark_legs() -> Vec<OptionLeg> {
    vec![
        OptionLeg::call(720.0, 1),
        OptionLeg::call(740.0, 1),
        OptionLeg::put(860.0, -1),
        OptionLeg::put(820.0, -1),
    ]
}

fn bench_evaluate_grid_sizes(c: &mut Criterion) {
    let legs = benchmark_legs();
    let mut group = c.benchmark_group("evaluate_four_leg");
    for step in [1.0, 0.1, 0.01] {
        let sweep = PriceSweep::new(500.0, 1100.0, step);
        group.bench_with_input(
            BenchmarkId::from_parameter(sweep.point_count()),
            &sweep,
            |b, sweep| b.iter(|| black_box(evaluate(black_box(&legs), sweep).unwrap())),
        );
    }
    group.finish();
}

fn bench_find_key_points(c: &mut Criterion) {
    let legs = benchmark_legs();
    let curve = evaluate(&legs, &PriceSweep::new(500.0, 1100.0, 0.01)).unwrap();

    c.bench_function("find_key_points_60k", |b| {
        b.iter(|| black_box(find_key_points(black_box(&curve), 12_500.0)))
    });
}

criterion_group!(benches, bench_evaluate_grid_sizes, bench_find_key_points);
criterion_main!(benches);
