use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rdex::eval;

const BENCH_FLAT: &str = "2 * 6 - 4 - 3 / 2 + 3 * 4 * 7 - 32 * 2 + 43 * 5";
const BENCH_NESTED: &str = "sin(90 - 1 / (cos(30 * 5))) + 5 ^ (2 / (0.5 * 4)) + sqrt 2";

fn eval_flat(c: &mut Criterion) {
    c.bench_function("eval_flat", |b| {
        b.iter(|| eval::<f64>(black_box(BENCH_FLAT)).unwrap())
    });
}

fn eval_nested(c: &mut Criterion) {
    c.bench_function("eval_nested", |b| {
        b.iter(|| eval::<f64>(black_box(BENCH_NESTED)).unwrap())
    });
}

criterion_group!(benches, eval_flat, eval_nested);
criterion_main!(benches);
