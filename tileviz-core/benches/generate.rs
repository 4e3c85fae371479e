use criterion::{criterion_group, criterion_main, Criterion};
use tileviz_core::{generate, generate_batch, RenderRequest, Shape, Tiling};

fn bench_generate_257x130(c: &mut Criterion) {
    let shape = Shape::from([257, 130]);
    let tiling = Tiling::from([8, 128]);
    c.bench_function("generate_257x130_t8x128", |bencher| {
        bencher.iter(|| generate(&shape, &tiling).unwrap());
    });
}

fn bench_generate_batch(c: &mut Criterion) {
    let requests: Vec<RenderRequest> = (1..=32)
        .map(|n| RenderRequest::new([n * 7, n * 5], [8, 4]))
        .collect();
    c.bench_function("generate_batch_32", |bencher| {
        bencher.iter(|| generate_batch(&requests));
    });
}

criterion_group!(benches, bench_generate_257x130, bench_generate_batch);
criterion_main!(benches);
