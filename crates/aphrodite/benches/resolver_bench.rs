use aphrodite::{classify, resolve};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_resolve(c: &mut Criterion) {
    let inputs = [
        "Los Angeles",
        "Los Angeles, CA, USA",
        "nyc",
        "Mexico DF",
        "Atlantis",
    ];

    c.bench_function("gazetteer_resolve", |b| {
        b.iter(|| {
            for input in &inputs {
                black_box(resolve(black_box(input)));
            }
        })
    });
}

fn bench_classify(c: &mut Criterion) {
    c.bench_function("classify_full_year", |b| {
        b.iter(|| {
            for month in 1..=12 {
                for day in 1..=31 {
                    black_box(classify(black_box(month), black_box(day)));
                }
            }
        })
    });
}

criterion_group!(benches, bench_resolve, bench_classify);
criterion_main!(benches);
