use criterion::{criterion_group, criterion_main};

use sf_wkb::geometry::{Geometry, LineString, Point};
use sf_wkb::Dimension;

fn long_line(n: usize) -> Geometry {
    let mut line = LineString::new(Dimension::Xyz);
    for i in 0..n {
        let t = i as f64 * 0.001;
        line.add_point(Point::xyz(t.sin() * 180.0, t.cos() * 85.0, t * 10.0))
            .unwrap();
    }
    Geometry::LineString(line)
}

fn bench_envelope(c: &mut criterion::Criterion) {
    let small = long_line(64);
    let big = long_line(100_000);

    c.bench_function("envelope small", |bencher| {
        bencher.iter(|| {
            let _ = small.envelope().unwrap();
        });
    });

    c.bench_function("envelope big", |bencher| {
        bencher.iter(|| {
            let _ = big.envelope().unwrap();
        });
    });
}

criterion_group!(benches, bench_envelope);
criterion_main!(benches);
