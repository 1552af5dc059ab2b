use criterion::{criterion_group, criterion_main};

use sf_wkb::geometry::{Geometry, LineString, MultiPolygon, Point, Polygon};
use sf_wkb::reader::{read_geometry, ReadOptions};
use sf_wkb::writer::{to_wkb, WriteOptions};
use sf_wkb::{Dimension, Endianness};

/// A multipolygon of `n` square polygons, each with a 65-point exterior ring
fn square_grid(n: usize) -> Geometry {
    let mut multi = MultiPolygon::new(Dimension::Xy);
    for i in 0..n {
        let cx = (i % 100) as f64;
        let cy = (i / 100) as f64;
        let mut ring = LineString::new(Dimension::Xy);
        for k in 0..=64 {
            let angle = (k % 64) as f64 * std::f64::consts::TAU / 64.0;
            ring.add_point(Point::new(cx + angle.cos() * 0.4, cy + angle.sin() * 0.4))
                .unwrap();
        }
        let mut polygon = Polygon::new(Dimension::Xy);
        polygon.add_ring(ring).unwrap();
        multi.add_polygon(polygon).unwrap();
    }
    Geometry::MultiPolygon(multi)
}

fn bench_codec(c: &mut criterion::Criterion) {
    let small = square_grid(4);
    let big = square_grid(1000);
    let small_wkb = to_wkb(&small, &WriteOptions::default()).unwrap();
    let big_wkb = to_wkb(&big, &WriteOptions::default()).unwrap();

    c.bench_function("parse small", |bencher| {
        bencher.iter(|| {
            let _ = read_geometry(&small_wkb, &ReadOptions::default()).unwrap();
        });
    });

    c.bench_function("parse big", |bencher| {
        bencher.iter(|| {
            let _ = read_geometry(&big_wkb, &ReadOptions::default()).unwrap();
        });
    });

    c.bench_function("encode small", |bencher| {
        bencher.iter(|| {
            let _ = to_wkb(&small, &WriteOptions::default()).unwrap();
        });
    });

    c.bench_function("encode big", |bencher| {
        bencher.iter(|| {
            let _ = to_wkb(&big, &WriteOptions::default()).unwrap();
        });
    });

    c.bench_function("encode big big-endian", |bencher| {
        bencher.iter(|| {
            let _ = to_wkb(
                &big,
                &WriteOptions {
                    endianness: Endianness::BigEndian,
                },
            )
            .unwrap();
        });
    });
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);
