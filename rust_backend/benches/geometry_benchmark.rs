use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::{json, Value};
use std::hint::black_box;

use lts_year1::core::domain::{CircleArea, EllipseArea, SkyPoint};
use lts_year1::geometry::convert_areas;
use lts_year1::geometry::ellipse::ellipse_ring;
use lts_year1::geometry::hull::convex_hull;
use lts_year1::geometry::tissot::tissot_ring;
use lts_year1::io::export::format_document;
use lts_year1::io::DocumentLoader;

fn scattered_points(count: usize) -> Vec<SkyPoint> {
    (0..count)
        .map(|i| {
            let t = i as f64 * 0.618_033_988_75;
            SkyPoint::new((t * 97.0) % 360.0, ((t * 53.0) % 120.0) - 90.0)
        })
        .collect()
}

fn bench_convex_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("convex_hull");

    for count in [4usize, 21, 1000] {
        let points = scattered_points(count);
        group.bench_with_input(BenchmarkId::new("points", count), &points, |b, input| {
            b.iter(|| convex_hull(black_box(input)));
        });
    }

    group.finish();
}

fn bench_shapes(c: &mut Criterion) {
    let mut group = c.benchmark_group("shapes");

    let circle = CircleArea {
        name: "Fornax".to_string(),
        ra_center: 54.62,
        dec_center: -35.45,
        radius: 5.0,
        t_frac: 0.5,
    };
    group.bench_function("tissot_ring", |b| {
        b.iter(|| tissot_ring(black_box(&circle)));
    });

    let ellipse = EllipseArea {
        name: "Sgr".to_string(),
        ra_center: 283.8313,
        dec_center: -30.5453,
        a: 13.0,
        b: 4.5,
        theta: -11.5,
        t_frac: 0.2,
    };
    group.bench_function("ellipse_ring", |b| {
        b.iter(|| ellipse_ring(black_box(&ellipse)));
    });

    group.finish();
}

fn bench_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("document");

    let areas: Vec<Value> = (0..300)
        .map(|i| {
            let ra = (i as f64 * 1.2) % 360.0;
            match i % 3 {
                0 => json!({"type": "box", "RA": [ra, ra + 5.0, ra + 5.0, ra],
                            "Dec": [-30.0, -30.0, -20.0, -20.0], "t_frac": 0.1}),
                1 => json!({"type": "circle", "RA_center": ra, "Dec_center": -40.0,
                            "radius": 3.0, "t_frac": 0.1}),
                _ => json!({"type": "ellipse", "RA_center": ra, "Dec_center": -10.0,
                            "a": 6.0, "b": 2.0, "theta": 30.0, "t_frac": 0.1}),
            }
        })
        .collect();
    group.bench_function("convert_300_areas", |b| {
        b.iter(|| convert_areas(black_box(&areas)));
    });

    if let Ok(document) = DocumentLoader::default_document() {
        group.bench_function("format_default_document", |b| {
            b.iter(|| format_document(black_box(document)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_convex_hull, bench_shapes, bench_document);
criterion_main!(benches);
