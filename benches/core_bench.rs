use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use geofence_editor::core::{haversine_meters, shape_bounds};
use geofence_editor::{frame_shape, validate_shape, EditorOptions, FenceShape, GeoPoint};
use std::hint::black_box;

fn bench_haversine(c: &mut Criterion) {
    c.bench_function("haversine_meters", |b| {
        b.iter(|| {
            haversine_meters(
                black_box(29.25),
                black_box(110.35),
                black_box(29.26),
                black_box(110.36),
            )
        })
    });
}

fn build_polygon(vertex_count: usize) -> FenceShape {
    FenceShape::polygon(
        (0..vertex_count)
            .map(|i| {
                let angle = i as f64 / vertex_count as f64 * std::f64::consts::TAU;
                GeoPoint::new(29.25 + 0.01 * angle.sin(), 110.35 + 0.01 * angle.cos())
            })
            .collect(),
    )
}

fn bench_validate_shape(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate_shape");
    for vertex_count in [3usize, 10, 20] {
        let shape = build_polygon(vertex_count);
        group.bench_with_input(
            BenchmarkId::from_parameter(vertex_count),
            &shape,
            |b, shape| b.iter(|| validate_shape(black_box(Some(shape)))),
        );
    }
    group.finish();
}

fn bench_framing(c: &mut Criterion) {
    let options = EditorOptions::default();
    let shape = build_polygon(20);
    c.bench_function("frame_shape_polygon_20", |b| {
        b.iter(|| {
            black_box(shape_bounds(black_box(&shape)));
            frame_shape(black_box(&shape), [1280.0, 720.0], &options)
        })
    });
}

criterion_group!(benches, bench_haversine, bench_validate_shape, bench_framing);
criterion_main!(benches);
