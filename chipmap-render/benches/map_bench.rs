use criterion::{criterion_group, criterion_main, Criterion};
use image::{Rgba, RgbaImage};

use chipmap_core::{GeoBounds, GeoPoint, GeoProjector, NavigationState};
use chipmap_render::{MapOverlay, ZoomPyramid};

fn bench_project(c: &mut Criterion) {
    let projector = GeoProjector::new(GeoBounds::new(-121.375, -121.250, 38.500, 38.625).unwrap());
    let point = GeoPoint::new(-121.3125, 38.5625);

    c.bench_function("project_point", |b| {
        b.iter(|| projector.project(std::hint::black_box(point), 1600, 1600));
    });
}

fn bench_overlay(c: &mut Criterion) {
    let projector = GeoProjector::new(GeoBounds::new(-121.375, -121.250, 38.500, 38.625).unwrap());
    let nav = NavigationState::default();

    c.bench_function("overlay_frame", |b| {
        b.iter(|| MapOverlay::compute(&nav, &projector, 1600, 1600));
    });
}

fn bench_pyramid_build(c: &mut Criterion) {
    let source = RgbaImage::from_fn(1600, 1200, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, ((x ^ y) % 256) as u8, 255])
    });

    let mut group = c.benchmark_group("pyramid");
    group.sample_size(10);
    group.bench_function("build_1600x1200", |b| {
        b.iter(|| ZoomPyramid::build(&source).unwrap());
    });
    group.finish();
}

criterion_group!(benches, bench_project, bench_overlay, bench_pyramid_build);
criterion_main!(benches);
