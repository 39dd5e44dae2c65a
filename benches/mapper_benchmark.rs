//! Palette mapper benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use huepick::{
    approximate_point, clamp_to_wheel, CanvasSize, PalettePoint, SampledPixel,
};

/// Disc mask centered on (500, 500) with the given radius.
fn disc_mask(radius: f32) -> impl Fn(f32, f32) -> SampledPixel {
    move |x, y| {
        let dx = x - 500.0;
        let dy = y - 500.0;
        if (dx * dx + dy * dy).sqrt() <= radius {
            SampledPixel::opaque(128, 128, 128)
        } else {
            SampledPixel::TRANSPARENT
        }
    }
}

fn benchmark_radial_clamp(c: &mut Criterion) {
    let mut group = c.benchmark_group("Radial Clamp");
    let size = CanvasSize::new(1000.0, 1000.0);

    group.bench_function("inside", |b| {
        b.iter(|| clamp_to_wheel(PalettePoint::new(700.0, 500.0), size))
    });
    group.bench_function("outside", |b| {
        b.iter(|| clamp_to_wheel(PalettePoint::new(4000.0, -2500.0), size))
    });

    group.finish();
}

fn benchmark_bisection(c: &mut Criterion) {
    let mut group = c.benchmark_group("Bisection Search");
    let mask = disc_mask(200.0);
    let center = PalettePoint::new(500.0, 500.0);

    for span in [10.0_f32, 100.0, 1000.0, 10000.0] {
        let candidate = PalettePoint::new(500.0 + span, 500.0);
        group.bench_with_input(
            BenchmarkId::new("span_px", span as u32),
            &candidate,
            |b, candidate| b.iter(|| approximate_point(*candidate, center, &mask)),
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_radial_clamp, benchmark_bisection);
criterion_main!(benches);
