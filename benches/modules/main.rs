//! Benches evaluating module graphs over a grid of points.
#![expect(
    missing_docs,
    reason = "Its a benchmark and cirterion macros don't add docs."
)]

use std::sync::Arc;

use bevy_math::DVec3;
use criterion::{measurement::WallTime, *};
use noise_graph::prelude::*;

criterion_main!(benches);
criterion_group!(benches, generators, modifiers);

const SIZE: u32 = 256;

#[inline]
fn bench_grid(module: &dyn Module) -> f64 {
    let mut res = 0.0;
    for x in 0..SIZE {
        for y in 0..SIZE {
            res += module.sample(DVec3::new(x as f64, y as f64, 0.5) / 32.0);
        }
    }
    res
}

fn generators(c: &mut Criterion) {
    let mut group = c.benchmark_group("generators");
    group.warm_up_time(core::time::Duration::from_millis(500));
    group.measurement_time(core::time::Duration::from_secs(4));

    group.bench_function("primitive", |bencher| {
        bencher.iter(|| {
            let mut res = 0.0;
            for x in 0..SIZE {
                for y in 0..SIZE {
                    let point = DVec3::new(x as f64, y as f64, 0.5) / 32.0;
                    res += coherent_noise_3d(point, black_box(0), NoiseQuality::Std);
                }
            }
            res
        });
    });

    for octaves in [1, 2, 8] {
        perlin(&mut group, octaves);
        billow(&mut group, octaves);
    }
}

fn perlin(group: &mut BenchmarkGroup<WallTime>, octaves: i32) {
    let octaves = black_box(octaves);
    group.bench_function(format!("perlin {octaves} octaves"), |bencher| {
        bencher.iter(|| {
            let mut noise = Perlin::new();
            let _ = noise.set_octave_count(octaves);
            bench_grid(&noise)
        });
    });
}

fn billow(group: &mut BenchmarkGroup<WallTime>, octaves: i32) {
    let octaves = black_box(octaves);
    group.bench_function(format!("billow {octaves} octaves"), |bencher| {
        bencher.iter(|| {
            let mut noise = Billow::new();
            let _ = noise.set_octave_count(octaves);
            bench_grid(&noise)
        });
    });
}

fn modifiers(c: &mut Criterion) {
    let mut group = c.benchmark_group("modifiers");
    group.warm_up_time(core::time::Duration::from_millis(500));
    group.measurement_time(core::time::Duration::from_secs(4));

    group.bench_function("clamp const", |bencher| {
        let clamp = Clamp::new(Arc::new(Const::new(5.0)));
        bencher.iter(|| bench_grid(&clamp));
    });

    group.bench_function("clamp exponent perlin", |bencher| {
        let mut exponent = Exponent::new(Arc::new(Perlin::new()));
        exponent.set_exponent(2.0);
        let clamp = Clamp::new(Arc::new(exponent));
        bencher.iter(|| bench_grid(&clamp));
    });
}
