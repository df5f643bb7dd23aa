//! Benchmarks for field generation and per-frame stepping.
//!
//! Stepping runs once per rendered frame, so its cost bounds the frame rate.
//!
//! Run with: `cargo bench` (add `--features parallel` for the rayon loop)

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec3;
use taichi_field::field::ParticleField;
use taichi_field::mode::Mode;
use taichi_field::palette::Emblem;
use taichi_field::rotation::Rotation;
use taichi_field::spawn::Sampler;
use taichi_field::stepper::Stepper;

const COUNTS: [usize; 3] = [1_000, 15_000, 100_000];

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for count in COUNTS {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                let mut sampler = Sampler::from_seed(1);
                black_box(ParticleField::generate_with(count, 4.5, &mut sampler))
            })
        });
    }

    group.finish();
}

fn bench_step(c: &mut Criterion) {
    let stepper = Stepper::default();

    for mode in [Mode::Form, Mode::Scatter] {
        let mut group = c.benchmark_group(format!("step_{mode}"));

        for count in COUNTS {
            let mut field = match ParticleField::generate_with(count, 4.5, &mut Sampler::from_seed(2)) {
                Ok(field) => field,
                Err(e) => panic!("bench field: {e}"),
            };
            let mut rotation = Rotation::new();
            let mut elapsed = 0.0f32;

            group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
                b.iter(|| {
                    elapsed += 1.0 / 60.0;
                    stepper.step(&mut field, mode, elapsed, &mut rotation);
                    black_box(field.live_as_f32());
                })
            });
        }

        group.finish();
    }
}

fn bench_shade(c: &mut Criterion) {
    let emblem = Emblem::new(4.5);
    let points: Vec<Vec3> = {
        let mut sampler = Sampler::from_seed(3);
        (0..1024).map(|_| sampler.random_in_sphere(4.5)).collect()
    };

    c.bench_function("shade_at_1024", |b| {
        b.iter(|| {
            for p in &points {
                black_box(emblem.shade_at(*p));
            }
        })
    });
}

criterion_group!(benches, bench_generate, bench_step, bench_shade);
criterion_main!(benches);
