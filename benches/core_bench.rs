use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::DVec2;
use kreisfigur_studio::core::constructions;
use kreisfigur_studio::Circle;
use std::hint::black_box;

/// Deterministische Dreiecke auf dem Standard-Grundkreis.
fn build_triangles(count: usize) -> Vec<[DVec2; 3]> {
    let circle = Circle::from_surface(600.0, 600.0, 50.0);
    (0..count)
        .map(|i| {
            let base = i as f64 * 0.013;
            [
                circle.point_at_angle(base + 0.2),
                circle.point_at_angle(base + 2.3),
                circle.point_at_angle(base + 4.1),
            ]
        })
        .collect()
}

fn build_pointer_positions(count: usize) -> Vec<DVec2> {
    (0..count)
        .map(|i| {
            let x = (i % 600) as f64 + 0.37;
            let y = ((i * 7) % 600) as f64 + 0.63;
            DVec2::new(x, y)
        })
        .collect()
}

fn bench_constructions(c: &mut Criterion) {
    let triangles = build_triangles(1024);

    c.bench_function("incircle_batch", |b| {
        b.iter(|| {
            let mut sum = 0.0;
            for tri in &triangles {
                let circle = constructions::incircle(black_box(*tri));
                sum += circle.radius;
            }
            black_box(sum)
        })
    });

    c.bench_function("nine_point_batch", |b| {
        b.iter(|| {
            let mut sum = 0.0;
            for tri in &triangles {
                let circle = constructions::nine_point_circle(black_box(*tri));
                sum += circle.radius;
            }
            black_box(sum)
        })
    });
}

fn bench_projection(c: &mut Criterion) {
    let mut group = c.benchmark_group("circle_projection");
    let circle = Circle::from_surface(600.0, 600.0, 50.0);

    for &count in &[1_024usize, 16_384usize] {
        let positions = build_pointer_positions(count);

        group.bench_with_input(
            BenchmarkId::new("project_batch", count),
            &positions,
            |b, positions| {
                b.iter(|| {
                    let mut hits = 0usize;
                    for pos in positions {
                        if circle.project(black_box(*pos)).is_some() {
                            hits += 1;
                        }
                    }
                    black_box(hits)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_constructions, bench_projection);
criterion_main!(benches);
