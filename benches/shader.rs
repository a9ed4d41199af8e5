use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use checkerball::prelude::*;

const FRAME_SIZE: u32 = 256;

fn shader() -> CheckerSphereShader {
    CheckerSphereShader::new(Uniforms {
        rotation: Vec3::new(0.4, 1.1, -0.2),
        color_a: Vec4::new(0.9, 0.1, 0.1, 1.0),
        color_b: Vec4::new(1.0, 1.0, 1.0, 1.0),
        ..Uniforms::default()
    })
}

fn benchmark_single_pixel(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_pixel");
    let shader = shader();

    for (name, pixel) in [
        ("miss", Vec2::new(2.5, 2.5)),
        ("center", Vec2::new(128.5, 128.5)),
        ("edge", Vec2::new(222.5, 128.5)),
    ] {
        group.bench_with_input(BenchmarkId::new("shade", name), &pixel, |b, &p| {
            b.iter(|| shader.shade(black_box(p)));
        });
    }

    group.bench_function("evaluate_center", |b| {
        b.iter(|| {
            evaluate(
                black_box(Vec2::new(128.5, 128.5)),
                Vec2::ZERO,
                Vec3::new(0.4, 1.1, -0.2),
                Vec4::ONE,
                Vec4::ZERO,
            )
        });
    });

    group.finish();
}

fn benchmark_full_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_frame");
    let shader = shader();

    group.bench_function("serial_256", |b| {
        let mut renderer = Renderer::new(FRAME_SIZE, FRAME_SIZE).unwrap();
        b.iter(|| renderer.render_serial(black_box(&shader)));
    });

    group.bench_function("parallel_256", |b| {
        let mut renderer = Renderer::new(FRAME_SIZE, FRAME_SIZE).unwrap();
        b.iter(|| renderer.render(black_box(&shader)));
    });

    group.finish();
}

criterion_group!(benches, benchmark_single_pixel, benchmark_full_frame);
criterion_main!(benches);
