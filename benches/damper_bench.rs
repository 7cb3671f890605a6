use aimrig::rig::damper;
use aimrig::rig::{Cadence, CameraFrame, MouseAimRig, Pose, TickInput};
use aimrig::RigOptions;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::{Quat, Vec2, Vec3};

fn look_rotation_benchmark(c: &mut Criterion) {
    let forward = Vec3::new(0.3, 0.2, 0.9).normalize() * 500.0;
    c.bench_function("look_rotation", |b| {
        b.iter(|| black_box(damper::look_rotation(black_box(forward), black_box(Vec3::Y))))
    });
}

fn damp_step_benchmark(c: &mut Criterion) {
    let target = damper::look_rotation(Vec3::new(0.3, 0.2, 0.9), Vec3::Y).unwrap();
    let current = Quat::IDENTITY;
    c.bench_function("damp_step", |b| {
        b.iter(|| {
            let t = damper::blend_factor(black_box(5.0), black_box(0.016));
            black_box(current.slerp(target, t))
        })
    });
}

fn full_tick_benchmark(c: &mut Criterion) {
    let mut rig = MouseAimRig::new(RigOptions::default(), &Pose::IDENTITY).unwrap();
    let input = TickInput {
        mouse_delta: Vec2::new(1.5, -0.8),
        ..TickInput::steady(Pose::IDENTITY, CameraFrame::WORLD)
    };
    c.bench_function("full_variable_tick", |b| {
        b.iter(|| rig.tick(black_box(&input), black_box(0.016), Cadence::Variable));
    });
}

criterion_group!(
    benches,
    look_rotation_benchmark,
    damp_step_benchmark,
    full_tick_benchmark
);
criterion_main!(benches);
