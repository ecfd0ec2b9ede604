use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use fractal_demos::{
    AnimationState, DemoVariant, Resolution, SceneComposer, render_frame, render_frame_serial,
};

const WIDTH: u32 = 320;
const HEIGHT: u32 = 180;
// Far enough into the animation that every preset shows detail
const SAMPLE_TIME: f64 = 12.0;

fn bench_render_frame(c: &mut Criterion) {
    let resolution = Resolution::new(WIDTH, HEIGHT).unwrap();
    let state = AnimationState::new(SAMPLE_TIME, resolution);
    let mut group = c.benchmark_group("render_frame");

    for &variant in DemoVariant::ALL {
        let composer = SceneComposer::new(variant.config().scene).unwrap();
        let shader = composer.frame(&state);

        group.bench_with_input(BenchmarkId::new("rayon", variant), &shader, |b, shader| {
            b.iter(|| black_box(render_frame(resolution, shader)))
        });
        group.bench_with_input(BenchmarkId::new("serial", variant), &shader, |b, shader| {
            b.iter(|| black_box(render_frame_serial(resolution, shader)))
        });
    }

    group.finish();
}

fn bench_frame_setup(c: &mut Criterion) {
    let resolution = Resolution::new(WIDTH, HEIGHT).unwrap();
    let composer = SceneComposer::new(DemoVariant::Blend.config().scene).unwrap();

    c.bench_function("frame_setup/blend", |b| {
        let mut t = 0.0;
        b.iter(|| {
            t += 1.0 / 60.0;
            black_box(composer.frame(&AnimationState::new(t, resolution)))
        })
    });
}

criterion_group!(benches, bench_render_frame, bench_frame_setup);
criterion_main!(benches);
