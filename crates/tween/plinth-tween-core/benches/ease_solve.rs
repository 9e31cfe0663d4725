use criterion::{black_box, criterion_group, criterion_main, Criterion};
use plinth_tween_core::{Ease, FastEase, Node, Track};

fn ease_benchmark(c: &mut Criterion) {
    let mut ease = Ease::new(0.0f64, 1.0);
    ease.set_strengths(0.6, 0.4);
    let fast = FastEase::new(0.0f64, 1.0, 0.6, 0.4);

    let mut group = c.benchmark_group("ease_value");
    group.bench_function("accurate", |b| b.iter(|| black_box(ease.value(black_box(0.37)))));
    group.bench_function("lookup_table", |b| {
        b.iter(|| black_box(fast.value(black_box(0.37))))
    });
    group.finish();
}

fn iterations_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("solver_iterations");
    for iterations in [10u32, 100] {
        let mut ease = Ease::new(0.0f64, 1.0);
        ease.set_strengths(0.5, 0.5);
        ease.set_iterations(iterations);
        group.bench_function(format!("{iterations}_iterations"), |b| {
            b.iter(|| black_box(ease.value(black_box(0.71))))
        });
    }
    group.finish();
}

fn track_benchmark(c: &mut Criterion) {
    let mut track = Track::new();
    for i in 0..64 {
        let p = i as f64;
        track.add_node(Node::new(p, (p * 0.3).sin()).with_eases(0.3, 0.3)).unwrap();
    }
    c.bench_function("eased_track_sample", |b| {
        b.iter(|| black_box(track.get_value(black_box(31.4))))
    });
}

criterion_group!(benches, ease_benchmark, iterations_benchmark, track_benchmark);
criterion_main!(benches);
