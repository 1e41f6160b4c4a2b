use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion,
};
use mc33::{DenseField, MarchingCubes, Mode, Settings};

fn sphere(n: usize) -> DenseField {
    let c = (n - 1) as f32 / 2.0;
    let r = c * 0.7;
    DenseField::from_fn(n, n, n, move |i, j, k| {
        let x = i as f32 - c;
        let y = j as f32 - c;
        let z = k as f32 - c;
        (x * x + y * y + z * z).sqrt() - r
    })
}

fn gyroid(n: usize) -> DenseField {
    let s = 8.0 / (n - 1) as f32;
    DenseField::from_fn(n, n, n, move |i, j, k| {
        let x = i as f32 * s;
        let y = j as f32 * s;
        let z = k as f32 * s;
        x.sin() * y.cos() + y.sin() * z.cos() + z.sin() * x.cos()
    })
}

pub fn sphere_mode_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("sphere (64^3)");
    let field = sphere(64);
    for (name, mode) in
        [("topological", Mode::Topological), ("classic", Mode::Classic)]
    {
        group.bench_function(BenchmarkId::from_parameter(name), |b| {
            b.iter(|| {
                let mc = MarchingCubes::new(&field);
                black_box(mc.run(Settings { iso: 0.0, mode }).unwrap())
            })
        });
    }
    group.finish();
}

pub fn gyroid_size_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("gyroid, topological");
    for n in [16, 32, 64] {
        let field = gyroid(n);
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| {
                let mc = MarchingCubes::new(&field);
                black_box(mc.run(Settings::default()).unwrap())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, sphere_mode_sweep, gyroid_size_sweep);
criterion_main!(benches);
