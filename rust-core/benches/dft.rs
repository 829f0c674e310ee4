use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dft_workbench::{forward_transform, inverse_transform};

fn bench_transforms(c: &mut Criterion) {
    let mut group = c.benchmark_group("dft");
    
    for &n in &[64usize, 256, 1024] {
        let samples: Vec<f64> = (0..n).map(|k| (k as f64 * 0.1).sin()).collect();
        let (real, imag) = forward_transform(&samples, n, 4);
        
        group.bench_with_input(BenchmarkId::new("forward", n), &samples, |b, s| {
            b.iter(|| forward_transform(black_box(s), n, 4))
        });
        group.bench_with_input(BenchmarkId::new("inverse", n), &(real, imag), |b, (re, im)| {
            b.iter(|| inverse_transform(black_box(re), black_box(im), n, 4))
        });
    }
    
    group.finish();
}

criterion_group!(benches, bench_transforms);
criterion_main!(benches);
