//! Criterion benchmarks for segment intersection and boundary validation.
//! Focus sizes: accepted-edge counts in {10, 100, 1000}.
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p hullgeom

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use hullgeom::geom2::rand::{draw_segments, ReplayToken, SegmentCfg};
use hullgeom::geom2::{can_accept, segments_intersect, segments_intersect_cfg, IntersectCfg};

fn bench_pairs(c: &mut Criterion) {
    let mut group = c.benchmark_group("segments_intersect");
    let cfg = SegmentCfg {
        integer_grid: false,
        ..SegmentCfg::default()
    };
    let segs = draw_segments(cfg, ReplayToken::new(43, 0), 1024);
    group.bench_function("exact", |b| {
        b.iter(|| {
            let mut n = 0usize;
            for pair in segs.chunks_exact(2) {
                let (s, t) = (pair[0], pair[1]);
                n += segments_intersect(s.p, s.q, t.p, t.q) as usize;
            }
            black_box(n)
        })
    });
    let loose = IntersectCfg::with_eps(1e-9);
    group.bench_function("eps", |b| {
        b.iter(|| {
            let mut n = 0usize;
            for pair in segs.chunks_exact(2) {
                let (s, t) = (pair[0], pair[1]);
                n += segments_intersect_cfg(s.p, s.q, t.p, t.q, loose) as usize;
            }
            black_box(n)
        })
    });
    group.finish();
}

fn bench_boundary(c: &mut Criterion) {
    let mut group = c.benchmark_group("boundary");
    // Wide integer box: exact arithmetic, mixed hit/miss scans.
    let cfg = SegmentCfg {
        min: nalgebra::Vector2::new(-1000.0, -1000.0),
        max: nalgebra::Vector2::new(1000.0, 1000.0),
        integer_grid: true,
    };
    for &m in &[10usize, 100, 1000] {
        group.bench_with_input(BenchmarkId::new("can_accept", m), &m, |b, &m| {
            b.iter_batched(
                || {
                    let accepted = draw_segments(cfg, ReplayToken::new(44, m as u64), m);
                    let cand = draw_segments(cfg, ReplayToken::new(45, m as u64), 1)[0];
                    (accepted, cand)
                },
                |(accepted, cand)| black_box(can_accept(&cand, &accepted)),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pairs, bench_boundary);
criterion_main!(benches);
