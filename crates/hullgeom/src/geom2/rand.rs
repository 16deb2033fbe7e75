//! Random segments in 2D (box-uniform or integer grid + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler for segment pairs used by the
//!   randomized tests and the intersection benchmarks.
//!
//! Model
//! - Endpoints are drawn uniformly from an axis-aligned box. In grid mode the
//!   coordinates are rounded to integers, so every cross term is exact and the
//!   literal collinearity test is unambiguous.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::Segment2;

/// Segment sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct SegmentCfg {
    /// Lower-left corner of the sampling box.
    pub min: Vector2<f64>,
    /// Upper-right corner of the sampling box. Swapped with `min` if inverted.
    pub max: Vector2<f64>,
    /// Round endpoints to integers (exact arithmetic below 2^26 per axis).
    pub integer_grid: bool,
}

impl Default for SegmentCfg {
    fn default() -> Self {
        Self {
            min: Vector2::new(-8.0, -8.0),
            max: Vector2::new(8.0, 8.0),
            integer_grid: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    /// Token for the next draw in the same stream.
    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

fn draw_point<R: Rng>(cfg: &SegmentCfg, rng: &mut R) -> Vector2<f64> {
    let lo = cfg.min.inf(&cfg.max);
    let hi = cfg.min.sup(&cfg.max);
    let coord = |rng: &mut R, a: f64, b: f64| -> f64 {
        if cfg.integer_grid {
            let (a, b) = (a.ceil() as i64, b.floor() as i64);
            if a > b {
                return a as f64;
            }
            rng.gen_range(a..=b) as f64
        } else if a == b {
            a
        } else {
            rng.gen_range(a..=b)
        }
    };
    let x = coord(rng, lo.x, hi.x);
    let y = coord(rng, lo.y, hi.y);
    Vector2::new(x, y)
}

/// Draw one segment for the given token.
pub fn draw_segment(cfg: SegmentCfg, tok: ReplayToken) -> Segment2 {
    let mut rng = tok.to_std_rng();
    let p = draw_point(&cfg, &mut rng);
    let q = draw_point(&cfg, &mut rng);
    Segment2::new(p, q)
}

/// Draw `n` segments from one RNG stream seeded by `tok`.
pub fn draw_segments(cfg: SegmentCfg, tok: ReplayToken, n: usize) -> Vec<Segment2> {
    let mut rng = tok.to_std_rng();
    (0..n)
        .map(|_| {
            let p = draw_point(&cfg, &mut rng);
            let q = draw_point(&cfg, &mut rng);
            Segment2::new(p, q)
        })
        .collect()
}
