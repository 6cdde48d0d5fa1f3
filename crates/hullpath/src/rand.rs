//! Random point clouds (uniform rectangle + replay tokens).
//!
//! Purpose
//! - A small, deterministic sampler for the property tests and benches.
//!   Draws are reproducible and indexable: the same `(seed, index)` token
//!   always yields the same cloud.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform-rectangle sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct ScatterCfg {
    pub count: usize,
    /// Inclusive x range.
    pub x: (f64, f64),
    /// Inclusive y range.
    pub y: (f64, f64),
}

impl Default for ScatterCfg {
    fn default() -> Self {
        Self {
            count: 32,
            x: (-10.0, 10.0),
            y: (-10.0, 10.0),
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
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
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

/// Draw `cfg.count` points uniformly in the configured rectangle.
pub fn scatter_points(cfg: ScatterCfg, tok: ReplayToken) -> Vec<Vector2<f64>> {
    let mut rng = tok.to_std_rng();
    let (x0, x1) = (cfg.x.0.min(cfg.x.1), cfg.x.0.max(cfg.x.1));
    let (y0, y1) = (cfg.y.0.min(cfg.y.1), cfg.y.0.max(cfg.y.1));
    (0..cfg.count)
        .map(|_| {
            let x = if x0 < x1 { rng.gen_range(x0..=x1) } else { x0 };
            let y = if y0 < y1 { rng.gen_range(y0..=y1) } else { y0 };
            Vector2::new(x, y)
        })
        .collect()
}
