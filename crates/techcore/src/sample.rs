//! Uniform sampling without replacement (Fisher–Yates + prefix) and replay tokens.
//!
//! Model
//! - `shuffle` is the classic descending Fisher–Yates: every permutation of the
//!   input is equally likely, so any prefix is a uniform sample without
//!   replacement, in uniform order.
//! - Randomness is always injected. Production views draw from `session_rng()`;
//!   tests and reproducible CLI runs use a `ReplayToken` mixed into one `StdRng`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Size of the sampled "all" views.
pub const DEFAULT_SAMPLE_CAP: usize = 8;

/// Sampling configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SampleCfg {
    /// Maximum size of a sampled view. Zero yields empty sampled views.
    pub cap: usize,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            cap: DEFAULT_SAMPLE_CAP,
        }
    }
}

/// In-place uniform permutation.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Shuffle `candidates` and keep the first `min(cap, len)` entries.
pub fn sample<T, R: Rng + ?Sized>(mut candidates: Vec<T>, cap: usize, rng: &mut R) -> Vec<T> {
    shuffle(&mut candidates, rng);
    candidates.truncate(cap);
    candidates
}

/// Replay token that makes a sampled view reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    /// Token for the next view in the same session.
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }

    #[inline]
    pub fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer; stable across platforms.
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

/// Non-reproducible generator for live sessions.
pub fn session_rng() -> StdRng {
    StdRng::from_entropy()
}
