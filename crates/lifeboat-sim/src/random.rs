//! Injectable random source.
//!
//! Every random decision in a tick (target picks, evasion rolls, countdown
//! jitter) goes through `RandomSource`, so tests can script exact outcomes.

use std::collections::VecDeque;

use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// Source of uniform samples in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;

    /// True with probability `p`. Always consumes one sample.
    fn chance(&mut self, p: f64) -> bool {
        self.next_unit() < p
    }

    /// Uniform index into a collection of `len` items. Consumes nothing when
    /// `len` is zero.
    fn pick(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let i = (self.next_unit() * len as f64) as usize;
        Some(i.min(len - 1))
    }

    /// Uniform integer in `0..n`; 0 when `n` is 0.
    fn below(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        ((self.next_unit() * f64::from(n)) as u32).min(n - 1)
    }

    /// Uniform integer in `lo..=hi`.
    fn range_inclusive(&mut self, lo: u32, hi: u32) -> u32 {
        lo + self.below(hi.saturating_sub(lo) + 1)
    }
}

impl RandomSource for ChaCha8Rng {
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Replays a fixed sequence of samples, then repeats a fallback value.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    samples: VecDeque<f64>,
    fallback: f64,
}

impl ScriptedRandom {
    pub fn new(samples: impl IntoIterator<Item = f64>) -> Self {
        Self {
            samples: samples.into_iter().collect(),
            fallback: 0.0,
        }
    }

    /// A source that always returns `value`.
    pub fn constant(value: f64) -> Self {
        Self {
            samples: VecDeque::new(),
            fallback: value,
        }
    }

    pub fn with_fallback(mut self, fallback: f64) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn remaining(&self) -> usize {
        self.samples.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f64 {
        self.samples.pop_front().unwrap_or(self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_pick_maps_unit_interval_onto_indices() {
        let mut rng = ScriptedRandom::new([0.0, 0.49, 0.5, 0.999]);
        assert_eq!(rng.pick(2), Some(0));
        assert_eq!(rng.pick(2), Some(0));
        assert_eq!(rng.pick(2), Some(1));
        assert_eq!(rng.pick(2), Some(1));
    }

    #[test]
    fn test_pick_empty_consumes_nothing() {
        let mut rng = ScriptedRandom::new([0.7]);
        assert_eq!(rng.pick(0), None);
        assert_eq!(rng.remaining(), 1);
    }

    #[test]
    fn test_range_inclusive_covers_both_ends() {
        let mut rng = ScriptedRandom::new([0.0, 0.99]);
        assert_eq!(rng.range_inclusive(2, 3), 2);
        assert_eq!(rng.range_inclusive(2, 3), 3);
    }

    #[test]
    fn test_fallback_after_script() {
        let mut rng = ScriptedRandom::new([0.25]).with_fallback(0.75);
        assert_eq!(rng.next_unit(), 0.25);
        assert_eq!(rng.next_unit(), 0.75);
        assert_eq!(rng.next_unit(), 0.75);
    }

    #[test]
    fn test_chacha_samples_in_unit_interval() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..1000 {
            let v = rng.next_unit();
            assert!((0.0..1.0).contains(&v));
            assert!(rng.range_inclusive(2, 3) <= 3);
        }
    }
}
