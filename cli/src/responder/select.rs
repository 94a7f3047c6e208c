//! # Folio Reply Selection
//!
//! File: cli/src/responder/select.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Picks which of a topic's reply variants is returned. The responder takes the
//! selector as a parameter so callers control the source of randomness:
//! - `RandomReply`: uniform pick backed by `rand`, optionally seeded
//! - `FirstReply`: always the first variant, for deterministic tests
//!
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Chooses an index among `candidates` reply variants.
///
/// `candidates` is always at least 1. Indices past the end are wrapped by the
/// responder.
pub trait ReplySelector {
    fn select(&mut self, candidates: usize) -> usize;
}

/// Always selects the first variant.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstReply;

impl ReplySelector for FirstReply {
    fn select(&mut self, _candidates: usize) -> usize {
        0
    }
}

/// Uniformly random selection.
#[derive(Debug, Clone)]
pub struct RandomReply<R = StdRng> {
    rng: R,
}

impl RandomReply<StdRng> {
    /// Seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Seeded when `seed` is set, otherwise from entropy.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl<R: Rng> RandomReply<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> ReplySelector for RandomReply<R> {
    fn select(&mut self, candidates: usize) -> usize {
        if candidates <= 1 {
            return 0;
        }
        self.rng.gen_range(0..candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_reply_is_always_zero() {
        let mut selector = FirstReply;
        assert_eq!(selector.select(1), 0);
        assert_eq!(selector.select(3), 0);
    }

    #[test]
    fn test_random_reply_stays_in_range() {
        let mut selector = RandomReply::from_entropy();
        for _ in 0..200 {
            assert!(selector.select(3) < 3);
        }
        assert_eq!(selector.select(1), 0);
    }

    #[test]
    fn test_seeded_selection_is_reproducible() {
        let mut a = RandomReply::seeded(42);
        let mut b = RandomReply::seeded(42);
        let picks_a: Vec<usize> = (0..20).map(|_| a.select(3)).collect();
        let picks_b: Vec<usize> = (0..20).map(|_| b.select(3)).collect();
        assert_eq!(picks_a, picks_b);
    }

    #[test]
    fn test_random_reply_reaches_every_variant() {
        let mut selector = RandomReply::seeded(7);
        let mut seen = [false; 3];
        for _ in 0..300 {
            seen[selector.select(3)] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
