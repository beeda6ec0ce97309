//! Tie breaking for the deletion merge step.
//!
//! When a removed node has both a lo and a hi subtree at the same distance
//! from its discriminator, either subtree may be grafted under the other.
//! The choice only changes the shape of the trie, never its contents, and is
//! made by a random source so that repeated deletions do not skew the tree
//! towards one side.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the lo/hi decision taken on an exact distance tie.
#[cfg_attr(test, mockall::automock)]
pub trait TieBreaker {
    /// Returns `true` to graft the hi subtree, `false` to graft the lo subtree.
    fn prefer_high(&mut self) -> bool;
}

/// Fair coin backed by [`StdRng`].
#[derive(Debug, Clone)]
pub struct RandomTieBreaker {
    rng: StdRng,
}

impl RandomTieBreaker {
    /// Seeds from operating system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic sequence for reproducible tree shapes.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomTieBreaker {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl TieBreaker for RandomTieBreaker {
    fn prefer_high(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_sequence_is_reproducible() {
        let mut a = RandomTieBreaker::with_seed(7);
        let mut b = RandomTieBreaker::with_seed(7);
        let left: Vec<bool> = (0..32).map(|_| a.prefer_high()).collect();
        let right: Vec<bool> = (0..32).map(|_| b.prefer_high()).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn test_both_sides_are_chosen() {
        let mut coin = RandomTieBreaker::with_seed(42);
        let highs = (0..256).filter(|_| coin.prefer_high()).count();
        assert!(highs > 0 && highs < 256);
    }
}
