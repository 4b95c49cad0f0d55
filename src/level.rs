//! Tower height generation.
//!
//! A new node's height is drawn by flipping a fair coin until it comes up
//! tails: every heads adds one level. Heights are therefore geometric,
//! `P(h) = 2^-(h+1)`, with everything past the ceiling collapsed onto the
//! ceiling itself. Each level ends up holding about half the nodes of the
//! level below, which is what keeps search logarithmic.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of tower heights for newly inserted nodes.
///
/// Implementations must return a value in `0..=max_level`. The skip list
/// clamps anything larger, so a misbehaving generator cannot break the
/// structure, only its balance.
pub trait LevelGenerator {
    /// Draws the height of one new tower.
    fn random_height(&mut self, max_level: usize) -> usize;
}

impl<G: LevelGenerator + ?Sized> LevelGenerator for &mut G {
    #[inline]
    fn random_height(&mut self, max_level: usize) -> usize {
        (**self).random_height(max_level)
    }
}

impl<G: LevelGenerator + ?Sized> LevelGenerator for Box<G> {
    #[inline]
    fn random_height(&mut self, max_level: usize) -> usize {
        (**self).random_height(max_level)
    }
}

/// Fair coin-flip generator over any [`Rng`].
#[derive(Debug, Clone)]
pub struct CoinFlip<R = StdRng> {
    rng: R,
}

impl CoinFlip<StdRng> {
    /// Coin flips seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible coin flips.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for CoinFlip<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> CoinFlip<R> {
    /// Coin flips drawn from a caller-supplied generator.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> LevelGenerator for CoinFlip<R> {
    fn random_height(&mut self, max_level: usize) -> usize {
        let mut height = 0;
        while height < max_level && self.rng.gen_bool(0.5) {
            height += 1;
        }
        height
    }
}

/// Replays a fixed script of heights, then yields 0 forever.
///
/// Lets tests pin down the exact shape of every tower.
///
/// ```
/// use skiplist_kv::{FixedHeights, SkipList};
///
/// let mut sl = SkipList::with_generator(FixedHeights::new([2, 0]));
/// sl.insert(1, "a");
/// sl.insert(2, "b");
/// assert_eq!(sl.tower_height(&1), Some(2));
/// assert_eq!(sl.tower_height(&2), Some(0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct FixedHeights {
    script: VecDeque<usize>,
}

impl FixedHeights {
    /// Script of heights, handed out in order.
    pub fn new(heights: impl IntoIterator<Item = usize>) -> Self {
        Self {
            script: heights.into_iter().collect(),
        }
    }

    /// Heights not yet consumed.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl LevelGenerator for FixedHeights {
    fn random_height(&mut self, max_level: usize) -> usize {
        self.script.pop_front().unwrap_or(0).min(max_level)
    }
}
