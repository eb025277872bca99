//! Height draws for new skip list nodes.
//!
//! Every node gets a height when it is spliced in. Heights follow a power law:
//! level 1 always, each further level with probability 1/2, capped at a
//! configured maximum. That distribution is what keeps the expected search path
//! logarithmic without any rebalancing.
//!
//! The draw sits behind [`LevelGenerator`] so a test can replay an exact
//! sequence of heights with [`FixedLevels`] and get the same structure on
//! every run.

use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::MAX_LEVEL;

/// Probability that a node reaching level `k` also reaches `k + 1`.
const PROMOTE: f64 = 0.5;

/// Source of node heights for a skip list.
pub trait LevelGenerator {
    /// Draw the height for the next node, in `1..=MAX_LEVEL`.
    fn next_level(&mut self) -> usize;
}

/// Geometric height draws backed by a seedable RNG.
#[derive(Clone, Debug)]
pub struct RandomLevels {
    rng: StdRng,
    max_level: usize,
}

impl RandomLevels {
    /// Levels seeded from OS entropy, capped at `MAX_LEVEL`.
    pub fn new() -> RandomLevels {
        return RandomLevels::with_rng(StdRng::from_entropy(), MAX_LEVEL);
    }

    /// Levels seeded deterministically, capped at `MAX_LEVEL`.
    pub fn seeded(seed: u64) -> RandomLevels {
        return RandomLevels::with_rng(StdRng::seed_from_u64(seed), MAX_LEVEL);
    }

    /// Levels drawn from `rng`, capped at `max_level`.
    ///
    /// `max_level` is clamped into `1..=MAX_LEVEL`.
    pub fn with_rng(rng: StdRng, max_level: usize) -> RandomLevels {
        return RandomLevels {
            rng,
            max_level: max_level.clamp(1, MAX_LEVEL),
        };
    }

    /// The largest height this generator will return.
    pub fn max_level(&self) -> usize {
        return self.max_level;
    }
}

impl Default for RandomLevels {
    fn default() -> Self {
        return RandomLevels::new();
    }
}

impl LevelGenerator for RandomLevels {
    fn next_level(&mut self) -> usize {
        let mut level = 1;
        while level < self.max_level && self.rng.gen_bool(PROMOTE) {
            level += 1;
        }
        return level;
    }
}

/// Replays a fixed cycle of heights.
///
/// Heights outside `1..=MAX_LEVEL` are clamped. An empty cycle always yields 1.
#[derive(Clone, Debug, Default)]
pub struct FixedLevels {
    levels: Vec<usize>,
    cursor: usize,
}

impl FixedLevels {
    pub fn new(levels: impl Into<Vec<usize>>) -> FixedLevels {
        return FixedLevels {
            levels: levels.into(),
            cursor: 0,
        };
    }
}

impl LevelGenerator for FixedLevels {
    fn next_level(&mut self) -> usize {
        if self.levels.is_empty() {
            return 1;
        }
        let level = self.levels[self.cursor % self.levels.len()];
        self.cursor += 1;
        return level.clamp(1, MAX_LEVEL);
    }
}
