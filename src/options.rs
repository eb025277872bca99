use crate::error::{Error, Result};
use crate::index::MAX_LEVEL;

/// Leaderboard configuration.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Options {
    pub max_level: usize,         // Tallest node the ranking index will draw, 1..=MAX_LEVEL.
    pub level_seed: Option<u64>,  // Seed for node heights; None seeds from OS entropy.
    pub initial_capacity: usize,  // Entities to pre-size the identity table and index for.
}

impl Default for Options {
    /// Creates a new set of options with default values.
    fn default() -> Self {
        Self {
            max_level: MAX_LEVEL,
            level_seed: None,
            initial_capacity: 0,
        }
    }
}

impl Options {
    /// Creates a new set of options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Same options, with node heights drawn from `seed`.
    pub fn with_level_seed(mut self, seed: u64) -> Self {
        self.level_seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_LEVEL).contains(&self.max_level) {
            return Err(Error::InvalidOption(format!(
                "max_level must be in 1..={MAX_LEVEL}, got {}",
                self.max_level
            )));
        }
        Ok(())
    }
}
