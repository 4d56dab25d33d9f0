//! Move selector configuration.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Settings for a [`MoveSelector`](crate::MoveSelector).
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// Answer the empty board with a random corner or the center instead of
    /// searching.
    #[serde(default = "default_opening_book")]
    opening_book: bool,

    /// Use alpha-beta pruning. Results are identical either way.
    #[serde(default)]
    pruning: bool,

    /// Seed for the opening book. `None` seeds from entropy.
    #[serde(default)]
    seed: Option<u64>,
}

#[instrument]
fn default_opening_book() -> bool {
    true
}

impl SelectorConfig {
    /// Creates a configuration.
    #[instrument]
    pub fn new(opening_book: bool, pruning: bool, seed: Option<u64>) -> Self {
        Self {
            opening_book,
            pruning,
            seed,
        }
    }

    /// Returns a copy with the opening book switched on or off.
    pub fn with_opening_book(mut self, opening_book: bool) -> Self {
        self.opening_book = opening_book;
        self
    }

    /// Returns a copy with pruning switched on or off.
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.pruning = pruning;
        self
    }

    /// Returns a copy with a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self::new(default_opening_book(), false, None)
    }
}
