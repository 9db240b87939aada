//! Simulator configuration.

use serde::{Deserialize, Serialize};

/// Knobs for a [`Simulator`](crate::simulator::Simulator).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulatorConfig {
    /// Seed for the scramble RNG.
    /// Same seed produces the same scrambles.
    pub seed: u64,

    /// Record performed sequences so they can be undone.
    pub record_history: bool,

    /// Moves per scramble. `None` uses the profile's default.
    pub scramble_move_count: Option<usize>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            record_history: true,
            scramble_move_count: None,
        }
    }
}

impl SimulatorConfig {
    /// Set the scramble seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Turn history recording on or off.
    #[must_use]
    pub fn with_recording(mut self, record: bool) -> Self {
        self.record_history = record;
        self
    }

    /// Override the number of moves per scramble.
    #[must_use]
    pub fn with_scramble_move_count(mut self, count: usize) -> Self {
        self.scramble_move_count = Some(count);
        self
    }
}
