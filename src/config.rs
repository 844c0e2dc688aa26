#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveConfig {
    /// Let a wall cell act as the source. It still expands to its open
    /// neighbours but can never be entered.
    pub allow_wall_source: bool,
    /// Finish as soon as a whole pass relaxes nothing.
    pub stop_when_stable: bool,
    /// Upper bound on relaxation passes. Never exceeds the cell count.
    pub max_rounds: Option<usize>,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            allow_wall_source: false,
            stop_when_stable: true,
            max_rounds: None,
        }
    }
}

impl SolveConfig {
    pub(crate) fn num_rounds(&self, num_cells: usize) -> usize {
        self.max_rounds
            .map_or(num_cells, |max_rounds| max_rounds.min(num_cells))
    }
}
