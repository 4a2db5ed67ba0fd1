//! The transition-rule seam between the step engine and each automaton.

use crate::grid::Grid;
use crate::neighbors::NeighborAggregator;
use automata_core::{Error, Result};

/// A pure generation-to-generation transition function
pub trait TransitionRule {
    /// Full automaton state read and produced by the rule
    type State: Clone;

    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Highest value a rendered cell may hold
    fn state_max(&self) -> u8;

    /// Compute the next state from the current one. Must read only `state`,
    /// never a partially written successor.
    fn next_state(&self, state: &Self::State, neighbors: &NeighborAggregator) -> Self::State;

    /// Collapse a state into a single display-ready grid
    fn render(&self, state: &Self::State) -> Grid<u8>;

    /// Check that a state is one this rule can hold
    fn check_state(&self, state: &Self::State) -> Result<()> {
        check_range(&self.render(state), self.state_max())
    }
}

/// Every cell of `frame` lies in `[0, max]`
pub fn check_range(frame: &Grid<u8>, max: u8) -> Result<()> {
    match frame.iter().find(|&(_, value)| value > max) {
        Some((pos, value)) => Err(Error::InvariantViolation(format!(
            "cell {} holds {} outside [0, {}]",
            pos, value, max
        ))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_range() {
        let frame = Grid::from_rows(vec![vec![0u8, 1], vec![2, 3]]).unwrap();
        assert!(check_range(&frame, 3).is_ok());

        let err = check_range(&frame, 2).unwrap_err();
        assert!(matches!(err, Error::InvariantViolation(_)));
        assert!(err.to_string().contains("(1, 1)"));
    }
}
