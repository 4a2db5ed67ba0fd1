//! Belousov-Zhabotinsky reaction automaton.
//!
//! Cells hold 0..=255 and fall into three classes: healthy (0), sick (255)
//! and infected (anything between). Healthy cells catch infection from
//! their neighbors, sick cells recover, infected cells drift towards the
//! local average plus a growth bias `g`.

use crate::grid::Grid;
use crate::neighbors::NeighborAggregator;
use crate::rule::TransitionRule;
use automata_core::{BzParams, Result, BZ_STATE_MAX};

/// Classification of a BZ cell by its value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellClass {
    Healthy,
    Infected,
    Sick,
}

impl CellClass {
    pub fn of(value: u8) -> Self {
        match value {
            0 => CellClass::Healthy,
            BZ_STATE_MAX => CellClass::Sick,
            _ => CellClass::Infected,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BzRule {
    params: BzParams,
}

impl BzRule {
    pub fn new(params: BzParams) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &BzParams {
        &self.params
    }

    /// Swap in new reaction rates. Takes effect on the next step.
    pub fn set_params(&mut self, params: BzParams) -> Result<()> {
        params.validate()?;
        self.params = params;
        Ok(())
    }

    /// Next value of one cell.
    ///
    /// `infected` and `sick` count neighbors of each class, `total` is the
    /// sum of the neighbor values plus the cell's own value.
    pub fn next_value(&self, value: u8, infected: u32, sick: u32, total: u32) -> u8 {
        let BzParams { k1, k2, g } = self.params;
        let next = match CellClass::of(value) {
            CellClass::Healthy => infected as f64 / k1 + sick as f64 / k2,
            CellClass::Sick => 0.0,
            CellClass::Infected => total as f64 / (infected + sick + 1) as f64 + g,
        };
        // Cap instead of rolling over, then truncate like an integer cast
        next.clamp(0.0, BZ_STATE_MAX as f64) as u8
    }
}

impl TransitionRule for BzRule {
    type State = Grid<u8>;

    fn name(&self) -> &'static str {
        "bz"
    }

    fn state_max(&self) -> u8 {
        BZ_STATE_MAX
    }

    fn next_state(&self, state: &Grid<u8>, neighbors: &NeighborAggregator) -> Grid<u8> {
        let infected =
            neighbors.count_where(state, |v| CellClass::of(v) == CellClass::Infected);
        let sick = neighbors.count_where(state, |v| CellClass::of(v) == CellClass::Sick);
        let sums = neighbors.sum(state);

        Grid::from_fn(state.width(), state.height(), |pos| {
            let (x, y) = (pos.x as usize, pos.y as usize);
            let value = state.get(x, y);
            self.next_value(
                value,
                infected.get(x, y),
                sick.get(x, y),
                sums.get(x, y) + value as u32,
            )
        })
    }

    fn render(&self, state: &Grid<u8>) -> Grid<u8> {
        state.clone()
    }
}
