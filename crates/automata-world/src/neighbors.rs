//! Moore-neighborhood aggregation under a boundary policy.

use crate::grid::Grid;
use automata_core::{Boundary, MOORE_OFFSETS};

/// Computes per-cell summaries of the 8 surrounding cells.
///
/// Equivalent to a same-size 2D convolution with the kernel
/// `[[1, 1, 1], [1, 0, 1], [1, 1, 1]]`: out-of-range cells contribute
/// nothing under [`Boundary::ZeroFill`] and wrap around under
/// [`Boundary::Wrap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NeighborAggregator {
    boundary: Boundary,
}

impl NeighborAggregator {
    pub fn new(boundary: Boundary) -> Self {
        Self { boundary }
    }

    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    /// Sum of `weight(neighbor)` over the Moore neighborhood of every cell
    pub fn aggregate<T, F>(&self, grid: &Grid<T>, weight: F) -> Grid<u32>
    where
        T: Copy,
        F: Fn(T) -> u32,
    {
        Grid::from_fn(grid.width(), grid.height(), |pos| {
            MOORE_OFFSETS
                .iter()
                .filter_map(|&(dx, dy)| grid.sample(pos.add(dx, dy), self.boundary))
                .map(&weight)
                .sum()
        })
    }

    /// Number of live neighbors of every cell
    pub fn count(&self, indicator: &Grid<bool>) -> Grid<u32> {
        self.aggregate(indicator, u32::from)
    }

    /// Number of neighbors satisfying `predicate`
    pub fn count_where<T, P>(&self, grid: &Grid<T>, predicate: P) -> Grid<u32>
    where
        T: Copy,
        P: Fn(T) -> bool,
    {
        self.aggregate(grid, |cell| u32::from(predicate(cell)))
    }

    /// Sum of neighbor values of every cell
    pub fn sum(&self, grid: &Grid<u8>) -> Grid<u32> {
        self.aggregate(grid, u32::from)
    }
}
