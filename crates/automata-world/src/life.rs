//! Multi-species Game of Life.
//!
//! Every species evolves independently under B3/S23 on its own layer.
//! Afterwards contested cells go to the lowest-indexed species alive there.

use crate::grid::{Grid, SpeciesStack};
use crate::neighbors::NeighborAggregator;
use crate::rule::{check_range, TransitionRule};
use automata_core::{Error, LifeParams, Result};

/// Neighbor count at which a dead cell is born
pub const BIRTH: u32 = 3;

/// Neighbor count at which a live cell survives, besides [`BIRTH`]
pub const SURVIVAL: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConwayRule {
    species: usize,
}

impl ConwayRule {
    pub fn new(params: LifeParams) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            species: params.species,
        })
    }

    pub fn species(&self) -> usize {
        self.species
    }

    /// One B3/S23 generation of a single layer
    pub fn evolve_layer(layer: &Grid<bool>, neighbors: &NeighborAggregator) -> Grid<bool> {
        let counts = neighbors.count(layer);
        Grid::from_fn(layer.width(), layer.height(), |pos| {
            let (x, y) = (pos.x as usize, pos.y as usize);
            let count = counts.get(x, y);
            count == BIRTH || (layer.get(x, y) && count == SURVIVAL)
        })
    }

    /// Clear every species but the lowest-indexed one alive in each cell
    pub fn resolve_conflicts(stack: &mut SpeciesStack) {
        if stack.species() < 2 {
            return;
        }

        for y in 0..stack.height() {
            for x in 0..stack.width() {
                let mut claimed = false;
                for layer in stack.layers_mut() {
                    if layer.get(x, y) {
                        if claimed {
                            layer.set(x, y, false);
                        }
                        claimed = true;
                    }
                }
            }
        }
    }
}

impl TransitionRule for ConwayRule {
    type State = SpeciesStack;

    fn name(&self) -> &'static str {
        "life"
    }

    fn state_max(&self) -> u8 {
        self.species as u8
    }

    fn next_state(&self, state: &SpeciesStack, neighbors: &NeighborAggregator) -> SpeciesStack {
        let mut next = state.map_layers(|layer| Self::evolve_layer(layer, neighbors));
        Self::resolve_conflicts(&mut next);
        next
    }

    fn render(&self, state: &SpeciesStack) -> Grid<u8> {
        state.merge()
    }

    fn check_state(&self, state: &SpeciesStack) -> Result<()> {
        if state.species() != self.species {
            return Err(Error::Shape(format!(
                "expected {} species layers, got {}",
                self.species,
                state.species()
            )));
        }
        check_range(&self.render(state), self.state_max())
    }
}
