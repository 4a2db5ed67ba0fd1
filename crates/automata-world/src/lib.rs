//! Step engines for grid cellular automata.
//!
//! This crate implements multi-species Game of Life and the
//! Belousov-Zhabotinsky reaction on 2D grids with zero-filled or toroidal
//! edges.

pub mod grid;
pub mod neighbors;
pub mod rule;
pub mod life;
pub mod bz;
pub mod seed;
pub mod engine;
pub mod census;
pub mod simulation;

pub use grid::{Grid, SpeciesStack};
pub use neighbors::NeighborAggregator;
pub use rule::TransitionRule;
pub use life::ConwayRule;
pub use bz::{BzRule, CellClass};
pub use engine::StepEngine;
pub use census::Census;
pub use simulation::Simulation;
