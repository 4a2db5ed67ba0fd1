//! Generation-by-generation driver for a transition rule.

use crate::bz::BzRule;
use crate::grid::{Grid, SpeciesStack};
use crate::life::ConwayRule;
use crate::neighbors::NeighborAggregator;
use crate::rule::TransitionRule;
use crate::seed;
use automata_core::{Boundary, BzParams, Error, GridConfig, LifeParams, Result};
use tracing::{debug, error, instrument, trace};

/// Owns the current state of one automaton and advances it one generation
/// per [`StepEngine::step`].
#[derive(Debug, Clone)]
pub struct StepEngine<R: TransitionRule> {
    rule: R,
    neighbors: NeighborAggregator,
    state: R::State,
    generation: u64,
}

impl<R: TransitionRule> StepEngine<R> {
    /// Build an engine around an explicit initial state
    pub fn with_state(rule: R, boundary: Boundary, state: R::State) -> Result<Self> {
        rule.check_state(&state)?;
        let frame = rule.render(&state);
        if frame.width() == 0 || frame.height() == 0 {
            return Err(Error::Configuration(format!(
                "grid dimensions must be positive, got {}x{}",
                frame.width(),
                frame.height()
            )));
        }

        debug!(
            rule = rule.name(),
            width = frame.width(),
            height = frame.height(),
            ?boundary,
            "Engine created"
        );

        Ok(Self {
            rule,
            neighbors: NeighborAggregator::new(boundary),
            state,
            generation: 0,
        })
    }

    /// Advance one generation and return the new display frame
    pub fn step(&mut self) -> Grid<u8> {
        let next = self.rule.next_state(&self.state, &self.neighbors);

        if cfg!(debug_assertions) {
            if let Err(e) = self.rule.check_state(&next) {
                error!(rule = self.rule.name(), generation = self.generation, "{}", e);
                panic!("{} rule produced an invalid state: {}", self.rule.name(), e);
            }
        }

        self.state = next;
        self.generation += 1;
        trace!(rule = self.rule.name(), generation = self.generation, "Step committed");

        self.frame()
    }

    /// Advance `generations` steps and return the last frame
    pub fn advance(&mut self, generations: u64) -> Grid<u8> {
        for _ in 0..generations {
            self.step();
        }
        self.frame()
    }

    /// Display frame of the current state, without stepping
    pub fn frame(&self) -> Grid<u8> {
        self.rule.render(&self.state)
    }

    /// Read-only view of the current state
    pub fn state(&self) -> &R::State {
        &self.state
    }

    pub fn rule(&self) -> &R {
        &self.rule
    }

    pub fn boundary(&self) -> Boundary {
        self.neighbors.boundary()
    }

    /// Number of committed steps
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Re-check the current state against the rule's invariants
    pub fn verify(&self) -> Result<()> {
        self.rule.check_state(&self.state)
    }
}

impl StepEngine<ConwayRule> {
    /// Multi-species Life seeded with one random cluster per species
    #[instrument(skip(grid), fields(width = grid.width, height = grid.height))]
    pub fn life(grid: &GridConfig, params: LifeParams) -> Result<Self> {
        grid.validate()?;
        let rule = ConwayRule::new(params)?;

        let mut rng = seed::rng_for(grid.seed);
        let mut stack = seed::clustered_species(params.species, grid.width, grid.height, &mut rng);
        // Cells claimed by more than one cluster go to the lowest species
        ConwayRule::resolve_conflicts(&mut stack);
        debug!(seed = ?grid.seed, "Seeded species clusters");

        Self::with_state(rule, grid.boundary(), stack)
    }

    /// Life from a merged frame (0 empty, k owned by species k)
    pub fn life_from_frame(frame: &Grid<u8>, params: LifeParams, boundary: Boundary) -> Result<Self> {
        let rule = ConwayRule::new(params)?;
        let stack = SpeciesStack::from_frame(frame, params.species)?;
        Self::with_state(rule, boundary, stack)
    }
}

impl StepEngine<BzRule> {
    /// BZ reaction seeded with uniform random cells
    #[instrument(skip(grid), fields(width = grid.width, height = grid.height))]
    pub fn bz(grid: &GridConfig, params: BzParams) -> Result<Self> {
        grid.validate()?;
        let rule = BzRule::new(params)?;

        let mut rng = seed::rng_for(grid.seed);
        let state = seed::random_bz_grid(grid.width, grid.height, &mut rng);
        debug!(seed = ?grid.seed, "Seeded random reaction grid");

        Self::with_state(rule, grid.boundary(), state)
    }

    /// Change the reaction rates between steps
    pub fn tune(&mut self, params: BzParams) -> Result<()> {
        self.rule.set_params(params)?;
        debug!(k1 = params.k1, k2 = params.k2, g = params.g, "Reaction retuned");
        Ok(())
    }
}
