//! Runtime-selected automaton, built from a [`SimulationConfig`].

use crate::bz::BzRule;
use crate::census::Census;
use crate::engine::StepEngine;
use crate::grid::Grid;
use crate::life::ConwayRule;
use automata_core::{AutomatonConfig, BzParams, Error, Result, SimulationConfig};
use tracing::{info, instrument};

#[derive(Debug, Clone)]
pub enum Simulation {
    Life(StepEngine<ConwayRule>),
    Bz(StepEngine<BzRule>),
}

impl Simulation {
    #[instrument(skip(config), fields(automaton = config.automaton.name()))]
    pub fn new(config: &SimulationConfig) -> Result<Self> {
        config.validate()?;
        let simulation = match config.automaton {
            AutomatonConfig::Life(params) => {
                Simulation::Life(StepEngine::life(&config.grid, params)?)
            }
            AutomatonConfig::Bz(params) => Simulation::Bz(StepEngine::bz(&config.grid, params)?),
        };
        info!(
            width = config.grid.width,
            height = config.grid.height,
            wrap = config.grid.wrap,
            "Simulation ready"
        );
        Ok(simulation)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Simulation::Life(_) => "life",
            Simulation::Bz(_) => "bz",
        }
    }

    /// Advance one generation and return the new display frame
    pub fn step(&mut self) -> Grid<u8> {
        match self {
            Simulation::Life(engine) => engine.step(),
            Simulation::Bz(engine) => engine.step(),
        }
    }

    /// Display frame of the current state, without stepping
    pub fn frame(&self) -> Grid<u8> {
        match self {
            Simulation::Life(engine) => engine.frame(),
            Simulation::Bz(engine) => engine.frame(),
        }
    }

    pub fn generation(&self) -> u64 {
        match self {
            Simulation::Life(engine) => engine.generation(),
            Simulation::Bz(engine) => engine.generation(),
        }
    }

    pub fn census(&self) -> Census {
        let frame = self.frame();
        match self {
            Simulation::Life(engine) => Census::life(&frame, engine.rule().species()),
            Simulation::Bz(_) => Census::bz(&frame),
        }
    }

    pub fn verify(&self) -> Result<()> {
        match self {
            Simulation::Life(engine) => engine.verify(),
            Simulation::Bz(engine) => engine.verify(),
        }
    }

    /// Retune a BZ reaction between steps
    pub fn tune(&mut self, params: BzParams) -> Result<()> {
        match self {
            Simulation::Bz(engine) => engine.tune(params),
            Simulation::Life(_) => Err(Error::Configuration(
                "life has no reaction parameters to tune".to_string(),
            )),
        }
    }

    /// Run `generations` steps, logging a census every `log_every` steps
    /// (never when zero). Returns the final frame.
    #[instrument(skip(self), fields(automaton = self.name()))]
    pub fn run(&mut self, generations: u64, log_every: u64) -> Grid<u8> {
        info!("Starting simulation for {} generations", generations);

        for _ in 0..generations {
            self.step();
            let generation = self.generation();
            if log_every > 0 && generation % log_every == 0 {
                info!(
                    generation,
                    active = self.census().active(),
                    census = ?self.census(),
                    "Census snapshot"
                );
            }
        }

        info!(
            generation = self.generation(),
            census = ?self.census(),
            "Simulation complete"
        );
        self.frame()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use automata_core::{GridConfig, LifeParams, BZ_STATE_MAX};
    use proptest::prelude::*;

    fn life_config(width: usize, height: usize, species: usize, wrap: bool, seed: u64) -> SimulationConfig {
        SimulationConfig {
            grid: GridConfig {
                width,
                height,
                wrap,
                seed: Some(seed),
            },
            automaton: AutomatonConfig::Life(LifeParams { species }),
        }
    }

    fn bz_config(width: usize, height: usize, wrap: bool, seed: u64, params: BzParams) -> SimulationConfig {
        SimulationConfig {
            grid: GridConfig {
                width,
                height,
                wrap,
                seed: Some(seed),
            },
            automaton: AutomatonConfig::Bz(params),
        }
    }

    #[test]
    fn test_simulation_from_config() {
        let sim = Simulation::new(&SimulationConfig::life(4)).unwrap();
        assert_eq!(sim.name(), "life");
        assert_eq!(sim.generation(), 0);

        let sim = Simulation::new(&SimulationConfig::bz(BzParams::default())).unwrap();
        assert_eq!(sim.name(), "bz");
        assert_eq!(sim.frame().width(), 100);
    }

    #[test]
    fn test_simulation_rejects_invalid_config() {
        let err = Simulation::new(&SimulationConfig::life(9)).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_run_advances_generations() {
        let mut sim = Simulation::new(&life_config(40, 40, 2, true, 3)).unwrap();
        let frame = sim.run(25, 10);
        assert_eq!(sim.generation(), 25);
        assert_eq!(frame, sim.frame());
        assert!(sim.verify().is_ok());
    }

    #[test]
    fn test_tune_only_for_bz() {
        let mut life = Simulation::new(&SimulationConfig::life(1)).unwrap();
        assert!(life.tune(BzParams::default()).is_err());

        let mut bz = Simulation::new(&bz_config(10, 10, false, 1, BzParams::default())).unwrap();
        assert!(bz.tune(BzParams::new(0.5, 0.5, 10.0)).is_ok());
    }

    #[test]
    fn test_life_keeps_exclusive_occupancy() {
        let mut sim = Simulation::new(&life_config(30, 30, 8, true, 9)).unwrap();
        for _ in 0..15 {
            sim.step();
            let Simulation::Life(engine) = &sim else {
                unreachable!()
            };
            let stack = engine.state();
            for y in 0..stack.height() {
                for x in 0..stack.width() {
                    assert!(stack.occupants(x, y).count() <= 1);
                }
            }
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(24))]

        #[test]
        fn prop_same_seed_same_history(
            seed in any::<u64>(),
            wrap in any::<bool>(),
            species in 1usize..=8,
        ) {
            let config = life_config(24, 24, species, wrap, seed);
            let mut a = Simulation::new(&config).unwrap();
            let mut b = Simulation::new(&config).unwrap();
            for _ in 0..8 {
                prop_assert_eq!(a.step(), b.step());
            }

            let config = bz_config(16, 16, wrap, seed, BzParams::new(2.0, 3.0, 28.0));
            let mut a = Simulation::new(&config).unwrap();
            let mut b = Simulation::new(&config).unwrap();
            for _ in 0..8 {
                prop_assert_eq!(a.step(), b.step());
            }
        }

        #[test]
        fn prop_life_frames_stay_in_range(
            seed in any::<u64>(),
            wrap in any::<bool>(),
            species in 1usize..=8,
        ) {
            let mut sim = Simulation::new(&life_config(20, 20, species, wrap, seed)).unwrap();
            for _ in 0..10 {
                let frame = sim.step();
                prop_assert!(frame.cells().iter().all(|&v| v as usize <= species));
            }
        }

        #[test]
        fn prop_bz_sick_cells_recover(
            seed in any::<u64>(),
            wrap in any::<bool>(),
            k1 in 0.01f64..3.0,
            k2 in 0.01f64..3.0,
            g in 0.0f64..255.0,
        ) {
            let mut sim = Simulation::new(&bz_config(12, 12, wrap, seed, BzParams::new(k1, k2, g))).unwrap();
            for _ in 0..6 {
                let before = sim.frame();
                let after = sim.step();
                for ((_, old), (_, new)) in before.iter().zip(after.iter()) {
                    if old == BZ_STATE_MAX {
                        prop_assert_eq!(new, 0);
                    }
                }
                prop_assert!(sim.verify().is_ok());
            }
        }
    }
}
