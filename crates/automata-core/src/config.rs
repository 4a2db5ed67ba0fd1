//! Configuration types for the automata.

use crate::error::{Error, Result};
use crate::types::{Boundary, MAX_SPECIES};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Range offered to interactive controls for `k1` and `k2`
pub const K_RANGE: RangeInclusive<f64> = 0.01..=3.0;

/// Range offered to interactive controls for `g`
pub const G_RANGE: RangeInclusive<f64> = 1.0..=255.0;

/// Grid geometry shared by every automaton
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
    /// Toroidal boundary instead of zero fill
    pub wrap: bool,
    /// Seed for the initial state; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl GridConfig {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    pub fn boundary(&self) -> Boundary {
        Boundary::from_wrap(self.wrap)
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::Configuration(format!(
                "grid dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if i32::try_from(self.width).is_err() || i32::try_from(self.height).is_err() {
            return Err(Error::Configuration(format!(
                "grid dimensions {}x{} are too large",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
            wrap: false,
            seed: None,
        }
    }
}

/// Multi-species Game of Life parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeParams {
    /// Number of competing species (1 to 8)
    pub species: usize,
}

impl LifeParams {
    pub fn validate(&self) -> Result<()> {
        if self.species == 0 || self.species > MAX_SPECIES {
            return Err(Error::Configuration(format!(
                "species must be between 1 and {}, got {}",
                MAX_SPECIES, self.species
            )));
        }
        Ok(())
    }
}

impl Default for LifeParams {
    fn default() -> Self {
        Self { species: 1 }
    }
}

/// Belousov-Zhabotinsky reaction parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BzParams {
    /// Infection weight of infected neighbors (smaller infects faster)
    pub k1: f64,
    /// Infection weight of sick neighbors (smaller infects faster)
    pub k2: f64,
    /// Growth bias added to infected cells each step
    pub g: f64,
}

impl BzParams {
    pub fn new(k1: f64, k2: f64, g: f64) -> Self {
        Self { k1, k2, g }
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("k1", self.k1), ("k2", self.k2)] {
            // Also rejects NaN
            if !(value > 0.0 && value.is_finite()) {
                return Err(Error::Configuration(format!(
                    "{} must be a positive finite number, got {}",
                    name, value
                )));
            }
        }
        if !self.g.is_finite() {
            return Err(Error::Configuration(format!(
                "g must be finite, got {}",
                self.g
            )));
        }
        Ok(())
    }
}

impl Default for BzParams {
    fn default() -> Self {
        Self {
            k1: 1.0,
            k2: 1.0,
            g: 1.0,
        }
    }
}

/// Which automaton to run, with its rule parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AutomatonConfig {
    Life(LifeParams),
    Bz(BzParams),
}

impl AutomatonConfig {
    pub fn name(&self) -> &'static str {
        match self {
            AutomatonConfig::Life(_) => "life",
            AutomatonConfig::Bz(_) => "bz",
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            AutomatonConfig::Life(params) => params.validate(),
            AutomatonConfig::Bz(params) => params.validate(),
        }
    }
}

/// Full configuration of one simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Grid geometry, boundary and seed
    pub grid: GridConfig,
    /// Automaton selection
    pub automaton: AutomatonConfig,
}

impl SimulationConfig {
    /// Game of Life on a 50x50 grid
    pub fn life(species: usize) -> Self {
        Self {
            grid: GridConfig::new(50, 50),
            automaton: AutomatonConfig::Life(LifeParams { species }),
        }
    }

    /// BZ reaction on a 100x100 grid
    pub fn bz(params: BzParams) -> Self {
        Self {
            grid: GridConfig::new(100, 100),
            automaton: AutomatonConfig::Bz(params),
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.grid.validate()?;
        self.automaton.validate()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: SimulationConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::life(LifeParams::default().species)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configs() {
        let config = SimulationConfig::default();
        assert_eq!(config.grid.width, 50);
        assert_eq!(config.grid.height, 50);
        assert!(!config.grid.wrap);
        assert_eq!(config.automaton, AutomatonConfig::Life(LifeParams { species: 1 }));
        assert!(config.validate().is_ok());

        let bz = SimulationConfig::bz(BzParams::default());
        assert_eq!(bz.grid.width, 100);
        assert_eq!(bz.automaton.name(), "bz");
        assert!(bz.validate().is_ok());
    }

    #[test]
    fn test_species_range() {
        assert!(LifeParams { species: 0 }.validate().is_err());
        assert!(LifeParams { species: 1 }.validate().is_ok());
        assert!(LifeParams { species: 8 }.validate().is_ok());

        let err = LifeParams { species: 9 }.validate().unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_grid_dimensions() {
        assert!(GridConfig::new(0, 10).validate().is_err());
        assert!(GridConfig::new(10, 0).validate().is_err());
        assert!(GridConfig::new(1, 1).validate().is_ok());
    }

    #[test]
    fn test_bz_rates_must_be_positive() {
        assert!(BzParams::new(0.0, 1.0, 1.0).validate().is_err());
        assert!(BzParams::new(1.0, -2.0, 1.0).validate().is_err());
        assert!(BzParams::new(f64::NAN, 1.0, 1.0).validate().is_err());
        assert!(BzParams::new(1.0, f64::INFINITY, 1.0).validate().is_err());
        assert!(BzParams::new(1.0, 1.0, f64::NAN).validate().is_err());
        assert!(BzParams::new(0.01, 3.0, 0.0).validate().is_ok());
    }

    #[test]
    fn test_tuning_ranges_contain_defaults() {
        let params = BzParams::default();
        assert!(K_RANGE.contains(&params.k1));
        assert!(K_RANGE.contains(&params.k2));
        assert!(G_RANGE.contains(&params.g));
    }

    #[test]
    fn test_config_json_roundtrip() {
        let mut config = SimulationConfig::bz(BzParams::new(2.0, 3.0, 28.0));
        config.grid.wrap = true;
        config.grid.seed = Some(7);

        let json = config.to_json().unwrap();
        assert!(json.contains("\"kind\": \"bz\""));
        let parsed = SimulationConfig::from_json(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_from_json_rejects_invalid() {
        let json = r#"{
            "grid": {"width": 10, "height": 10, "wrap": false, "seed": null},
            "automaton": {"kind": "life", "species": 12}
        }"#;
        let err = SimulationConfig::from_json(json).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));

        let err = SimulationConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }
}
