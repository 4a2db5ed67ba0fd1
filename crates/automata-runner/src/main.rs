//! Headless runner for the cellular automata.

mod telemetry;

use anyhow::{Context, Result};
use automata_core::{BzParams, GridConfig, SimulationConfig};
use automata_world::Simulation;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "automata-runner", about = "Run a cellular automaton without a display")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Number of generations to advance
    #[arg(long, default_value_t = 100, global = true)]
    generations: u64,

    /// Log a census every N generations (0 disables)
    #[arg(long, default_value_t = 10, global = true)]
    log_every: u64,

    /// Print the final frame as JSON on stdout
    #[arg(long, global = true)]
    dump: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Conway's Game of Life with competing species
    Conway {
        #[command(flatten)]
        grid: GridArgs,

        /// Number of species (1 to 8)
        species: usize,
    },
    /// Belousov-Zhabotinsky reaction
    Bz {
        #[command(flatten)]
        grid: GridArgs,

        /// Infection weight of infected neighbors
        k1: f64,
        /// Infection weight of sick neighbors
        k2: f64,
        /// Growth bias of infected cells
        g: f64,
    },
    /// Load a JSON simulation config
    FromConfig {
        path: PathBuf,
    },
}

#[derive(Args, Debug)]
struct GridArgs {
    /// Grid width (defaults to 50 for conway, 100 for bz)
    #[arg(long)]
    width: Option<usize>,

    /// Grid height (defaults to 50 for conway, 100 for bz)
    #[arg(long)]
    height: Option<usize>,

    /// Seed for the initial state
    #[arg(long)]
    seed: Option<u64>,

    /// Toroidal edges instead of zero fill
    #[arg(long)]
    wrap: bool,
}

impl GridArgs {
    /// Apply the flags on top of an automaton's default grid
    fn over(self, defaults: GridConfig) -> GridConfig {
        GridConfig {
            width: self.width.unwrap_or(defaults.width),
            height: self.height.unwrap_or(defaults.height),
            wrap: self.wrap,
            seed: self.seed,
        }
    }
}

impl Command {
    fn into_config(self) -> Result<SimulationConfig> {
        let config = match self {
            Command::Conway { grid, species } => {
                let defaults = SimulationConfig::life(species);
                SimulationConfig {
                    grid: grid.over(defaults.grid),
                    ..defaults
                }
            }
            Command::Bz { grid, k1, k2, g } => {
                let defaults = SimulationConfig::bz(BzParams::new(k1, k2, g));
                SimulationConfig {
                    grid: grid.over(defaults.grid),
                    ..defaults
                }
            }
            Command::FromConfig { path } => {
                let json = std::fs::read_to_string(&path)
                    .with_context(|| format!("reading {}", path.display()))?;
                SimulationConfig::from_json(&json)?
            }
        };
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    telemetry::init_telemetry(cli.json_logs)?;

    let config = cli.command.into_config()?;
    info!(
        automaton = config.automaton.name(),
        width = config.grid.width,
        height = config.grid.height,
        "Starting automata runner"
    );

    let mut simulation = Simulation::new(&config).context("invalid simulation config")?;
    let frame = simulation.run(cli.generations, cli.log_every);

    if cli.dump {
        println!("{}", serde_json::to_string(&frame)?);
    }

    telemetry::shutdown_telemetry();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use automata_core::{AutomatonConfig, LifeParams};

    #[test]
    fn test_cli_parses_conway() {
        let cli = Cli::try_parse_from([
            "automata-runner",
            "conway",
            "--width",
            "40",
            "--wrap",
            "--seed",
            "3",
            "4",
            "--generations",
            "5",
        ])
        .unwrap();
        assert_eq!(cli.generations, 5);

        let config = cli.command.into_config().unwrap();
        assert_eq!(config.grid.width, 40);
        assert_eq!(config.grid.height, 50);
        assert!(config.grid.wrap);
        assert_eq!(config.grid.seed, Some(3));
        assert_eq!(config.automaton, AutomatonConfig::Life(LifeParams { species: 4 }));
    }

    #[test]
    fn test_cli_parses_bz() {
        let cli = Cli::try_parse_from(["automata-runner", "bz", "2", "3", "28", "--dump"]).unwrap();
        assert!(cli.dump);

        let config = cli.command.into_config().unwrap();
        assert_eq!(config.automaton, AutomatonConfig::Bz(BzParams::new(2.0, 3.0, 28.0)));
        assert!(!config.grid.wrap);
    }

    #[test]
    fn test_cli_grid_defaults_match_config_defaults() {
        let cli = Cli::try_parse_from(["automata-runner", "conway", "2"]).unwrap();
        let config = cli.command.into_config().unwrap();
        assert_eq!(config, SimulationConfig::life(2));
        assert_eq!((config.grid.width, config.grid.height), (50, 50));

        let cli = Cli::try_parse_from(["automata-runner", "bz", "1", "1", "1"]).unwrap();
        let config = cli.command.into_config().unwrap();
        assert_eq!(config, SimulationConfig::bz(BzParams::new(1.0, 1.0, 1.0)));
        assert_eq!((config.grid.width, config.grid.height), (100, 100));
    }

    #[test]
    fn test_cli_requires_species() {
        assert!(Cli::try_parse_from(["automata-runner", "conway"]).is_err());
    }

    #[test]
    fn test_missing_config_file() {
        let command = Command::FromConfig {
            path: PathBuf::from("/nonexistent/automata.json"),
        };
        assert!(command.into_config().is_err());
    }
}
