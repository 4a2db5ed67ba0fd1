//! Population statistics of a display frame.

use crate::bz::CellClass;
use crate::grid::Grid;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Census {
    Life {
        /// Live cells per species; index 0 is species 1
        population: Vec<usize>,
        empty: usize,
    },
    Bz {
        healthy: usize,
        infected: usize,
        sick: usize,
        /// Mean cell value
        mean: f64,
    },
}

impl Census {
    pub fn life(frame: &Grid<u8>, species: usize) -> Self {
        let mut population = vec![0; species];
        let mut empty = 0;
        for &value in frame.cells() {
            match value as usize {
                0 => empty += 1,
                k if k <= species => population[k - 1] += 1,
                _ => {}
            }
        }
        Census::Life { population, empty }
    }

    pub fn bz(frame: &Grid<u8>) -> Self {
        let (mut healthy, mut infected, mut sick) = (0, 0, 0);
        let mut total = 0u64;
        for &value in frame.cells() {
            match CellClass::of(value) {
                CellClass::Healthy => healthy += 1,
                CellClass::Infected => infected += 1,
                CellClass::Sick => sick += 1,
            }
            total += value as u64;
        }
        let cells = frame.cells().len();
        let mean = if cells > 0 {
            total as f64 / cells as f64
        } else {
            0.0
        };
        Census::Bz {
            healthy,
            infected,
            sick,
            mean,
        }
    }

    /// Live cells of 1-indexed species `k`; zero for BZ or unknown species
    pub fn population(&self, k: usize) -> usize {
        match self {
            Census::Life { population, .. } => {
                k.checked_sub(1).and_then(|i| population.get(i)).copied().unwrap_or(0)
            }
            Census::Bz { .. } => 0,
        }
    }

    /// Cells that are not empty / healthy
    pub fn active(&self) -> usize {
        match self {
            Census::Life { population, .. } => population.iter().sum(),
            Census::Bz { infected, sick, .. } => infected + sick,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_life_census() {
        let frame = Grid::from_rows(vec![vec![0u8, 1, 2], vec![2, 2, 0]]).unwrap();
        let census = Census::life(&frame, 3);

        assert_eq!(
            census,
            Census::Life {
                population: vec![1, 3, 0],
                empty: 2
            }
        );
        assert_eq!(census.population(2), 3);
        assert_eq!(census.population(0), 0);
        assert_eq!(census.population(9), 0);
        assert_eq!(census.active(), 4);
    }

    #[test]
    fn test_bz_census() {
        let frame = Grid::from_rows(vec![vec![0u8, 255], vec![100, 45]]).unwrap();
        match Census::bz(&frame) {
            Census::Bz {
                healthy,
                infected,
                sick,
                mean,
            } => {
                assert_eq!((healthy, infected, sick), (1, 2, 1));
                assert_eq!(mean, 100.0);
            }
            other => panic!("unexpected census {:?}", other),
        }
        assert_eq!(Census::bz(&frame).active(), 3);
    }

    #[test]
    fn test_census_serializes_with_kind() {
        let frame = Grid::from_rows(vec![vec![0u8, 1]]).unwrap();
        let json = serde_json::to_string(&Census::life(&frame, 1)).unwrap();
        assert!(json.contains("\"kind\":\"life\""));
    }
}
