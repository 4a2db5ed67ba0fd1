//! Initial states for the automata.

use crate::grid::{Grid, SpeciesStack};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::f64::consts::PI;

/// Side length of the square cluster planted for each Life species
pub const CLUSTER_SIZE: usize = 10;

/// Probability that a cluster cell starts alive
pub const CLUSTER_DENSITY: f64 = 0.5;

/// Deterministic RNG for a seed, or one drawn from OS entropy
pub fn rng_for(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Grid with every cell uniform in `0..=255`
pub fn random_bz_grid(width: usize, height: usize, rng: &mut ChaCha8Rng) -> Grid<u8> {
    Grid::from_fn(width, height, |_| rng.gen::<u8>())
}

/// Top-left (row, column) of each species cluster.
///
/// Clusters sit on a circle around the grid center, starting at the top
/// left and going counter-clockwise in steps of `2π / species`. The radius is zero
/// for a single species and `(species + 3) / 4` cluster widths otherwise.
pub fn cluster_origins(species: usize, width: usize, height: usize) -> Vec<(i64, i64)> {
    let radius = if species == 1 {
        0.0
    } else {
        ((species + 3) / 4) as f64
    };
    let start = -3.0 * PI / 4.0;
    let size = CLUSTER_SIZE as f64;

    (0..species)
        .map(|i| {
            let angle = 2.0 * PI * i as f64 / species as f64 + start;
            let row = (radius * angle.cos() + height as f64 / (2.0 * size) - 0.5) * size;
            let col = (radius * angle.sin() + width as f64 / (2.0 * size) - 0.5) * size;
            (row.round() as i64, col.round() as i64)
        })
        .collect()
}

/// One random cluster per species, clipped to the grid.
/// Overlapping clusters are not resolved here; [`StepEngine::life`] clears
/// them before the first generation.
///
/// [`StepEngine::life`]: crate::engine::StepEngine::life
pub fn clustered_species(
    species: usize,
    width: usize,
    height: usize,
    rng: &mut ChaCha8Rng,
) -> SpeciesStack {
    let mut stack = SpeciesStack::new(species, width, height);

    for (k, (row, col)) in cluster_origins(species, width, height).into_iter().enumerate() {
        let layer = stack.layer_mut(k + 1);
        for dy in 0..CLUSTER_SIZE as i64 {
            for dx in 0..CLUSTER_SIZE as i64 {
                // Draw for every cluster cell so clipping does not shift the stream
                let alive = rng.gen::<f64>() > CLUSTER_DENSITY;
                let (y, x) = (row + dy, col + dx);
                if alive && (0..height as i64).contains(&y) && (0..width as i64).contains(&x) {
                    layer.set(x as usize, y as usize, true);
                }
            }
        }
    }

    stack
}
