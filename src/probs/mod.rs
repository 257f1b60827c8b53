//! Benchmark problem implementations.
//!
//! The connectivity (door-maze) family is the canonical instantiation of
//! the [`Problem`] contract: deterministic border-door placement,
//! breadth-first path measurement, region counting, and Hamming-distance
//! diversity. [`default_registry`] publishes its named variants.
//!
//! [`Problem`]: crate::problem::Problem

mod connectivity;
mod grid;

pub use connectivity::{
    place_doors, ConnectivityInfo, DoorMazeConfig, DoorMazeProblem, Tile,
};
pub use grid::{count_regions, distance_map};

use crate::problem::Registry;
use crate::space::FreezeOptions;

/// Registers the built-in door-maze variants.
///
/// - `doormaze-v0`: 14x14 grid, default target and seed
/// - `doormaze-large-v0`: 28x28 grid
/// - `doormaze-frozen-v0`: 14x14 grid with 10% of cells frozen at random
pub fn default_registry() -> Registry<DoorMazeProblem> {
    let mut registry = Registry::new();
    registry.register("doormaze-v0", || {
        DoorMazeProblem::new(DoorMazeConfig::default())
    });
    registry.register("doormaze-large-v0", || {
        DoorMazeProblem::new(DoorMazeConfig::default().with_size(28, 28))
    });
    registry.register("doormaze-frozen-v0", || {
        DoorMazeProblem::new(DoorMazeConfig::default().with_freeze(
            FreezeOptions::RandomProbability {
                probability: 0.1,
                seed: Some(42),
            },
        ))
    });
    registry
}
