//! Simulation core: the grid, the life rule and the preset registry

/// Dense fixed-size grid and generation advancement
pub mod grid;
/// Named starting patterns and coordinate placement policy
pub mod presets;
/// Neighbor counting and the B3/S23 transition rule
pub mod rules;

pub use grid::GridEngine;
