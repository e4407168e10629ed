//! Control state and timing around a single board

/// Running flag, generation counter and edit gating
pub mod control;
/// Fixed-interval stepping loop
pub mod scheduler;

pub use control::Session;
