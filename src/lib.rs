//! Conway's Game of Life on a fixed-size square grid
//!
//! The engine keeps a dense boolean board with hard edges and advances it
//! one whole generation at a time. A caller-owned session adds the
//! running/stopped state, and a scheduler steps it on a timer for the
//! terminal front end.

#![forbid(unsafe_code)]

/// Grid state, life rule and presets
pub mod engine;
/// Input/output operations and error handling
pub mod io;
/// Session control and timer-driven stepping
pub mod session;

pub use engine::GridEngine;
pub use io::error::{LifeError, Result};
pub use session::Session;
