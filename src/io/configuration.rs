//! Simulation constants and runtime configuration defaults

use crate::engine::presets::CoordinatePolicy;
use std::time::Duration;

/// Side length of the board when none is given
pub const DEFAULT_GRID_SIZE: usize = 25;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

/// Delay between generations while the simulation runs
pub const DEFAULT_STEP_INTERVAL_MS: u64 = 200;

/// Preset loaded by the command-line front end when none is given
pub const DEFAULT_PRESET: &str = "glider";

/// Fixed seed for reproducible random soups
pub const DEFAULT_SEED: u64 = 42;

// Image output settings
/// Edge length in pixels of one cell in exported images
pub const DEFAULT_CELL_SIZE_PX: u32 = 8;
/// Largest accepted cell edge length
pub const MAX_CELL_SIZE_PX: u32 = 64;
/// RGBA color of live cells
pub const ALIVE_COLOR: [u8; 4] = [32, 32, 32, 255];
/// RGBA color of dead cells
pub const DEAD_COLOR: [u8; 4] = [238, 238, 238, 255];
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 20;
/// Multiplier applied to the delay of the last GIF frame
pub const FINAL_FRAME_HOLD: u32 = 10;
/// Largest pixel count of one exported image (16384 x 16384)
pub const MAX_IMAGE_PIXELS: u64 = 1 << 28;
/// Upper bound on frame slots reserved before recording starts
pub const MAX_PREALLOCATED_FRAMES: usize = 1024;

// Terminal output settings
/// Glyph drawn for a live cell
pub const ALIVE_GLYPH: char = '█';
/// Glyph drawn for a dead cell
pub const DEAD_GLYPH: char = '·';

/// Parameters shared by the session and its scheduler
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Side length of the square grid
    pub size: usize,
    /// Handling of preset coordinates outside the grid
    pub policy: CoordinatePolicy,
    /// Wall-clock delay between generations
    pub step_interval: Duration,
    /// Stop after this many generations
    pub generation_limit: Option<usize>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            policy: CoordinatePolicy::default(),
            step_interval: Duration::from_millis(DEFAULT_STEP_INTERVAL_MS),
            generation_limit: None,
        }
    }
}
