//! Named starting configurations and the policy for placing them

use crate::io::error::{LifeError, Result};

/// A named, immutable list of cells to bring alive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    /// Name shown in preset selectors
    pub name: &'static str,
    /// Live cells as `[x, y]`, laid out for a 25x25 board
    pub cells: &'static [[i32; 2]],
}

impl Preset {
    /// Number of coordinates in the preset, duplicates included
    pub const fn len(&self) -> usize {
        self.cells.len()
    }

    /// Test whether the preset has no live cells
    pub const fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Check that every coordinate lies on a `size × size` grid
    pub fn fits(&self, size: usize) -> bool {
        self.cells
            .iter()
            .all(|&[x, y]| coordinate_in_bounds(x, size) && coordinate_in_bounds(y, size))
    }
}

/// Handling of preset coordinates that fall outside the grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CoordinatePolicy {
    /// Place the in-range cells and report the rest
    #[default]
    Skip,
    /// Reject the whole preset and leave the grid untouched
    Strict,
}

/// Outcome of applying a preset
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresetReport {
    /// Distinct cells set alive; duplicate coordinates count once
    pub applied: usize,
    /// Coordinates dropped because they fell outside the grid
    pub skipped: Vec<[i32; 2]>,
}

impl PresetReport {
    /// True when nothing had to be skipped
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Check a preset coordinate against one grid axis
pub fn coordinate_in_bounds(value: i32, size: usize) -> bool {
    usize::try_from(value).is_ok_and(|v| v < size)
}

/// Convert a preset coordinate to grid indices when it lies on the grid
pub fn to_grid_position([x, y]: [i32; 2], size: usize) -> Option<(usize, usize)> {
    let row = usize::try_from(x).ok().filter(|&r| r < size)?;
    let col = usize::try_from(y).ok().filter(|&c| c < size)?;
    Some((row, col))
}

/// No live cells
pub const EMPTY: Preset = Preset {
    name: "empty",
    cells: &[],
};

/// Five-cell spaceship moving one cell diagonally every four generations
pub const GLIDER: Preset = Preset {
    name: "glider",
    cells: &[[9, 12], [10, 10], [10, 12], [11, 11], [11, 12]],
};

/// Three cells in a row, period-2 oscillator
pub const BLINKER: Preset = Preset {
    name: "blinker",
    cells: &[[12, 11], [12, 12], [12, 13]],
};

/// 48-cell period-3 oscillator centered on a 25x25 board
pub const PULSAR: Preset = Preset {
    name: "pulsar",
    cells: &[
        [6, 8],
        [6, 9],
        [6, 10],
        [6, 14],
        [6, 15],
        [6, 16],
        [8, 6],
        [8, 11],
        [8, 13],
        [8, 18],
        [9, 6],
        [9, 11],
        [9, 13],
        [9, 18],
        [10, 6],
        [10, 11],
        [10, 13],
        [10, 18],
        [11, 8],
        [11, 9],
        [11, 10],
        [11, 14],
        [11, 15],
        [11, 16],
        [13, 8],
        [13, 9],
        [13, 10],
        [13, 14],
        [13, 15],
        [13, 16],
        [14, 6],
        [14, 11],
        [14, 13],
        [14, 18],
        [15, 6],
        [15, 11],
        [15, 13],
        [15, 18],
        [16, 6],
        [16, 11],
        [16, 13],
        [16, 18],
        [18, 8],
        [18, 9],
        [18, 10],
        [18, 14],
        [18, 15],
        [18, 16],
    ],
};

/// Every registered preset, in menu order
pub static PRESETS: [Preset; 4] = [EMPTY, GLIDER, BLINKER, PULSAR];

/// Names of the registered presets, in menu order
pub fn preset_names() -> impl Iterator<Item = &'static str> {
    PRESETS.iter().map(|preset| preset.name)
}

/// Look up a preset by exact name
///
/// # Errors
///
/// Returns `UnknownPreset` if no preset has the given name
pub fn find_preset(name: &str) -> Result<&'static Preset> {
    PRESETS
        .iter()
        .find(|preset| preset.name == name)
        .ok_or_else(|| LifeError::UnknownPreset {
            name: name.to_string(),
        })
}
