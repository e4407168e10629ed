//! Dense square grid of cells and single-generation advancement
//!
//! Cells live in a row-major bit vector. Advancing a generation first
//! snapshots neighbor counts of the current buffer, then writes the rule's
//! result into a second buffer and swaps the two, so the committed state
//! only ever changes by whole generations.

use bitvec::slice::BitSlice;
use bitvec::vec::BitVec;
use log::{debug, warn};
use rand::Rng;

use crate::engine::presets::{CoordinatePolicy, PresetReport, find_preset, to_grid_position};
use crate::engine::rules::{apply_rule, count_live_neighbors, neighbor_counts};
use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{LifeError, Result, invalid_parameter};

/// Fixed-size Game of Life board
///
/// Coordinates are `(x, y)` with `x` selecting the row and `y` the column,
/// both in `[0, size)`.
#[derive(Debug, Clone)]
pub struct GridEngine {
    size: usize,
    cells: BitVec,
    /// Back buffer for the generation under construction
    next: BitVec,
}

impl PartialEq for GridEngine {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.cells == other.cells
    }
}

impl Eq for GridEngine {}

impl GridEngine {
    /// Create a grid with every cell dead
    ///
    /// # Errors
    ///
    /// Returns `InvalidSize` if `size` is zero or larger than `MAX_GRID_DIMENSION`
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 || size > MAX_GRID_DIMENSION {
            return Err(LifeError::InvalidSize {
                size,
                max: MAX_GRID_DIMENSION,
            });
        }

        Ok(Self {
            size,
            cells: BitVec::repeat(false, size * size),
            next: BitVec::repeat(false, size * size),
        })
    }

    /// Side length of the grid
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Row-major view of the current generation
    pub fn cells(&self) -> &BitSlice {
        &self.cells
    }

    /// Iterate over the rows of the current generation
    pub fn rows(&self) -> impl Iterator<Item = &BitSlice> + '_ {
        self.cells.chunks_exact(self.size)
    }

    fn index(&self, x: usize, y: usize) -> Result<usize> {
        if x < self.size && y < self.size {
            Ok(x * self.size + y)
        } else {
            Err(LifeError::OutOfBounds {
                x,
                y,
                size: self.size,
            })
        }
    }

    /// Read the state of one cell
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if either coordinate is not below `size`
    pub fn is_alive(&self, x: usize, y: usize) -> Result<bool> {
        let index = self.index(x, y)?;
        Ok(self.cells.get(index).as_deref() == Some(&true))
    }

    /// Flip one cell between alive and dead
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if either coordinate is not below `size`
    pub fn toggle(&mut self, x: usize, y: usize) -> Result<()> {
        let index = self.index(x, y)?;
        if let Some(mut cell) = self.cells.get_mut(index) {
            *cell = !*cell;
        }
        Ok(())
    }

    /// Number of live neighbors of one cell, ignoring off-grid positions
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if either coordinate is not below `size`
    pub fn neighbor_count(&self, x: usize, y: usize) -> Result<u8> {
        self.index(x, y)?;
        Ok(count_live_neighbors(&self.cells, self.size, x, y))
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.count_ones()
    }

    /// Coordinates of live cells in row-major order
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let size = self.size;
        self.cells
            .iter_ones()
            .map(move |index| (index / size, index % size))
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Replace the grid with the given live cells
    ///
    /// The grid is cleared first, so the result holds exactly the in-range
    /// coordinates of `coords`. Duplicates are harmless.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPresetCoordinate` under [`CoordinatePolicy::Strict`]
    /// if any coordinate lies off the grid; the grid is left unchanged
    pub fn apply_preset(
        &mut self,
        coords: &[[i32; 2]],
        policy: CoordinatePolicy,
    ) -> Result<PresetReport> {
        let mut positions = Vec::with_capacity(coords.len());
        let mut report = PresetReport::default();

        for &coord in coords {
            match to_grid_position(coord, self.size) {
                Some(position) => positions.push(position),
                None if policy == CoordinatePolicy::Strict => {
                    return Err(LifeError::InvalidPresetCoordinate {
                        x: coord[0],
                        y: coord[1],
                        size: self.size,
                    });
                }
                None => {
                    warn!(
                        "Skipping preset coordinate ({}, {}) outside the {}x{} grid",
                        coord[0], coord[1], self.size, self.size
                    );
                    report.skipped.push(coord);
                }
            }
        }

        self.clear();
        for (x, y) in positions {
            if let Some(mut cell) = self.cells.get_mut(x * self.size + y) {
                if !*cell {
                    report.applied += 1;
                }
                *cell = true;
            }
        }

        Ok(report)
    }

    /// Replace the grid with a preset from the registry
    ///
    /// # Errors
    ///
    /// Returns `UnknownPreset` if the name is not registered, or the errors of
    /// [`GridEngine::apply_preset`]. The grid is unchanged on error.
    pub fn apply_named_preset(
        &mut self,
        name: &str,
        policy: CoordinatePolicy,
    ) -> Result<PresetReport> {
        let preset = find_preset(name)?;
        let report = self.apply_preset(preset.cells, policy)?;
        debug!(
            "Applied preset '{name}': {} cells placed, {} skipped",
            report.applied,
            report.skipped.len()
        );
        Ok(report)
    }

    /// Fill the grid with a random soup
    ///
    /// Each cell is alive independently with probability `density`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `density` is not within `[0, 1]`
    pub fn randomize<R: Rng>(&mut self, density: f64, rng: &mut R) -> Result<()> {
        if !(0.0..=1.0).contains(&density) {
            return Err(invalid_parameter(
                "density",
                &density,
                &"must be within [0, 1]",
            ));
        }

        for mut cell in self.cells.iter_mut() {
            *cell = rng.random_bool(density);
        }
        Ok(())
    }

    /// Advance the grid by one generation
    pub fn step(&mut self) {
        let counts = neighbor_counts(&self.cells, self.size);
        apply_rule(&self.cells, &counts, &mut self.next);
        std::mem::swap(&mut self.cells, &mut self.next);
    }
}
