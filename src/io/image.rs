//! Raster rendering of a board and PNG export

use bitvec::slice::BitSlice;
use image::{Rgba, RgbaImage};
use std::path::Path;

use crate::engine::grid::GridEngine;
use crate::io::configuration::{ALIVE_COLOR, DEAD_COLOR, MAX_CELL_SIZE_PX, MAX_IMAGE_PIXELS};
use crate::io::error::{LifeError, Result, invalid_parameter};

/// Colors used for live and dead cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// RGBA color of live cells
    pub alive: [u8; 4],
    /// RGBA color of dead cells
    pub dead: [u8; 4],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            alive: ALIVE_COLOR,
            dead: DEAD_COLOR,
        }
    }
}

/// Validate a cell edge length and compute the image side for a board
///
/// # Errors
///
/// Returns `InvalidParameter` if `cell_size` is zero, above
/// `MAX_CELL_SIZE_PX`, or the image would exceed `MAX_IMAGE_PIXELS`
pub fn image_side(size: usize, cell_size: u32) -> Result<u32> {
    if cell_size == 0 || cell_size > MAX_CELL_SIZE_PX {
        return Err(invalid_parameter(
            "cell_size",
            &cell_size,
            &format!("must be between 1 and {MAX_CELL_SIZE_PX}"),
        ));
    }

    u32::try_from(size)
        .ok()
        .and_then(|side| side.checked_mul(cell_size))
        .filter(|&side| u64::from(side) * u64::from(side) <= MAX_IMAGE_PIXELS)
        .ok_or_else(|| {
            invalid_parameter(
                "cell_size",
                &cell_size,
                &format!("a {size}x{size} board would exceed {MAX_IMAGE_PIXELS} pixels"),
            )
        })
}

/// Render a row-major `size × size` cell buffer, `cell_size` pixels per cell
///
/// # Errors
///
/// Returns `InvalidParameter` if the cell size is rejected by [`image_side`]
pub fn render_cells(
    cells: &BitSlice,
    size: usize,
    cell_size: u32,
    palette: &Palette,
) -> Result<RgbaImage> {
    let side = image_side(size, cell_size)?;
    let mut img = RgbaImage::from_pixel(side, side, Rgba(palette.dead));

    for index in cells.iter_ones() {
        // Rows run down the image, columns across
        let top = (index / size) as u32 * cell_size;
        let left = (index % size) as u32 * cell_size;
        for dy in 0..cell_size {
            for dx in 0..cell_size {
                if let Some(pixel) = img.get_pixel_mut_checked(left + dx, top + dy) {
                    *pixel = Rgba(palette.alive);
                }
            }
        }
    }

    Ok(img)
}

/// Render the current generation of a board
///
/// # Errors
///
/// Returns `InvalidParameter` if the cell size is rejected by [`image_side`]
pub fn render_generation(
    engine: &GridEngine,
    cell_size: u32,
    palette: &Palette,
) -> Result<RgbaImage> {
    render_cells(engine.cells(), engine.size(), cell_size, palette)
}

/// Create the parent directory of an output path if needed
///
/// # Errors
///
/// Returns `FileSystem` if the directory cannot be created
pub fn ensure_parent_dir(output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| LifeError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }
    Ok(())
}

/// Export the current generation of a board as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The cell size is rejected by [`image_side`]
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_png(
    engine: &GridEngine,
    cell_size: u32,
    palette: &Palette,
    output_path: &Path,
) -> Result<()> {
    let img = render_generation(engine, cell_size, palette)?;

    ensure_parent_dir(output_path)?;

    img.save(output_path)
        .map_err(|e| LifeError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
