//! Generation capture and animated GIF export

use bitvec::vec::BitVec;
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame};
use std::path::Path;

use crate::engine::grid::GridEngine;
use crate::io::configuration::{
    FINAL_FRAME_HOLD, MAX_PREALLOCATED_FRAMES, VIEWER_MIN_FRAME_DELAY_MS,
};
use crate::io::error::{LifeError, Result, invalid_parameter};
use crate::io::image::{Palette, ensure_parent_dir, image_side, render_cells};

/// Records successive generations of one board for later playback
///
/// Stores each generation as a bit vector; frames are only rasterized on
/// export.
pub struct GenerationRecorder {
    size: usize,
    cell_size: u32,
    palette: Palette,
    generations: Vec<BitVec>,
}

impl GenerationRecorder {
    /// Create a recorder for boards of side `size`
    ///
    /// `capacity` is a hint; at most `MAX_PREALLOCATED_FRAMES` slots are
    /// reserved up front.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `cell_size` is not usable for this board
    pub fn new(size: usize, cell_size: u32, palette: Palette, capacity: usize) -> Result<Self> {
        image_side(size, cell_size)?;
        Ok(Self {
            size,
            cell_size,
            palette,
            generations: Vec::with_capacity(capacity.min(MAX_PREALLOCATED_FRAMES)),
        })
    }

    /// Capture the current generation of a board
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the board size differs from the recorder's
    pub fn record(&mut self, engine: &GridEngine) -> Result<()> {
        if engine.size() != self.size {
            return Err(invalid_parameter(
                "size",
                &engine.size(),
                &format!("recorder expects {}x{} boards", self.size, self.size),
            ));
        }
        self.generations.push(engine.cells().to_bitvec());
        Ok(())
    }

    /// Number of generations captured
    pub const fn frame_count(&self) -> usize {
        self.generations.len()
    }

    /// Export the captured generations as a looping GIF
    ///
    /// Frames are dropped when the requested delay is shorter than viewers
    /// honor: at 5ms per frame with a 20ms floor, every 4th generation is
    /// kept so playback speed stays roughly right. The last generation is
    /// always included and held longer.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No generations were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        if self.generations.is_empty() {
            return Err(invalid_parameter(
                "frames",
                &0,
                &"no generations captured for export",
            ));
        }

        let requested_ms = frame_delay_ms.max(1);
        let effective_delay_ms = requested_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let skip_factor = VIEWER_MIN_FRAME_DELAY_MS.div_ceil(requested_ms).max(1) as usize;

        let frames = self.generate_frames(effective_delay_ms, skip_factor)?;

        ensure_parent_dir(output_path)?;

        let file = std::fs::File::create(output_path).map_err(|e| LifeError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let export_error = |e| LifeError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        };

        let mut encoder = GifEncoder::new(file);
        encoder.set_repeat(Repeat::Infinite).map_err(export_error)?;
        encoder.encode_frames(frames).map_err(export_error)?;

        Ok(())
    }

    fn generate_frames(&self, delay_ms: u32, skip_factor: usize) -> Result<Vec<Frame>> {
        let last = self.generations.len() - 1;
        let mut frames = Vec::with_capacity(self.generations.len() / skip_factor + 1);

        for (index, cells) in self.generations.iter().enumerate() {
            if index % skip_factor != 0 && index != last {
                continue;
            }
            let hold = if index == last { FINAL_FRAME_HOLD } else { 1 };
            let img = render_cells(cells, self.size, self.cell_size, &self.palette)?;
            frames.push(Frame::from_parts(
                img,
                0,
                0,
                Delay::from_numer_denom_ms(delay_ms.saturating_mul(hold), 1),
            ));
        }

        Ok(frames)
    }
}
