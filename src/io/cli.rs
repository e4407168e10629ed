//! Command-line front end: seed a board, run it, optionally export images

use crate::engine::presets::{CoordinatePolicy, find_preset, preset_names};
use crate::io::configuration::{
    DEFAULT_CELL_SIZE_PX, DEFAULT_GRID_SIZE, DEFAULT_PRESET, DEFAULT_SEED,
    DEFAULT_STEP_INTERVAL_MS, SimulationConfig,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{Palette, export_png};
use crate::io::progress::GenerationProgress;
use crate::io::render::TerminalRenderer;
use crate::io::visualization::GenerationRecorder;
use crate::session::control::Session;
use crate::session::scheduler::{Flow, Scheduler};
use clap::Parser;
use log::{info, warn};
use std::path::PathBuf;
use std::sync::atomic::Ordering;
use std::time::Duration;

/// Parse a cell given as `X,Y`
///
/// # Errors
///
/// Returns a message if the text is not two comma-separated unsigned integers
pub fn parse_cell(text: &str) -> std::result::Result<[usize; 2], String> {
    let (x, y) = text
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{text}'"))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<usize>()
            .map_err(|e| format!("invalid coordinate '{part}': {e}"))
    };
    Ok([parse(x)?, parse(y)?])
}

#[derive(Parser)]
#[command(name = "lifegrid")]
#[command(author, version, about = "Run Conway's Game of Life on a fixed-size grid")]
/// Command-line arguments for the simulator
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Side length of the square board
    #[arg(short, long, default_value_t = DEFAULT_GRID_SIZE)]
    pub size: usize,

    /// Preset to start from
    #[arg(short, long, default_value = DEFAULT_PRESET)]
    pub preset: String,

    /// Start from a random soup with this live-cell density instead of a preset
    #[arg(short, long, value_name = "DENSITY")]
    pub random: Option<f64>,

    /// Seed for the random soup
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Toggle a cell before starting, given as X,Y (repeatable)
    #[arg(short, long, value_name = "X,Y", value_parser = parse_cell)]
    pub toggle: Vec<[usize; 2]>,

    /// Stop after this many generations
    #[arg(short, long)]
    pub generations: Option<usize>,

    /// Milliseconds between generations
    #[arg(short, long, default_value_t = DEFAULT_STEP_INTERVAL_MS)]
    pub interval_ms: u64,

    /// Reject presets with cells outside the board instead of skipping them
    #[arg(long)]
    pub strict: bool,

    /// Do not draw the board in the terminal
    #[arg(long)]
    pub headless: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Record every generation and export an animated GIF
    #[arg(long, value_name = "PATH")]
    pub gif: Option<PathBuf>,

    /// Export the final generation as a PNG image
    #[arg(long, value_name = "PATH")]
    pub png: Option<PathBuf>,

    /// Pixels per cell in exported images
    #[arg(long, default_value_t = DEFAULT_CELL_SIZE_PX)]
    pub cell_size: u32,

    /// Print the available presets and exit
    #[arg(short, long)]
    pub list_presets: bool,
}

impl Cli {
    /// Preset coordinate policy selected by `--strict`
    pub const fn policy(&self) -> CoordinatePolicy {
        if self.strict {
            CoordinatePolicy::Strict
        } else {
            CoordinatePolicy::Skip
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        self.headless && !self.quiet
    }

    /// Validate arguments and build the simulation configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if:
    /// - The random density is outside `[0, 1]`
    /// - A GIF is requested without a generation limit
    /// - A headless run has neither a generation limit nor a delay
    pub fn simulation_config(&self) -> Result<SimulationConfig> {
        if let Some(density) = self.random {
            if !(0.0..=1.0).contains(&density) {
                return Err(invalid_parameter(
                    "random",
                    &density,
                    &"density must be within [0, 1]",
                ));
            }
        }

        if self.gif.is_some() && self.generations.is_none() {
            return Err(invalid_parameter(
                "gif",
                &"<none>",
                &"recording requires --generations",
            ));
        }

        if self.headless && self.generations.is_none() && self.interval_ms == 0 {
            return Err(invalid_parameter(
                "interval_ms",
                &self.interval_ms,
                &"a headless run without --generations needs a delay",
            ));
        }

        Ok(SimulationConfig {
            size: self.size,
            policy: self.policy(),
            step_interval: Duration::from_millis(self.interval_ms),
            generation_limit: self.generations,
        })
    }
}

/// Drives one simulation run from parsed arguments
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the simulation according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation, board setup, drawing, or
    /// image export fails
    // Allow print for the preset listing
    #[allow(clippy::print_stdout)]
    pub fn run(&self) -> Result<()> {
        if self.cli.list_presets {
            for name in preset_names() {
                println!("{name}");
            }
            return Ok(());
        }

        let config = self.cli.simulation_config()?;
        let mut session = self.prepare_session(&config)?;
        let scheduler = Scheduler::from_config(&config);

        let stop = scheduler.stop_handle();
        if let Err(err) = ctrlc::set_handler(move || stop.store(true, Ordering::SeqCst)) {
            warn!("Could not install Ctrl-C handler: {err}");
        }

        let palette = Palette::default();
        let mut recorder = match self.cli.gif {
            Some(_) => {
                let capacity = config.generation_limit.unwrap_or(0).saturating_add(1);
                let mut recorder =
                    GenerationRecorder::new(config.size, self.cli.cell_size, palette, capacity)?;
                recorder.record(session.engine())?;
                Some(recorder)
            }
            None => None,
        };

        let mut renderer = if self.cli.headless {
            None
        } else {
            let mut renderer = TerminalRenderer::new(std::io::stdout());
            renderer.draw(&session)?;
            Some(renderer)
        };

        let progress = if self.cli.should_show_progress() {
            GenerationProgress::new(config.generation_limit)
        } else {
            GenerationProgress::hidden()
        };

        let advanced = scheduler.run(&mut session, |current| {
            if let Some(recorder) = recorder.as_mut() {
                recorder.record(current.engine())?;
            }
            if let Some(renderer) = renderer.as_mut() {
                renderer.draw(current)?;
            }
            progress.update(current.generation(), current.engine().population());
            Ok(Flow::Continue)
        })?;
        progress.finish();

        info!(
            "Ran {advanced} generations, final population {}",
            session.engine().population()
        );

        if let (Some(path), Some(recorder)) = (&self.cli.gif, &recorder) {
            recorder.export_gif(path, self.gif_frame_delay_ms())?;
            info!("Wrote {} frames to {}", recorder.frame_count(), path.display());
        }

        if let Some(path) = &self.cli.png {
            export_png(session.engine(), self.cli.cell_size, &palette, path)?;
            info!("Wrote final generation to {}", path.display());
        }

        Ok(())
    }

    /// Build the session and seed its board, all while stopped
    ///
    /// # Errors
    ///
    /// Returns an error if the board cannot be created, the preset is
    /// unknown or rejected, or a toggled cell is off the board
    pub fn prepare_session(&self, config: &SimulationConfig) -> Result<Session> {
        let mut session = Session::from_config(config)?;

        if let Some(density) = self.cli.random {
            session.randomize(density, self.cli.seed)?;
        } else {
            let preset = find_preset(&self.cli.preset)?;
            if !preset.fits(config.size) {
                warn!(
                    "Preset '{}' does not fit a {}x{} board",
                    preset.name, config.size, config.size
                );
            }
            session.apply_preset(preset.name)?;
        }

        for &[x, y] in &self.cli.toggle {
            session.toggle(x, y)?;
        }

        Ok(session)
    }

    fn gif_frame_delay_ms(&self) -> u32 {
        u32::try_from(self.cli.interval_ms).unwrap_or(u32::MAX)
    }
}
