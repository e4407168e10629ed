//! Caller-owned simulation session with start/stop gating

use log::{debug, info};
use rand::{SeedableRng, rngs::StdRng};

use crate::engine::grid::GridEngine;
use crate::engine::presets::{CoordinatePolicy, PresetReport};
use crate::io::configuration::SimulationConfig;
use crate::io::error::{LifeError, Result};

/// One board plus the control state wrapped around it
///
/// While running, the board may only change by whole generations:
/// cell toggles are ignored and board replacement is refused.
#[derive(Debug, Clone)]
pub struct Session {
    engine: GridEngine,
    policy: CoordinatePolicy,
    running: bool,
    generation: usize,
}

impl Session {
    /// Create a stopped session over an empty board
    ///
    /// # Errors
    ///
    /// Returns `InvalidSize` if the board cannot be created
    pub fn new(size: usize) -> Result<Self> {
        Self::from_config(&SimulationConfig {
            size,
            ..SimulationConfig::default()
        })
    }

    /// Create a stopped session from configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidSize` if the board cannot be created
    pub fn from_config(config: &SimulationConfig) -> Result<Self> {
        Ok(Self {
            engine: GridEngine::new(config.size)?,
            policy: config.policy,
            running: false,
            generation: 0,
        })
    }

    /// Read access to the board
    pub const fn engine(&self) -> &GridEngine {
        &self.engine
    }

    /// Whether generations are currently being advanced
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Generations advanced since the board was last replaced
    pub const fn generation(&self) -> usize {
        self.generation
    }

    /// Preset coordinate policy in effect
    pub const fn policy(&self) -> CoordinatePolicy {
        self.policy
    }

    /// Mark the session as running
    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            debug!("Simulation started at generation {}", self.generation);
        }
    }

    /// Mark the session as stopped
    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            debug!("Simulation stopped at generation {}", self.generation);
        }
    }

    /// Flip one cell while stopped
    ///
    /// Returns `Ok(false)` without touching the board when the session is
    /// running.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the cell is off the grid, whether or not the
    /// session is running
    pub fn toggle(&mut self, x: usize, y: usize) -> Result<bool> {
        if self.running {
            self.engine.is_alive(x, y)?;
            debug!("Ignoring toggle of ({x}, {y}) while running");
            return Ok(false);
        }
        self.engine.toggle(x, y)?;
        Ok(true)
    }

    fn ensure_stopped(&self, operation: &'static str) -> Result<()> {
        if self.running {
            Err(LifeError::SimulationRunning { operation })
        } else {
            Ok(())
        }
    }

    /// Replace the board with a registered preset and reset the generation count
    ///
    /// # Errors
    ///
    /// Returns `SimulationRunning` while running, otherwise the errors of
    /// [`GridEngine::apply_named_preset`]
    pub fn apply_preset(&mut self, name: &str) -> Result<PresetReport> {
        self.ensure_stopped("apply a preset")?;
        let report = self.engine.apply_named_preset(name, self.policy)?;
        self.generation = 0;
        info!(
            "Loaded preset '{name}' ({} live cells)",
            self.engine.population()
        );
        Ok(report)
    }

    /// Replace the board with arbitrary live cells
    ///
    /// # Errors
    ///
    /// Returns `SimulationRunning` while running, otherwise the errors of
    /// [`GridEngine::apply_preset`]
    pub fn apply_coordinates(&mut self, coords: &[[i32; 2]]) -> Result<PresetReport> {
        self.ensure_stopped("apply coordinates")?;
        let report = self.engine.apply_preset(coords, self.policy)?;
        self.generation = 0;
        Ok(report)
    }

    /// Replace the board with a seeded random soup
    ///
    /// # Errors
    ///
    /// Returns `SimulationRunning` while running, or `InvalidParameter` if
    /// `density` is not within `[0, 1]`
    pub fn randomize(&mut self, density: f64, seed: u64) -> Result<()> {
        self.ensure_stopped("randomize the board")?;
        let mut rng = StdRng::seed_from_u64(seed);
        self.engine.randomize(density, &mut rng)?;
        self.generation = 0;
        info!(
            "Seeded random soup (density {density}, seed {seed}, {} live cells)",
            self.engine.population()
        );
        Ok(())
    }

    /// Kill every cell and reset the generation count
    ///
    /// # Errors
    ///
    /// Returns `SimulationRunning` while running
    pub fn clear(&mut self) -> Result<()> {
        self.ensure_stopped("clear the board")?;
        self.engine.clear();
        self.generation = 0;
        Ok(())
    }

    /// Advance one generation, whether running or single-stepping while stopped
    pub fn advance(&mut self) {
        self.engine.step();
        self.generation += 1;
    }
}
