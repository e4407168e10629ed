//! Timer-driven stepping of a session
//!
//! The loop runs on the caller's thread and every tick completes its
//! generation before the next one starts. Other threads can only request a
//! stop through the shared flag, which is checked between ticks.

use log::debug;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use crate::io::configuration::SimulationConfig;
use crate::io::error::Result;
use crate::session::control::Session;

/// Decision returned by a tick callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep advancing
    Continue,
    /// Stop after this generation
    Stop,
}

/// Repeatedly advances a session at a fixed interval
#[derive(Debug, Clone)]
pub struct Scheduler {
    interval: Duration,
    generation_limit: Option<usize>,
    stop_requested: Arc<AtomicBool>,
}

impl Scheduler {
    /// Create a scheduler with no generation limit
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            generation_limit: None,
            stop_requested: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create a scheduler using the configured interval and limit
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(config.step_interval).with_generation_limit(config.generation_limit)
    }

    /// Stop each run after at most `limit` generations
    #[must_use]
    pub const fn with_generation_limit(mut self, limit: Option<usize>) -> Self {
        self.generation_limit = limit;
        self
    }

    /// Delay between generations
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Flag that ends the current run at the next tick once set
    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stop_requested)
    }

    /// Whether a stop has been requested through the handle
    pub fn stop_requested(&self) -> bool {
        self.stop_requested.load(Ordering::SeqCst)
    }

    /// Run the session until the limit, a stop request, or the callback says stop
    ///
    /// Starts the session, then on each tick waits for the interval, advances
    /// one generation and hands the session to `on_tick`. The session is
    /// stopped again when this returns. Returns the number of generations
    /// advanced.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by `on_tick`
    pub fn run<F>(&self, session: &mut Session, mut on_tick: F) -> Result<usize>
    where
        F: FnMut(&Session) -> Result<Flow>,
    {
        session.start();
        let mut advanced = 0;

        let outcome = loop {
            if self.stop_requested() {
                debug!("Stop requested after {advanced} generations");
                break Ok(());
            }
            if self.generation_limit.is_some_and(|limit| advanced >= limit) {
                break Ok(());
            }

            if !self.interval.is_zero() {
                thread::sleep(self.interval);
            }

            session.advance();
            advanced += 1;

            match on_tick(session) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Stop) => break Ok(()),
                Err(err) => break Err(err),
            }
        };

        session.stop();
        outcome.map(|()| advanced)
    }
}
