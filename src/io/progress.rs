//! Progress display for headless runs

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BAR_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("[{elapsed_precise}] {spinner} generation {pos} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Progress bar over generations, or a spinner when the run is unbounded
pub struct GenerationProgress {
    bar: ProgressBar,
}

impl GenerationProgress {
    /// Create a bar for `limit` generations, or a spinner when `None`
    pub fn new(limit: Option<usize>) -> Self {
        let bar = match limit {
            Some(total) => {
                let bar = ProgressBar::new(total as u64);
                bar.set_style(BAR_STYLE.clone());
                bar
            }
            None => {
                let bar = ProgressBar::new_spinner();
                bar.set_style(SPINNER_STYLE.clone());
                bar
            }
        };
        Self { bar }
    }

    /// Progress display that draws nothing
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Report the generation just reached and its population
    pub fn update(&self, generation: usize, population: usize) {
        self.bar.set_position(generation as u64);
        self.bar.set_message(format!("population {population}"));
    }

    /// Generation last reported
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Clean up the display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
