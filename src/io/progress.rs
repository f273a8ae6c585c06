//! Progress display for the diffusion loop

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static DIFFUSION_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks diffusion progress for a single generation run
///
/// The diffusion loop is the only long phase of a run, so one bar sized to
/// the step count covers it; stage notes are printed above the bar as the
/// remaining stages complete.
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a progress bar sized to the configured diffusion steps
    pub fn new(iteration_count: usize) -> Self {
        let bar = ProgressBar::new(iteration_count as u64);
        bar.set_style(DIFFUSION_STYLE.clone());
        bar.set_message("Diffusing");
        Self { bar }
    }

    /// Report the number of completed diffusion steps
    pub fn update_iteration(&self, iteration: usize) {
        self.bar.set_position(iteration as u64);
    }

    /// Print a status line above the bar
    pub fn announce(&self, message: &str) {
        self.bar.println(message);
    }

    /// Complete the diffusion display
    pub fn finish(&self) {
        self.bar.finish_with_message("Diffusion complete");
    }
}
