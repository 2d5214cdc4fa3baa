//! Progress display for batches of rendered artworks

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use std::sync::LazyLock;
use std::time::Duration;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many artworks of a batch have been rendered
pub struct ProgressManager {
    bar: ProgressBar,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with an empty, hidden-until-initialized bar
    pub fn new() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Show a bar sized for the batch
    pub fn initialize(&mut self, total: usize) {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(BATCH_STYLE.clone());
        self.bar = bar;
    }

    /// Report the index currently being rendered
    pub fn start_artwork(&self, label: &str) {
        self.bar.set_message(format!("#{label}"));
    }

    /// Mark one artwork as done
    pub fn complete_artwork(&self, elapsed: Duration) {
        debug!("artwork {} rendered in {elapsed:.2?}", self.bar.position() + 1);
        self.bar.inc(1);
    }

    /// Number of artworks completed so far
    pub fn completed(&self) -> u64 {
        self.bar.position()
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
