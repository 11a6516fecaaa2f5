//! Batch progress display for multi-file runs

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::path::Path;

use crate::io::configuration::PROGRESS_BAR_WIDTH;

fn batch_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
}

/// Tracks how many puzzle files of a batch have been solved
pub struct ProgressManager {
    bar: ProgressBar,
    failures: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager drawing to stderr
    pub fn new() -> Self {
        Self::with_target(ProgressDrawTarget::stderr())
    }

    /// Create a progress manager that draws nothing
    pub fn hidden() -> Self {
        Self::with_target(ProgressDrawTarget::hidden())
    }

    fn with_target(target: ProgressDrawTarget) -> Self {
        let bar = ProgressBar::with_draw_target(Some(0), target);
        bar.set_style(batch_style());
        Self { bar, failures: 0 }
    }

    /// Set the number of files in the batch
    pub fn initialize(&mut self, file_count: usize) {
        self.bar.set_length(file_count as u64);
        self.bar.set_position(0);
        self.failures = 0;
    }

    /// Show which file is being solved
    pub fn start_file(&self, path: &Path) {
        let name = path.file_name().unwrap_or_default().to_string_lossy();
        self.bar.set_message(name.into_owned());
    }

    /// Mark a file as finished
    pub fn complete_file(&mut self, succeeded: bool) {
        if !succeeded {
            self.failures += 1;
        }
        self.bar.inc(1);
    }

    /// Files finished so far
    pub fn completed(&self) -> u64 {
        self.bar.position()
    }

    /// Files that finished with an error
    pub const fn failures(&self) -> usize {
        self.failures
    }

    /// Clear the display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    /// One-line batch outcome, present only when some file failed
    pub fn summary(&self) -> Option<String> {
        (self.failures > 0).then(|| {
            format!(
                "{} of {} files failed",
                self.failures,
                self.completed()
            )
        })
    }
}
