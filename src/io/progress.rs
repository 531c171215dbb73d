//! Run progress reporting over the fixed-size synthesis pipeline

use crate::recipe::mask::NeighborCode;
use indicatif::{ProgressBar, ProgressStyle};

/// Steps in one run: 16 tiles, sheet, rules, manifest
const RUN_STEPS: u64 = NeighborCode::COUNT as u64 + 3;

/// Progress reporter for one synthesis run
///
/// Wraps an `indicatif` bar sized to the fixed step count of a run. A
/// disabled reporter is a no-op, used by quiet mode and library callers.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
}

impl ProgressManager {
    /// Create an active reporter drawing to stderr
    pub fn new() -> Self {
        let bar = ProgressBar::new(RUN_STEPS);
        let style = ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        bar.set_style(style);
        Self { bar: Some(bar) }
    }

    /// Create a reporter that reports nothing
    pub const fn disabled() -> Self {
        Self { bar: None }
    }

    /// Record completion of one step with a short label
    pub fn advance(&self, label: &str) {
        if let Some(bar) = &self.bar {
            bar.set_message(label.to_string());
            bar.inc(1);
        }
    }

    /// Finish and clear the bar
    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}
