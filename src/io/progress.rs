//! Terminal progress display for block averaging and mosaic rendering

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "{{prefix:>10}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Optional progress bar; every call is a no-op when disabled
///
/// Disabled reporters never touch the terminal, so library code can report
/// progress unconditionally.
pub struct ProgressReporter {
    bar: Option<ProgressBar>,
}

impl ProgressReporter {
    /// Create a reporter counting up to `length` steps
    pub fn new(enabled: bool, length: u64, label: &'static str) -> Self {
        let bar = enabled.then(|| {
            let bar = ProgressBar::new(length);
            bar.set_style(PROGRESS_STYLE.clone());
            bar.set_prefix(label);
            bar
        });
        Self { bar }
    }

    /// Create a reporter that displays nothing
    pub const fn hidden() -> Self {
        Self { bar: None }
    }

    /// Check whether a bar is being drawn
    pub const fn is_enabled(&self) -> bool {
        self.bar.is_some()
    }

    /// Show a short message next to the bar
    pub fn set_message(&self, message: &str) {
        if let Some(ref bar) = self.bar {
            bar.set_message(message.to_string());
        }
    }

    /// Advance by one step
    pub fn inc(&self) {
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    /// Current step count (zero when disabled)
    pub fn position(&self) -> u64 {
        self.bar.as_ref().map_or(0, ProgressBar::position)
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
