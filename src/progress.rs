//! Progress display for manifest scans
//!
//! Draws a spinner on stderr while a tree is scanned, using indicatif.
//! The spinner counts decoded manifests and shows the one being read.

use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

/// Spinner tracking one scan
pub struct Progress {
    /// None when progress display is off (quiet, JSON or verbose runs)
    bar: Option<ProgressBar>,
}

impl Progress {
    /// Start a scan spinner for `root`, or a no-op reporter when disabled
    pub fn scan(root: &Path, enabled: bool) -> Self {
        if !enabled {
            return Self { bar: None };
        }

        let bar = ProgressBar::new_spinner();
        if let Ok(style) =
            ProgressStyle::default_spinner().template("{spinner:.cyan} {msg} ({pos} manifests)")
        {
            bar.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
        }
        bar.set_message(format!("Scanning {}", root.display()));
        bar.enable_steady_tick(Duration::from_millis(80));
        Self { bar: Some(bar) }
    }

    /// Show the manifest about to be read
    pub fn reading(&self, manifest: &Path) {
        if let Some(ref bar) = self.bar {
            bar.set_message(format!("Reading {}", manifest.display()));
        }
    }

    /// Count one decoded manifest
    pub fn recorded(&self) {
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    /// Remove the spinner from the terminal
    pub fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

impl Drop for Progress {
    // Clears the spinner when a scan stops on an error
    fn drop(&mut self) {
        self.finish();
    }
}
