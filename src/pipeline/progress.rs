//! Progress reporting seam for the cleaning pipeline.

use indicatif::{ProgressBar, ProgressStyle};

/// Receives completion fractions as chunks finish cleaning.
///
/// The orchestrator reports `i / N` exactly once after each completed chunk,
/// so values lie in (0.0, 1.0], never decrease, and end at 1.0 on success.
pub trait ProgressSink: Send {
    /// Record that `fraction` of the chunks have been cleaned.
    fn report(&mut self, fraction: f64);
}

/// Progress sink that discards all reports.
pub struct NullProgress;

impl ProgressSink for NullProgress {
    fn report(&mut self, _fraction: f64) {}
}

/// Progress sink rendering an indicatif bar on stderr.
pub struct BarProgress {
    bar: ProgressBar,
}

/// Bar resolution; fractions are mapped onto this many ticks.
const BAR_TICKS: u64 = 1000;

impl BarProgress {
    pub fn new() -> Self {
        let bar = ProgressBar::new(BAR_TICKS);
        bar.set_style(
            // SAFETY: hardcoded template string — always valid
            #[allow(clippy::expect_used)]
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {percent}% cleaning chunks")
                .expect("static progress template")
                .progress_chars("#>-"),
        );
        Self { bar }
    }
}

impl Default for BarProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSink for BarProgress {
    fn report(&mut self, fraction: f64) {
        self.bar
            .set_position((fraction * BAR_TICKS as f64).round() as u64);
        if fraction >= 1.0 {
            self.bar.finish_and_clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_progress_accepts_any_fraction() {
        let mut sink = NullProgress;
        sink.report(0.5);
        sink.report(1.0);
    }

    #[test]
    fn progress_sink_trait_object_is_send() {
        fn assert_send<T: Send + ?Sized>() {}
        assert_send::<Box<dyn ProgressSink>>();
    }
}
