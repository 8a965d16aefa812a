//! Scoped timer: measures from creation to release and emits one Timing sample.

use std::time::{Duration, Instant};

use super::Metrics;

/// Returned by [`Metrics::start_timer`].
///
/// Released when dropped (including during unwinding) or through
/// [`ScopedTimer::stop`]. Only the first release emits; later ones do nothing.
#[must_use = "the timer records when it is dropped; binding it to `_` drops it immediately"]
pub struct ScopedTimer<'a> {
    metrics: &'a Metrics,
    name: &'a str,
    sample_rate: f64,
    tags: Option<&'a [&'a str]>,
    start: Instant,
    released: bool,
}

impl<'a> ScopedTimer<'a> {
    pub(crate) fn new(
        metrics: &'a Metrics,
        name: &'a str,
        sample_rate: f64,
        tags: Option<&'a [&'a str]>,
    ) -> Self {
        Self {
            metrics,
            name,
            sample_rate,
            tags,
            start: Instant::now(),
            released: false,
        }
    }

    /// Release the timer and emit its sample.
    ///
    /// Returns the measured duration on the first call and `None` afterwards.
    pub fn stop(&mut self) -> Option<Duration> {
        if self.released {
            return None;
        }
        self.released = true;

        let elapsed = self.start.elapsed();
        self.metrics
            .timer(self.name, elapsed, self.sample_rate, self.tags);
        Some(elapsed)
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn is_released(&self) -> bool {
        self.released
    }
}

impl Drop for ScopedTimer<'_> {
    fn drop(&mut self) {
        self.stop();
    }
}
