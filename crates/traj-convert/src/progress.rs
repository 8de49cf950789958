//! Progress reporting for long reads.
//!
//! Readers call [`ProgressObserver::on_progress`] as often as they like.
//! Wrapping the caller's observer in a [`RateLimitedProgress`] keeps the
//! calls it actually sees down to one per interval.

use std::time::{Duration, Instant};

use crate::ConvertResult;

/// Receives the fraction of a read that is done, in `(0, 1]`.
///
/// Returning `Err` aborts the read; the error is passed through unchanged.
pub trait ProgressObserver {
    fn on_progress(&mut self, _fraction: f32) -> ConvertResult<()> {
        Ok(())
    }
}

/// A [`ProgressObserver`] that ignores every report.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoopProgress;

impl ProgressObserver for NoopProgress {}

impl<F> ProgressObserver for F
where
    F: FnMut(f32) -> ConvertResult<()>,
{
    fn on_progress(&mut self, fraction: f32) -> ConvertResult<()> {
        self(fraction)
    }
}

/// Forwards to `inner` at most once per `min_interval`.
///
/// Fractions are clamped so the forwarded sequence never decreases.  The
/// final 1.0 is always forwarded, once.
pub struct RateLimitedProgress<O> {
    inner:         O,
    min_interval:  Duration,
    last_report:   Instant,
    last_fraction: f32,
    finished:      bool,
}

impl<O: ProgressObserver> RateLimitedProgress<O> {
    pub fn new(inner: O, min_interval: Duration) -> Self {
        Self {
            inner,
            min_interval,
            last_report: Instant::now(),
            last_fraction: 0.0,
            finished: false,
        }
    }

    pub fn into_inner(self) -> O {
        self.inner
    }
}

impl<O: ProgressObserver> ProgressObserver for RateLimitedProgress<O> {
    fn on_progress(&mut self, fraction: f32) -> ConvertResult<()> {
        if self.finished || fraction.is_nan() {
            return Ok(());
        }
        let fraction = fraction.clamp(0.0, 1.0).max(self.last_fraction);
        self.last_fraction = fraction;
        if fraction <= 0.0 {
            return Ok(());
        }

        let now = Instant::now();
        let done = fraction >= 1.0;
        if !done && now.duration_since(self.last_report) < self.min_interval {
            return Ok(());
        }
        self.last_report = now;
        self.finished = done;
        self.inner.on_progress(fraction)
    }
}
