//! Time-driven blend between two decorations.

use std::time::Duration;

use crate::animation::ease::Ease;
use crate::logo::decoration::LogoDecoration;

/// One decoration change animated over `duration` starting at `start`.
#[derive(Clone, Copy, Debug)]
pub struct LogoTransition {
    /// Decoration shown when the transition began; `None` fades `end` in.
    pub begin: Option<LogoDecoration>,
    /// Decoration shown once the transition completes.
    pub end: LogoDecoration,
    /// Clock time the transition began.
    pub start: Duration,
    /// Length of the transition.
    pub duration: Duration,
    /// Curve mapping linear progress to blend factor.
    pub curve: Ease,
}

impl LogoTransition {
    /// A transition that is already finished and always samples `end`.
    pub fn settled(end: LogoDecoration) -> Self {
        Self {
            begin: Some(end),
            end,
            start: Duration::ZERO,
            duration: Duration::ZERO,
            curve: Ease::Linear,
        }
    }

    /// Linear progress in `[0, 1]` at `now`. Zero-length transitions are complete immediately.
    pub fn progress(&self, now: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.start);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// `true` once `now` is at or past the end of the transition.
    pub fn is_finished(&self, now: Duration) -> bool {
        self.progress(now) >= 1.0
    }

    /// Decoration to paint at `now`.
    pub fn sample(&self, now: Duration) -> LogoDecoration {
        let t = self.curve.apply(self.progress(now));
        LogoDecoration::lerp(self.begin.as_ref(), Some(&self.end), t)
            .map(|d| d.into_owned())
            .unwrap_or(self.end)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/transition.rs"]
mod tests;
