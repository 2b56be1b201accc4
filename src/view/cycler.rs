//! Repeating task that steps the logo style on a fixed period.

use std::time::Duration;

use tokio::sync::watch;

use crate::foundation::error::{LogoError, LogoResult};
use crate::logo::style::LogoStyle;

/// Default time between style changes.
pub const DEFAULT_PERIOD: Duration = Duration::from_secs(3);

/// Publishes the next [`LogoStyle`] into a single-slot channel every `period`.
///
/// Time is supplied by the caller through [`StyleCycler::advance_to`]. Dropping the cycler closes
/// the channel; subscribers see the closure and no tick fires afterwards.
#[derive(Debug)]
pub struct StyleCycler {
    tx: watch::Sender<LogoStyle>,
    period: Duration,
    next_tick: Duration,
}

impl StyleCycler {
    /// Start cycling from `initial`; the first tick fires at `now + period`.
    pub fn new(initial: LogoStyle, period: Duration, now: Duration) -> LogoResult<Self> {
        if period.is_zero() {
            return Err(LogoError::validation("style cycle period must be > 0"));
        }
        let (tx, _) = watch::channel(initial);
        Ok(Self {
            tx,
            period,
            next_tick: now + period,
        })
    }

    /// New receiver observing the published style.
    pub fn subscribe(&self) -> watch::Receiver<LogoStyle> {
        self.tx.subscribe()
    }

    /// Last published style.
    pub fn current(&self) -> LogoStyle {
        *self.tx.borrow()
    }

    /// Cycle period.
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Fire every tick due at or before `now`. Returns the number of ticks fired.
    pub fn advance_to(&mut self, now: Duration) -> usize {
        let mut fired = 0;
        while now >= self.next_tick {
            let next = self.current().next();
            self.tx.send_replace(next);
            tracing::debug!(style = ?next, at_ms = self.next_tick.as_millis() as u64, "style published");
            self.next_tick += self.period;
            fired += 1;
        }
        fired
    }
}

#[cfg(test)]
#[path = "../../tests/unit/view/cycler.rs"]
mod tests;
