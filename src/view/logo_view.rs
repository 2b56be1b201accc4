//! Animated logo host: turns configuration changes into transitions.

use std::time::Duration;

use crate::animation::ease::Ease;
use crate::animation::transition::LogoTransition;
use crate::foundation::color::Color;
use crate::foundation::core::{Rect, Size};
use crate::foundation::geometry::EdgeInsets;
use crate::logo::decoration::{DEFAULT_COLOR, DEFAULT_TEXT_COLOR, LogoDecoration};
use crate::logo::label::LabelFont;
use crate::logo::painter::LogoPainter;
use crate::logo::style::LogoStyle;
use crate::render::display_list::DisplayList;

/// Square size used when a view does not set one.
pub const AMBIENT_ICON_SIZE: f64 = 24.0;
/// Default transition length.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(750);

/// Everything a [`LogoView`] is configured with.
#[derive(Clone, Debug, PartialEq)]
pub struct LogoViewConfig {
    /// Mark color.
    pub color: Color,
    /// Label color.
    pub text_color: Color,
    /// Target style.
    pub style: LogoStyle,
    /// Margin around the painted logo.
    pub margin: EdgeInsets,
    /// Length of the transition started by a change.
    pub duration: Duration,
    /// Curve of that transition.
    pub curve: Ease,
    /// Explicit square size; falls back to the ambient size.
    pub size: Option<f64>,
    /// Label font; without one the label uses estimated metrics.
    pub font: Option<LabelFont>,
}

impl Default for LogoViewConfig {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR,
            text_color: DEFAULT_TEXT_COLOR,
            style: LogoStyle::default(),
            margin: EdgeInsets::ZERO,
            duration: DEFAULT_DURATION,
            curve: Ease::default(),
            size: None,
            font: None,
        }
    }
}

impl LogoViewConfig {
    /// Settled decoration described by this configuration.
    pub fn decoration(&self) -> LogoDecoration {
        LogoDecoration::new(self.style)
            .with_color(self.color)
            .with_text_color(self.text_color)
            .with_margin(self.margin)
    }
}

/// A logo that animates towards its latest configuration.
#[derive(Debug)]
pub struct LogoView {
    config: LogoViewConfig,
    painter: LogoPainter,
    transition: LogoTransition,
}

impl LogoView {
    /// View showing `config` without an entry animation.
    pub fn new(config: LogoViewConfig) -> Self {
        let painter = LogoPainter::new(config.text_color, config.font.clone());
        let transition = LogoTransition::settled(config.decoration());
        Self {
            config,
            painter,
            transition,
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &LogoViewConfig {
        &self.config
    }

    /// Painter in use.
    pub fn painter(&self) -> &LogoPainter {
        &self.painter
    }

    /// Running (or last) transition.
    pub fn transition(&self) -> &LogoTransition {
        &self.transition
    }

    /// Apply a new configuration at clock time `now`.
    ///
    /// A transition from whatever is on screen starts only when the new decoration differs from
    /// the current target; decorations that differ only in style or margin compare equal and are
    /// not animated. The painter is rebuilt only when the text color or font changes.
    pub fn set_config(&mut self, config: LogoViewConfig, now: Duration) {
        if !self
            .painter
            .serves(config.text_color, config.font.as_ref())
        {
            self.painter = LogoPainter::new(config.text_color, config.font.clone());
        }

        let target = config.decoration();
        if target != self.transition.end {
            let shown = self.transition.sample(now);
            tracing::debug!(
                from = shown.position(),
                to = target.position(),
                duration_ms = config.duration.as_millis() as u64,
                "transition started"
            );
            self.transition = LogoTransition {
                begin: Some(shown),
                end: target,
                start: now,
                duration: config.duration,
                curve: config.curve,
            };
        }
        self.config = config;
    }

    /// Square this view wants, given the ambient icon size.
    pub fn layout_size(&self, ambient: f64) -> Size {
        let side = self.config.size.unwrap_or(ambient);
        Size::new(side, side)
    }

    /// Decoration on screen at `now`.
    pub fn decoration_at(&self, now: Duration) -> LogoDecoration {
        self.transition.sample(now)
    }

    /// `true` while a transition is still running at `now`.
    pub fn is_animating(&self, now: Duration) -> bool {
        !self.transition.is_finished(now)
    }

    /// Record the frame at `now` into `rect`.
    pub fn paint(&self, now: Duration, rect: Rect, list: &mut DisplayList) {
        self.painter.paint(&self.decoration_at(now), rect, list);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/view/logo_view.rs"]
mod tests;
