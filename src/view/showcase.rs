//! Full-screen host: one centered logo that cycles through the styles.

use std::time::Duration;

use tokio::sync::watch;

use crate::config::ShowcaseConfig;
use crate::foundation::color::Color;
use crate::foundation::core::{Rect, Size};
use crate::foundation::error::LogoResult;
use crate::logo::label::LabelFont;
use crate::logo::style::LogoStyle;
use crate::render::display_list::DisplayList;
use crate::view::cycler::StyleCycler;
use crate::view::logo_view::{LogoView, LogoViewConfig};

/// Fraction of the canvas, per axis, given to the logo.
pub const LOGO_FRACTION: f64 = 0.5;

/// The showcase screen. Owns its cycler, so dropping the showcase stops the cycle.
#[derive(Debug)]
pub struct Showcase {
    view: LogoView,
    cycler: StyleCycler,
    styles: watch::Receiver<LogoStyle>,
    background: Option<Color>,
}

impl Showcase {
    /// Build the showcase at clock time `now`.
    pub fn new(config: &ShowcaseConfig, font: Option<LabelFont>, now: Duration) -> LogoResult<Self> {
        config.validate()?;
        let cycler = StyleCycler::new(config.initial_style, config.period(), now)?;
        let styles = cycler.subscribe();
        Ok(Self {
            view: LogoView::new(config.view_config(font)),
            cycler,
            styles,
            background: config.background,
        })
    }

    /// The hosted logo.
    pub fn view(&self) -> &LogoView {
        &self.view
    }

    /// New receiver for the published style.
    pub fn subscribe(&self) -> watch::Receiver<LogoStyle> {
        self.cycler.subscribe()
    }

    /// Background color to clear frames to.
    pub fn background(&self) -> Option<Color> {
        self.background
    }

    /// Rectangle the logo occupies in a canvas of `canvas` size.
    pub fn logo_rect(canvas: Size) -> Rect {
        let rect = Rect::from_origin_size((0.0, 0.0), canvas);
        Rect::from_center_size(
            rect.center(),
            Size::new(canvas.width * LOGO_FRACTION, canvas.height * LOGO_FRACTION),
        )
    }

    /// Advance the clock to `now` and record the frame.
    #[tracing::instrument(level = "trace", skip(self), fields(now_ms = now.as_millis() as u64))]
    pub fn frame(&mut self, now: Duration, canvas: Size) -> DisplayList {
        self.cycler.advance_to(now);
        if self.styles.has_changed().unwrap_or(false) {
            let style = *self.styles.borrow_and_update();
            let config = LogoViewConfig {
                style,
                ..self.view.config().clone()
            };
            self.view.set_config(config, now);
        }

        let mut list = DisplayList::new();
        self.view.paint(now, Self::logo_rect(canvas), &mut list);
        list
    }
}

#[cfg(test)]
#[path = "../../tests/unit/view/showcase.rs"]
mod tests;
