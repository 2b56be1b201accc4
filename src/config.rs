//! JSON configuration of the full-screen showcase.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::animation::ease::Ease;
use crate::foundation::color::Color;
use crate::foundation::error::{LogoError, LogoResult};
use crate::foundation::geometry::EdgeInsets;
use crate::logo::decoration::{DEFAULT_COLOR, DEFAULT_TEXT_COLOR};
use crate::logo::label::LabelFont;
use crate::logo::style::LogoStyle;
use crate::view::logo_view::LogoViewConfig;

/// Showcase settings. Every field is optional in JSON; unknown fields are rejected.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShowcaseConfig {
    /// Mark color.
    pub color: Color,
    /// Label color.
    pub text_color: Color,
    /// Style shown before the first cycle tick.
    pub initial_style: LogoStyle,
    /// Transition length in milliseconds.
    pub transition_ms: u64,
    /// Transition curve.
    pub curve: Ease,
    /// Time between style changes in milliseconds.
    pub period_ms: u64,
    /// Margin around the logo; a number applies to every side.
    #[serde(deserialize_with = "de_margin")]
    pub margin: EdgeInsets,
    /// Font file for the label.
    pub font: Option<PathBuf>,
    /// Color the frame is cleared to; transparent when absent.
    pub background: Option<Color>,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR,
            text_color: DEFAULT_TEXT_COLOR,
            initial_style: LogoStyle::MarkOnly,
            transition_ms: 750,
            curve: Ease::FastOutSlowIn,
            period_ms: 3000,
            margin: EdgeInsets::ZERO,
            font: None,
            background: None,
        }
    }
}

fn de_margin<'de, D>(d: D) -> Result<EdgeInsets, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(serde::Deserialize)]
    #[serde(untagged)]
    enum Repr {
        All(f64),
        Sides(EdgeInsets),
    }
    Ok(match <Repr as serde::Deserialize>::deserialize(d)? {
        Repr::All(v) => EdgeInsets::all(v),
        Repr::Sides(e) => e,
    })
}

impl ShowcaseConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_reader<R: std::io::Read>(r: R) -> LogoResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| LogoError::serde(format!("parse showcase config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse and validate a JSON string.
    pub fn from_json_str(s: &str) -> LogoResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Parse and validate a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> LogoResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("open showcase config '{}': {e}", path.display()),
            )
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check value ranges.
    pub fn validate(&self) -> LogoResult<()> {
        if self.period_ms == 0 {
            return Err(LogoError::validation("period_ms must be > 0"));
        }
        let m = self.margin;
        if !m.is_finite() || m.left < 0.0 || m.top < 0.0 || m.right < 0.0 || m.bottom < 0.0 {
            return Err(LogoError::validation(
                "margin must be finite and non-negative",
            ));
        }
        Ok(())
    }

    /// Transition length.
    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    /// Style cycle period.
    pub fn period(&self) -> Duration {
        Duration::from_millis(self.period_ms)
    }

    /// Load the configured label font, if any.
    pub fn load_font(&self) -> LogoResult<Option<LabelFont>> {
        self.font.as_deref().map(LabelFont::load).transpose()
    }

    /// View configuration for the initial style.
    pub fn view_config(&self, font: Option<LabelFont>) -> LogoViewConfig {
        LogoViewConfig {
            color: self.color,
            text_color: self.text_color,
            style: self.initial_style,
            margin: self.margin,
            duration: self.transition(),
            curve: self.curve,
            size: None,
            font,
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
