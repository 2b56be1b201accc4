//! The immutable logo state and the blend between two (possibly absent) states.

use std::borrow::Cow;
use std::hash::{Hash, Hasher};

use crate::foundation::color::Color;
use crate::foundation::geometry::{EdgeInsets, lerp_f64};
use crate::logo::style::LogoStyle;

/// Light beam color used when none is configured.
pub const DEFAULT_COLOR: Color = Color::from_argb32(0xFF54_C5F8);
/// Label color used when none is configured.
pub const DEFAULT_TEXT_COLOR: Color = Color::from_argb32(0xFF75_7575);

/// Immutable description of one logo frame.
///
/// `position` and `opacity` are derived from `style` at construction (position on the morph
/// axis, full opacity) and only change through [`LogoDecoration::lerp`].
///
/// Equality and hashing consider `color`, `text_color`, `position` and `opacity`. `style` and
/// `margin` do not participate.
#[derive(Clone, Copy, Debug)]
pub struct LogoDecoration {
    color: Color,
    text_color: Color,
    style: LogoStyle,
    margin: EdgeInsets,
    position: f64,
    opacity: f64,
}

impl Default for LogoDecoration {
    fn default() -> Self {
        Self::new(LogoStyle::default())
    }
}

impl LogoDecoration {
    /// Settled decoration for `style` with default colors and no margin.
    pub fn new(style: LogoStyle) -> Self {
        Self {
            color: DEFAULT_COLOR,
            text_color: DEFAULT_TEXT_COLOR,
            style,
            margin: EdgeInsets::ZERO,
            position: style.position(),
            opacity: 1.0,
        }
    }

    /// Replace the mark color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Replace the label color.
    pub fn with_text_color(mut self, text_color: Color) -> Self {
        self.text_color = text_color;
        self
    }

    /// Replace the margin.
    pub fn with_margin(mut self, margin: EdgeInsets) -> Self {
        self.margin = margin;
        self
    }

    /// Unchecked constructor used by blending and by tests that need mid-transition states.
    pub fn from_parts(
        color: Color,
        text_color: Color,
        style: LogoStyle,
        margin: EdgeInsets,
        position: f64,
        opacity: f64,
    ) -> Self {
        let out = Self {
            color,
            text_color,
            style,
            margin,
            position,
            opacity,
        };
        out.debug_assert_valid();
        out
    }

    /// Mark color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Label color.
    pub fn text_color(&self) -> Color {
        self.text_color
    }

    /// Nearest discrete style.
    pub fn style(&self) -> LogoStyle {
        self.style
    }

    /// Paint margin.
    pub fn margin(&self) -> EdgeInsets {
        self.margin
    }

    /// Signed morph position: −1 stacked, 0 mark-only, +1 horizontal.
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Overall opacity in `[0, 1]`.
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    /// `true` when fully opaque and resting exactly on one of the three styles.
    pub fn is_settled(&self) -> bool {
        self.opacity == 1.0
            && (self.position == -1.0 || self.position == 0.0 || self.position == 1.0)
    }

    pub(crate) fn debug_assert_valid(&self) {
        debug_assert!(self.position.is_finite(), "position must be finite");
        debug_assert!(
            (0.0..=1.0).contains(&self.opacity),
            "opacity must be in [0, 1], got {}",
            self.opacity
        );
    }

    /// Blend two decorations.
    ///
    /// - same reference: returned as is;
    /// - both absent: `None`;
    /// - one absent: the present side fades (opacity scaled by `t` fading in, `1 - t` fading
    ///   out, both clamped) with its margin scaled by `t`;
    /// - `t == 0` / `t == 1`: `a` / `b` unchanged;
    /// - otherwise every field is interpolated, the style switches at `t = 0.5`, and only the
    ///   opacity is clamped. Position and margin may overshoot with bouncy curves.
    pub fn lerp<'a>(
        a: Option<&'a LogoDecoration>,
        b: Option<&'a LogoDecoration>,
        t: f64,
    ) -> Option<Cow<'a, LogoDecoration>> {
        if let Some(a) = a {
            a.debug_assert_valid();
        }
        if let Some(b) = b {
            b.debug_assert_valid();
        }

        match (a, b) {
            (Some(a), Some(b)) if std::ptr::eq(a, b) => Some(Cow::Borrowed(a)),
            (None, None) => None,
            (None, Some(b)) => Some(Cow::Owned(Self {
                margin: b.margin * t,
                opacity: b.opacity * t.clamp(0.0, 1.0),
                ..*b
            })),
            (Some(a), None) => Some(Cow::Owned(Self {
                margin: a.margin * t,
                opacity: a.opacity * (1.0 - t).clamp(0.0, 1.0),
                ..*a
            })),
            (Some(a), Some(_)) if t == 0.0 => Some(Cow::Borrowed(a)),
            (Some(_), Some(b)) if t == 1.0 => Some(Cow::Borrowed(b)),
            (Some(a), Some(b)) => Some(Cow::Owned(Self {
                color: a.color.lerp(b.color, t),
                text_color: a.text_color.lerp(b.text_color, t),
                style: if t < 0.5 { a.style } else { b.style },
                margin: a.margin.lerp(b.margin, t),
                position: lerp_f64(a.position, b.position, t),
                opacity: lerp_f64(a.opacity, b.opacity, t).clamp(0.0, 1.0),
            })),
        }
    }
}

impl PartialEq for LogoDecoration {
    fn eq(&self, other: &Self) -> bool {
        self.color == other.color
            && self.text_color == other.text_color
            && self.position == other.position
            && self.opacity == other.opacity
    }
}

// Positions and opacities are finite, so `==` on them is a total equivalence.
impl Eq for LogoDecoration {}

impl Hash for LogoDecoration {
    fn hash<H: Hasher>(&self, state: &mut H) {
        fn canonical_bits(v: f64) -> u64 {
            if v == 0.0 { 0.0f64.to_bits() } else { v.to_bits() }
        }

        self.color.hash(state);
        self.text_color.hash(state);
        canonical_bits(self.position).hash(state);
        canonical_bits(self.opacity).hash(state);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/logo/decoration.rs"]
mod tests;
