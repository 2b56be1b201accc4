use std::ops::Mul;

use crate::foundation::core::{Rect, Size};

/// Unclamped linear interpolation.
pub fn lerp_f64(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Interpolate each edge of two rectangles; `t` is not clamped.
pub fn lerp_rect(a: Rect, b: Rect, t: f64) -> Rect {
    Rect::new(
        lerp_f64(a.x0, b.x0, t),
        lerp_f64(a.y0, b.y0, t),
        lerp_f64(a.x1, b.x1, t),
        lerp_f64(a.y1, b.y1, t),
    )
}

/// Scale `source` uniformly so it fits entirely inside `dest`, centered on it.
///
/// Degenerate sources collapse to a zero-size rect at the center of `dest`.
pub fn contain_fit(source: Size, dest: Rect) -> Rect {
    let center = dest.center();
    if source.width <= 0.0 || source.height <= 0.0 {
        return Rect::from_center_size(center, Size::ZERO);
    }
    let scale = (dest.width() / source.width).min(dest.height() / source.height);
    Rect::from_center_size(center, Size::new(source.width * scale, source.height * scale))
}

/// Largest square centered inside `rect`.
pub fn center_square(rect: Rect) -> Rect {
    let side = rect.width().min(rect.height());
    Rect::from_center_size(rect.center(), Size::new(side, side))
}

/// Edge offsets applied when deflating a paint rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EdgeInsets {
    /// Left inset.
    #[serde(default)]
    pub left: f64,
    /// Top inset.
    #[serde(default)]
    pub top: f64,
    /// Right inset.
    #[serde(default)]
    pub right: f64,
    /// Bottom inset.
    #[serde(default)]
    pub bottom: f64,
}

impl EdgeInsets {
    /// No inset on any side.
    pub const ZERO: Self = Self::all(0.0);

    /// The same inset on every side.
    pub const fn all(v: f64) -> Self {
        Self {
            left: v,
            top: v,
            right: v,
            bottom: v,
        }
    }

    /// Shrink `rect` by these insets.
    ///
    /// The result may have zero or negative extent; callers test with [`is_empty_area`].
    pub fn deflate_rect(&self, rect: Rect) -> Rect {
        Rect {
            x0: rect.x0 + self.left,
            y0: rect.y0 + self.top,
            x1: rect.x1 - self.right,
            y1: rect.y1 - self.bottom,
        }
    }

    /// Per-side interpolation; `t` is not clamped.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            left: lerp_f64(self.left, other.left, t),
            top: lerp_f64(self.top, other.top, t),
            right: lerp_f64(self.right, other.right, t),
            bottom: lerp_f64(self.bottom, other.bottom, t),
        }
    }

    /// Return `true` when every side is finite.
    pub fn is_finite(&self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.right.is_finite()
            && self.bottom.is_finite()
    }
}

impl Mul<f64> for EdgeInsets {
    type Output = Self;

    fn mul(self, k: f64) -> Self {
        Self {
            left: self.left * k,
            top: self.top * k,
            right: self.right * k,
            bottom: self.bottom * k,
        }
    }
}

/// Return `true` when `rect` has zero or negative width or height (NaN counts as empty).
pub fn is_empty_area(rect: Rect) -> bool {
    !(rect.width() > 0.0 && rect.height() > 0.0)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/geometry.rs"]
mod tests;
