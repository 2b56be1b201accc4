//! Per-paint geometry: where the mark and label go inside a target rectangle.

use crate::foundation::core::{Rect, Size};
use crate::foundation::geometry::{center_square, contain_fit, is_empty_area, lerp_rect};
use crate::logo::decoration::LogoDecoration;
use crate::logo::mark::MARK_EXTENT;

/// Intrinsic size of the mark-only layout.
pub const MARK_ONLY_SIZE: Size = Size::new(112.0, 112.0);
/// Intrinsic size of the horizontal layout.
pub const HORIZONTAL_SIZE: Size = Size::new(446.0, 112.0);
/// Intrinsic size of the stacked layout.
pub const STACKED_SIZE: Size = Size::new(290.0, 192.0);

/// Intrinsic size selected by the sign of `position`.
///
/// Magnitude is ignored, so the layout envelope snaps as soon as the position leaves zero.
pub fn intrinsic_size(position: f64) -> Size {
    if position > 0.0 {
        HORIZONTAL_SIZE
    } else if position < 0.0 {
        STACKED_SIZE
    } else {
        MARK_ONLY_SIZE
    }
}

/// Geometry resolved for one paint call.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct LogoFrame {
    /// Rectangle handed to the painter.
    pub target: Rect,
    /// `target` deflated by the decoration margin.
    pub canvas: Rect,
    /// Layout size chosen from the position sign.
    pub intrinsic_size: Size,
    /// `intrinsic_size` contain-fitted into `canvas`.
    pub fitted: Rect,
    /// Largest square centered in `canvas`.
    pub center_square: Rect,
    /// Square the mark occupies once the transition completes.
    pub logo_target_square: Rect,
    /// Square the mark is drawn into at this position.
    pub logo_square: Rect,
    /// Label box in label space.
    pub label_bounds: Rect,
    /// Signed morph position the frame was computed for.
    pub position: f64,
}

impl LogoFrame {
    /// Resolve the frame, or `None` when the margin leaves no paintable area.
    pub fn compute(decoration: &LogoDecoration, target: Rect, label_bounds: Rect) -> Option<Self> {
        let canvas = decoration.margin().deflate_rect(target);
        if is_empty_area(canvas) {
            return None;
        }

        let position = decoration.position();
        let intrinsic_size = intrinsic_size(position);
        let fitted = contain_fit(intrinsic_size, canvas);
        let center_square = center_square(canvas);

        let logo_target_square = if position > 0.0 {
            Rect::new(
                fitted.x0,
                fitted.y0,
                fitted.x0 + fitted.height(),
                fitted.y0 + fitted.height(),
            )
        } else if position < 0.0 {
            let side = fitted.height() * MARK_EXTENT / STACKED_SIZE.height;
            let x0 = fitted.center().x - side / 2.0;
            Rect::new(x0, fitted.y0, x0 + side, fitted.y0 + side)
        } else {
            center_square
        };

        let logo_square = lerp_rect(center_square, logo_target_square, position.abs());

        Some(Self {
            target,
            canvas,
            intrinsic_size,
            fitted,
            center_square,
            logo_target_square,
            logo_square,
            label_bounds,
            position,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/logo/layout.rs"]
mod tests;
