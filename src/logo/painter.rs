//! Records one logo frame into a [`DisplayList`].

use std::cell::OnceCell;
use std::sync::Arc;

use crate::foundation::color::Color;
use crate::foundation::core::{Affine, BezPath, Point, Rect, Vec2};
use crate::foundation::geometry::lerp_f64;
use crate::logo::decoration::{DEFAULT_TEXT_COLOR, LogoDecoration};
use crate::logo::label::{LabelFont, LabelRun, prepare_label};
use crate::logo::layout::{HORIZONTAL_SIZE, LogoFrame};
use crate::logo::mark::paint_mark;
use crate::render::display_list::{BlendMode, DisplayList, GradientStop, Paint};

/// Left edge of the settled horizontal label, in intrinsic units.
const HORIZONTAL_LABEL_LEFT: f64 = 155.0;
/// Label font size relative to the mark height in the horizontal layout.
const HORIZONTAL_FONT_RATIO: f64 = 2.0 / 3.0;
/// Label font size relative to the mark height in the stacked layout.
const STACKED_FONT_RATIO: f64 = 0.35;
/// Half-width of the soft edge of the stacked wipe, in gradient offsets.
const STACKED_WIPE_FEATHER: f64 = 0.1;

/// Paints decorations; owns the lazily shaped label.
///
/// A painter is tied to one text color and font. Hosts build a new painter when either changes,
/// which also drops the cached label.
#[derive(Debug)]
pub struct LogoPainter {
    text_color: Color,
    font: Option<LabelFont>,
    label: OnceCell<Arc<LabelRun>>,
}

impl Default for LogoPainter {
    fn default() -> Self {
        Self::new(DEFAULT_TEXT_COLOR, None)
    }
}

impl LogoPainter {
    /// Painter for `text_color`; the label is shaped with `font` on first use.
    pub fn new(text_color: Color, font: Option<LabelFont>) -> Self {
        Self {
            text_color,
            font,
            label: OnceCell::new(),
        }
    }

    /// Text color this painter was built for.
    pub fn text_color(&self) -> Color {
        self.text_color
    }

    /// Label font, if any.
    pub fn font(&self) -> Option<&LabelFont> {
        self.font.as_ref()
    }

    /// Return `true` when this painter can serve `text_color` and `font` without reshaping.
    pub fn serves(&self, text_color: Color, font: Option<&LabelFont>) -> bool {
        self.text_color == text_color && self.font.as_ref() == font
    }

    /// Shaped label, computed on first call.
    pub fn label(&self) -> &Arc<LabelRun> {
        self.label
            .get_or_init(|| Arc::new(prepare_label(self.font.as_ref())))
    }

    /// Geometry for `decoration` in `target`, or `None` when nothing would be drawn.
    pub fn frame(&self, decoration: &LogoDecoration, target: Rect) -> Option<LogoFrame> {
        LogoFrame::compute(decoration, target, self.label().bounds)
    }

    /// Record `decoration` painted into `target`.
    #[tracing::instrument(level = "trace", skip(self, decoration, list), fields(position = decoration.position()))]
    pub fn paint(&self, decoration: &LogoDecoration, target: Rect, list: &mut DisplayList) {
        decoration.debug_assert_valid();
        let Some(frame) = self.frame(decoration, target) else {
            return;
        };

        if decoration.opacity() < 1.0 {
            list.save_layer(frame.canvas, decoration.opacity() as f32, |list| {
                self.paint_frame(decoration, &frame, list);
            });
        } else {
            self.paint_frame(decoration, &frame, list);
        }
    }

    fn paint_frame(&self, decoration: &LogoDecoration, frame: &LogoFrame, list: &mut DisplayList) {
        let position = frame.position;
        if position > 0.0 {
            self.paint_horizontal_label(decoration, frame, list);
        } else if position < 0.0 {
            self.paint_stacked_label(decoration, frame, list);
        }
        paint_mark(list, frame.logo_square, decoration.color());
    }

    fn paint_horizontal_label(
        &self,
        decoration: &LogoDecoration,
        frame: &LogoFrame,
        list: &mut DisplayList,
    ) {
        let position = frame.position;
        let label = self.label();
        let fitted = frame.fitted;

        let font_size = HORIZONTAL_FONT_RATIO * frame.logo_square.height() * position;
        let scale = font_size / 100.0;
        let final_left = HORIZONTAL_LABEL_LEFT / HORIZONTAL_SIZE.width * fitted.width();
        let initial_left = fitted.width() / 2.0 - label.width() * scale;
        let offset = Vec2::new(
            fitted.x0 + lerp_f64(initial_left, final_left, position),
            fitted.y0 + (fitted.height() - label.height() * scale) / 2.0,
        );
        let transform = label_transform(offset, scale);

        list.save(|list| {
            if position < 1.0 {
                list.clip_path(reveal_wedge(frame.logo_square.center(), fitted.width()));
            }
            list.concat(transform);
            list.label(Arc::clone(label), decoration.text_color());
        });
    }

    fn paint_stacked_label(
        &self,
        decoration: &LogoDecoration,
        frame: &LogoFrame,
        list: &mut DisplayList,
    ) {
        let position = frame.position;
        let label = self.label();

        let font_size = STACKED_FONT_RATIO * frame.logo_target_square.height();
        let scale = font_size / 100.0;
        let offset = Vec2::new(
            frame.logo_target_square.center().x - label.width() * scale,
            frame.fitted.y1 - label.height() * scale,
        );
        let transform = label_transform(offset, scale);

        list.save(|list| {
            list.concat(transform);
            if position > -1.0 {
                list.save_layer(label.bounds, 1.0, |list| {
                    list.label(Arc::clone(label), decoration.text_color());
                    let w = label.width();
                    list.fill_rect(
                        label.bounds.inflate(w * 0.5, 0.0),
                        stacked_wipe(w, position.abs()),
                        BlendMode::Modulate,
                    );
                });
            } else {
                list.label(Arc::clone(label), decoration.text_color());
            }
        });
    }
}

/// Label space to device: place at `offset`, widen 2× relative to the vertical scale.
fn label_transform(offset: Vec2, scale: f64) -> Affine {
    Affine::translate(offset) * Affine::scale_non_uniform(2.0 * scale, scale)
}

/// Triangle from the mark center opening rightwards; the label shows only inside it.
fn reveal_wedge(center: Point, reach: f64) -> BezPath {
    let mut path = BezPath::new();
    path.move_to(center);
    path.line_to((center.x + reach, center.y - reach));
    path.line_to((center.x + reach, center.y + reach));
    path.close_path();
    path
}

/// Left-to-right mask whose opaque part grows with `progress` in `[0, 1]`.
fn stacked_wipe(width: f64, progress: f64) -> Paint {
    let opaque_until = (progress - STACKED_WIPE_FEATHER).max(0.0) as f32;
    let clear_from = (progress + STACKED_WIPE_FEATHER).min(1.0) as f32;
    let clear = Color::WHITE.with_opacity(0.0);
    Paint::LinearGradient {
        start: Point::new(-0.5 * width, 0.0),
        end: Point::new(1.5 * width, 0.0),
        stops: vec![
            GradientStop {
                offset: 0.0,
                color: Color::WHITE,
            },
            GradientStop {
                offset: opaque_until,
                color: Color::WHITE,
            },
            GradientStop {
                offset: clear_from,
                color: clear,
            },
            GradientStop {
                offset: 1.0,
                color: clear,
            },
        ],
    }
}

#[cfg(test)]
#[path = "../../tests/unit/logo/painter.rs"]
mod tests;
