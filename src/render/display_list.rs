//! Recorded drawing commands with an explicit transform stack.
//!
//! Scopes are closures: [`DisplayList::save`] and [`DisplayList::save_layer`] record the opening
//! op, run the body, then record the matching [`DrawOp::Restore`], so every exit path of the body
//! leaves the list balanced.

use std::sync::Arc;

use kurbo::Shape;

use crate::foundation::color::Color;
use crate::foundation::core::{Affine, BezPath, Point, Rect};
use crate::logo::label::LabelRun;

/// How a fill composites with what is already drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendMode {
    /// Source over.
    #[default]
    Normal,
    /// Multiply the color channels with the backdrop.
    Multiply,
    /// Keep the backdrop, scaled by the source alpha (a mask).
    Modulate,
}

/// One gradient stop.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct GradientStop {
    /// Offset along the gradient in `[0, 1]`.
    pub offset: f32,
    /// Color at the offset.
    pub color: Color,
}

/// Fill source.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Paint {
    /// Flat color.
    Solid {
        /// Fill color.
        color: Color,
    },
    /// Linear gradient between two points in the op's local space.
    LinearGradient {
        /// Point where offset 0 sits.
        start: Point,
        /// Point where offset 1 sits.
        end: Point,
        /// Ordered stops.
        stops: Vec<GradientStop>,
    },
}

impl Paint {
    /// Flat color paint.
    pub fn solid(color: Color) -> Self {
        Self::Solid { color }
    }
}

/// A recorded drawing command. Transforms are absolute (device space).
#[derive(Clone, Debug, serde::Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    /// Push the current transform/clip state.
    Save,
    /// Push state and start an offscreen layer composited back with `opacity` on restore.
    SaveLayer {
        /// Layer bounds in local space.
        bounds: Rect,
        /// Transform of `bounds`.
        transform: Affine,
        /// Alpha applied when the layer is composited.
        opacity: f32,
    },
    /// Pop the state pushed by the matching `Save`/`SaveLayer`.
    Restore,
    /// Intersect the clip with `path` until the enclosing restore.
    Clip {
        /// Clip outline in local space.
        path: BezPath,
        /// Transform of `path`.
        transform: Affine,
    },
    /// Fill `path` with `paint`.
    FillPath {
        /// Outline in local space.
        path: BezPath,
        /// Transform of `path` and of gradient points.
        transform: Affine,
        /// Fill source.
        paint: Paint,
        /// Compositing mode.
        blend: BlendMode,
    },
    /// Draw the shaped label.
    Label {
        /// Shaped label, shared with the painter's cache.
        run: Arc<LabelRun>,
        /// Label-space to device transform.
        transform: Affine,
        /// Glyph color.
        color: Color,
    },
}

/// Ordered list of [`DrawOp`]s plus the recording state.
#[derive(Clone, Debug, Default)]
pub struct DisplayList {
    ops: Vec<DrawOp>,
    current: Affine,
    stack: Vec<Affine>,
}

impl DisplayList {
    /// Empty list with the identity transform.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded ops.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// `true` when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Transform that the next recorded op will carry.
    pub fn current_transform(&self) -> Affine {
        self.current
    }

    /// Number of open save scopes; zero outside of any scope.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Post-multiply the current transform.
    pub fn concat(&mut self, transform: Affine) {
        self.current = self.current * transform;
    }

    /// Run `body` in a save/restore scope.
    pub fn save<R>(&mut self, body: impl FnOnce(&mut Self) -> R) -> R {
        self.ops.push(DrawOp::Save);
        self.scoped(body)
    }

    /// Run `body` inside an offscreen layer bounded by `bounds`, composited with `opacity`.
    pub fn save_layer<R>(
        &mut self,
        bounds: Rect,
        opacity: f32,
        body: impl FnOnce(&mut Self) -> R,
    ) -> R {
        self.ops.push(DrawOp::SaveLayer {
            bounds,
            transform: self.current,
            opacity,
        });
        self.scoped(body)
    }

    fn scoped<R>(&mut self, body: impl FnOnce(&mut Self) -> R) -> R {
        self.stack.push(self.current);
        let out = body(self);
        if let Some(prev) = self.stack.pop() {
            self.current = prev;
        }
        self.ops.push(DrawOp::Restore);
        out
    }

    /// Intersect the clip with `path` for the rest of the enclosing scope.
    pub fn clip_path(&mut self, path: BezPath) {
        debug_assert!(self.depth() > 0, "clip outside of a save scope would leak");
        self.ops.push(DrawOp::Clip {
            path,
            transform: self.current,
        });
    }

    /// Fill an arbitrary path.
    pub fn fill_path(&mut self, path: BezPath, paint: Paint, blend: BlendMode) {
        self.ops.push(DrawOp::FillPath {
            path,
            transform: self.current,
            paint,
            blend,
        });
    }

    /// Fill a rectangle.
    pub fn fill_rect(&mut self, rect: Rect, paint: Paint, blend: BlendMode) {
        self.fill_path(rect.to_path(0.1), paint, blend);
    }

    /// Draw the label with its origin at the local origin.
    pub fn label(&mut self, run: Arc<LabelRun>, color: Color) {
        self.ops.push(DrawOp::Label {
            run,
            transform: self.current,
            color,
        });
    }

    /// `true` when every `Save`/`SaveLayer` has a matching `Restore`.
    pub fn is_balanced(&self) -> bool {
        let mut depth = 0usize;
        for op in &self.ops {
            match op {
                DrawOp::Save | DrawOp::SaveLayer { .. } => depth += 1,
                DrawOp::Restore => {
                    let Some(d) = depth.checked_sub(1) else {
                        return false;
                    };
                    depth = d;
                }
                _ => {}
            }
        }
        depth == 0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/display_list.rs"]
mod tests;
