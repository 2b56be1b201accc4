use rayon::prelude::*;

use crate::foundation::color::Color;
use crate::foundation::core::{Affine, BezPath, Point};
use crate::foundation::error::{LogoError, LogoResult};
use crate::logo::label::LabelRun;
use crate::render::display_list::{BlendMode, DisplayList, DrawOp, GradientStop, Paint};
use crate::render::frame::FrameRGBA;
use kurbo::Shape;

/// CPU rasterizer options.
#[derive(Clone, Copy, Debug, Default)]
pub struct CpuRasterizerOpts {
    /// If set, the frame is cleared to this color before replay.
    pub background: Option<Color>,
}

/// Replays [`DisplayList`]s into pixels with `vello_cpu`.
///
/// The render context is kept between calls and reused while the frame size stays the same.
pub struct CpuRasterizer {
    opts: CpuRasterizerOpts,
    ctx: Option<vello_cpu::RenderContext>,
}

impl std::fmt::Debug for CpuRasterizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuRasterizer")
            .field("opts", &self.opts)
            .field("has_ctx", &self.ctx.is_some())
            .finish()
    }
}

impl Default for CpuRasterizer {
    fn default() -> Self {
        Self::new(CpuRasterizerOpts::default())
    }
}

impl CpuRasterizer {
    /// Create a rasterizer; the render context is allocated on first use.
    pub fn new(opts: CpuRasterizerOpts) -> Self {
        Self { opts, ctx: None }
    }

    /// Options in effect.
    pub fn opts(&self) -> CpuRasterizerOpts {
        self.opts
    }

    fn with_ctx_mut<R>(
        &mut self,
        width: u16,
        height: u16,
        f: impl FnOnce(&mut vello_cpu::RenderContext) -> LogoResult<R>,
    ) -> LogoResult<R> {
        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            _ => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();
        let out = f(&mut ctx)?;
        self.ctx = Some(ctx);
        Ok(out)
    }

    /// Rasterize `list` into a `width`×`height` premultiplied frame.
    #[tracing::instrument(level = "debug", skip(self, list), fields(ops = list.ops().len()))]
    pub fn render(&mut self, list: &DisplayList, width: u32, height: u32) -> LogoResult<FrameRGBA> {
        let (w, h) = frame_dims(width, height)?;
        let background = self.opts.background;
        self.with_ctx_mut(w, h, |ctx| {
            if let Some(bg) = background {
                ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
                ctx.set_paint(cpu_color(bg));
                ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                    0.0,
                    0.0,
                    f64::from(w),
                    f64::from(h),
                ));
            }

            replay(ctx, list.ops())?;

            let mut pixmap = vello_cpu::Pixmap::new(w, h);
            ctx.flush();
            ctx.render_to_pixmap(&mut pixmap);
            Ok(FrameRGBA {
                width,
                height,
                data: pixmap.data_as_u8_slice().to_vec(),
                premultiplied: true,
            })
        })
    }
}

/// Rasterize `lists` on the rayon pool, one rasterizer per worker. Output order matches input.
#[tracing::instrument(level = "debug", skip(lists), fields(frames = lists.len()))]
pub fn render_parallel(
    lists: &[DisplayList],
    width: u32,
    height: u32,
    opts: CpuRasterizerOpts,
) -> LogoResult<Vec<FrameRGBA>> {
    frame_dims(width, height)?;
    lists
        .par_iter()
        .map_init(
            || CpuRasterizer::new(opts),
            |raster, list| raster.render(list, width, height),
        )
        .collect()
}

fn frame_dims(width: u32, height: u32) -> LogoResult<(u16, u16)> {
    let w: u16 = width
        .try_into()
        .map_err(|_| LogoError::validation(format!("frame width {width} exceeds u16")))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| LogoError::validation(format!("frame height {height} exceeds u16")))?;
    if w == 0 || h == 0 {
        return Err(LogoError::validation(format!(
            "frame size must be non-zero, got {width}x{height}"
        )));
    }
    Ok((w, h))
}

fn replay(ctx: &mut vello_cpu::RenderContext, ops: &[DrawOp]) -> LogoResult<()> {
    // Layers pushed inside each open save scope; index 0 is the unscoped base.
    let mut pushed: Vec<u32> = vec![0];

    for op in ops {
        match op {
            DrawOp::Save => pushed.push(0),
            DrawOp::SaveLayer {
                bounds,
                transform,
                opacity,
            } => {
                ctx.set_transform(affine_to_cpu(*transform));
                ctx.push_clip_layer(&bezpath_to_cpu(&bounds.to_path(0.1)));
                let mut layers = 1;
                if *opacity < 1.0 {
                    ctx.push_opacity_layer(opacity.clamp(0.0, 1.0));
                    layers += 1;
                }
                pushed.push(layers);
            }
            DrawOp::Restore => {
                if pushed.len() < 2 {
                    return Err(LogoError::render("restore without a matching save"));
                }
                let layers = pushed.pop().unwrap_or(0);
                for _ in 0..layers {
                    ctx.pop_layer();
                }
            }
            DrawOp::Clip { path, transform } => {
                ctx.set_transform(affine_to_cpu(*transform));
                ctx.push_clip_layer(&bezpath_to_cpu(path));
                if let Some(top) = pushed.last_mut() {
                    *top += 1;
                }
            }
            DrawOp::FillPath {
                path,
                transform,
                paint,
                blend,
            } => fill(ctx, path, *transform, paint, *blend),
            DrawOp::Label {
                run,
                transform,
                color,
            } => draw_label(ctx, run, *transform, *color),
        }
    }

    for layers in pushed.drain(..) {
        for _ in 0..layers {
            ctx.pop_layer();
        }
    }
    Ok(())
}

fn fill(
    ctx: &mut vello_cpu::RenderContext,
    path: &BezPath,
    transform: Affine,
    paint: &Paint,
    blend: BlendMode,
) {
    let layer = match blend {
        BlendMode::Normal => None,
        BlendMode::Multiply => Some(vello_cpu::peniko::BlendMode::new(
            vello_cpu::peniko::Mix::Multiply,
            vello_cpu::peniko::Compose::SrcOver,
        )),
        BlendMode::Modulate => Some(vello_cpu::peniko::BlendMode::new(
            vello_cpu::peniko::Mix::Normal,
            vello_cpu::peniko::Compose::DestIn,
        )),
    };
    if let Some(mode) = layer {
        ctx.push_blend_layer(mode);
    }

    ctx.set_transform(affine_to_cpu(transform));
    ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
    match paint {
        Paint::Solid { color } => ctx.set_paint(cpu_color(*color)),
        Paint::LinearGradient { start, end, stops } => {
            ctx.set_paint(linear_gradient(*start, *end, stops));
        }
    }
    ctx.fill_path(&bezpath_to_cpu(path));

    if layer.is_some() {
        ctx.pop_layer();
    }
}

fn draw_label(ctx: &mut vello_cpu::RenderContext, run: &LabelRun, transform: Affine, color: Color) {
    let Some(font) = run.font.as_ref() else {
        tracing::trace!("label has estimated metrics only; nothing to draw");
        return;
    };
    ctx.set_transform(affine_to_cpu(transform));
    ctx.set_paint(cpu_color(color));
    let glyphs = run.glyphs.iter().map(|g| vello_cpu::Glyph {
        id: g.id,
        x: g.x,
        y: g.y,
    });
    ctx.glyph_run(font)
        .font_size(run.font_size)
        .fill_glyphs(glyphs);
}

fn linear_gradient(start: Point, end: Point, stops: &[GradientStop]) -> vello_cpu::peniko::Gradient {
    let stops: Vec<vello_cpu::peniko::ColorStop> = stops
        .iter()
        .map(|s| vello_cpu::peniko::ColorStop::from((s.offset, cpu_color(s.color))))
        .collect();
    vello_cpu::peniko::Gradient::new_linear(
        vello_cpu::kurbo::Point::new(start.x, start.y),
        vello_cpu::kurbo::Point::new(end.x, end.y),
    )
    .with_stops(stops.as_slice())
}

fn cpu_color(c: Color) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
