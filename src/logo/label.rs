use std::path::Path;
use std::sync::Arc;

use crate::foundation::core::Rect;
use crate::foundation::error::{LogoError, LogoResult};

/// The word drawn next to (or under) the mark.
pub const LABEL_TEXT: &str = "Flutter";
/// Reference font size: the cap height of the label at size 350 is 247, so at this size the cap
/// height is 100 units and `font_size / 100` is a direct scale factor.
pub const LABEL_FONT_SIZE: f32 = 100.0 * 350.0 / 247.0;
/// Light weight.
pub const LABEL_FONT_WEIGHT: f32 = 300.0;

// Fallback metrics when no font is available, as fractions of the em size.
const ESTIMATED_ADVANCE_EM: f64 = 0.5;
const ESTIMATED_LINE_HEIGHT_EM: f64 = 1.17;

/// User-supplied font bytes for the label.
#[derive(Clone)]
pub struct LabelFont {
    bytes: Arc<Vec<u8>>,
    family: String,
}

impl std::fmt::Debug for LabelFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LabelFont")
            .field("family", &self.family)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl PartialEq for LabelFont {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.bytes, &other.bytes) || self.bytes == other.bytes
    }
}

impl LabelFont {
    /// Validate font bytes by registering them once and reading back the family name.
    pub fn from_bytes(bytes: Vec<u8>) -> LogoResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let family = register_family(&mut font_ctx, &bytes)?;
        Ok(Self {
            bytes: Arc::new(bytes),
            family,
        })
    }

    /// Read and validate a font file.
    pub fn load(path: &Path) -> LogoResult<Self> {
        let bytes = std::fs::read(path).map_err(|e| {
            LogoError::text(format!("failed to read font '{}': {e}", path.display()))
        })?;
        Self::from_bytes(bytes)
    }

    /// Family name reported by the font.
    pub fn family(&self) -> &str {
        &self.family
    }
}

fn register_family(font_ctx: &mut parley::FontContext, bytes: &[u8]) -> LogoResult<String> {
    let families = font_ctx
        .collection
        .register_fonts(parley::fontique::Blob::from(bytes.to_vec()), None);
    let family_id = families
        .first()
        .map(|(id, _)| *id)
        .ok_or_else(|| LogoError::text("no font families registered from font bytes"))?;
    Ok(font_ctx
        .collection
        .family_name(family_id)
        .ok_or_else(|| LogoError::text("registered font family has no name"))?
        .to_string())
}

/// One positioned glyph of the shaped label, in label space.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct LabelGlyph {
    /// Glyph id in the label font.
    pub id: u32,
    /// Pen x from the left edge of the label box.
    pub x: f32,
    /// Baseline y from the top edge of the label box.
    pub y: f32,
}

/// The label laid out once at [`LABEL_FONT_SIZE`]; painters scale it per frame.
#[derive(Clone, serde::Serialize)]
pub struct LabelRun {
    /// Label box in label space, origin at the top-left.
    pub bounds: Rect,
    /// Font size the glyphs were shaped at.
    pub font_size: f32,
    /// Positioned glyphs; empty when the metrics are estimated.
    pub glyphs: Vec<LabelGlyph>,
    #[serde(skip)]
    pub(crate) font: Option<vello_cpu::peniko::FontData>,
}

impl std::fmt::Debug for LabelRun {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LabelRun")
            .field("bounds", &self.bounds)
            .field("font_size", &self.font_size)
            .field("glyphs", &self.glyphs.len())
            .field("has_font", &self.font.is_some())
            .finish()
    }
}

impl LabelRun {
    /// Metrics derived from the em size when no font is available. Carries no glyphs.
    pub fn estimated() -> Self {
        let em = f64::from(LABEL_FONT_SIZE);
        let chars = LABEL_TEXT.chars().count() as f64;
        Self {
            bounds: Rect::new(
                0.0,
                0.0,
                chars * ESTIMATED_ADVANCE_EM * em,
                ESTIMATED_LINE_HEIGHT_EM * em,
            ),
            font_size: LABEL_FONT_SIZE,
            glyphs: Vec::new(),
            font: None,
        }
    }

    /// Label width in label space.
    pub fn width(&self) -> f64 {
        self.bounds.width()
    }

    /// Label height in label space.
    pub fn height(&self) -> f64 {
        self.bounds.height()
    }

    /// `true` when glyphs were shaped from a real font.
    pub fn is_shaped(&self) -> bool {
        self.font.is_some() && !self.glyphs.is_empty()
    }
}

/// Shape the label with `font`, falling back to estimated metrics.
///
/// Never fails: painting must not error, so a shaping failure is logged and replaced by
/// [`LabelRun::estimated`].
pub fn prepare_label(font: Option<&LabelFont>) -> LabelRun {
    let Some(font) = font else {
        return LabelRun::estimated();
    };
    match shape_label(font) {
        Ok(run) => run,
        Err(err) => {
            tracing::warn!(family = font.family(), error = %err, "label shaping failed; using estimated metrics");
            LabelRun::estimated()
        }
    }
}

#[tracing::instrument(skip(font), fields(family = font.family()))]
fn shape_label(font: &LabelFont) -> LogoResult<LabelRun> {
    let mut font_ctx = parley::FontContext::default();
    let mut layout_ctx = parley::LayoutContext::<()>::new();
    let family = register_family(&mut font_ctx, &font.bytes)?;

    let mut builder = layout_ctx.ranged_builder(&mut font_ctx, LABEL_TEXT, 1.0, true);
    builder.push_default(parley::style::StyleProperty::FontStack(
        parley::style::FontStack::Source(std::borrow::Cow::Owned(family)),
    ));
    builder.push_default(parley::style::StyleProperty::FontSize(LABEL_FONT_SIZE));
    builder.push_default(parley::style::StyleProperty::FontWeight(
        parley::style::FontWeight::new(LABEL_FONT_WEIGHT),
    ));

    let mut layout: parley::Layout<()> = builder.build(LABEL_TEXT);
    layout.break_all_lines(None);

    let mut glyphs = Vec::new();
    let mut font_size = LABEL_FONT_SIZE;
    for line in layout.lines() {
        for item in line.items() {
            let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                continue;
            };
            font_size = run.run().font_size();
            glyphs.extend(run.positioned_glyphs().map(|g| LabelGlyph {
                id: g.id,
                x: g.x,
                y: g.y,
            }));
        }
    }
    if glyphs.is_empty() {
        return Err(LogoError::text("label produced no glyphs"));
    }

    let width = f64::from(layout.full_width());
    let height = f64::from(layout.height());
    if !(width > 0.0 && height > 0.0) {
        return Err(LogoError::text("label layout has empty extent"));
    }

    let data = vello_cpu::peniko::FontData::new(
        vello_cpu::peniko::Blob::from(font.bytes.as_ref().clone()),
        0,
    );
    Ok(LabelRun {
        bounds: Rect::new(0.0, 0.0, width, height),
        font_size,
        glyphs,
        font: Some(data),
    })
}
