//! logomorph renders an animated brand logo that morphs between three layouts.
//!
//! A [`LogoDecoration`] places the logo on a signed axis (stacked −1, mark-only 0, horizontal +1)
//! and [`LogoDecoration::lerp`] blends between two of them. A [`LogoPainter`] records one frame
//! into a [`DisplayList`], which [`CpuRasterizer`] turns into pixels:
//!
//! - Blend decorations over time with a [`LogoTransition`] or a [`LogoView`]
//! - Paint a decoration into a rectangle with [`LogoPainter::paint`]
//! - Drive the full-screen [`Showcase`] and stream frames into a [`FrameSink`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Easing curves and transitions.
pub mod animation;
/// JSON showcase configuration.
pub mod config;
/// Frame sinks and sequence rendering.
pub mod encode;
/// Logo model, layout and painter.
pub mod logo;
/// Display lists and the CPU rasterizer.
pub mod render;
/// Time-driven hosts for the painter.
pub mod view;

pub use crate::foundation::color::Color;
pub use crate::foundation::core::{
    Affine, BezPath, Canvas, Fps, FrameIndex, FrameRange, Point, Rect, Size, Vec2,
};
pub use crate::foundation::error::{LogoError, LogoResult};
pub use crate::foundation::geometry::EdgeInsets;

pub use crate::animation::ease::Ease;
pub use crate::animation::transition::LogoTransition;
pub use crate::config::ShowcaseConfig;
pub use crate::encode::sequence::{SequenceOpts, SequenceStats, render_sequence};
pub use crate::encode::sink::{FrameSink, InMemorySink, PngSequenceSink, SinkConfig};
pub use crate::logo::decoration::LogoDecoration;
pub use crate::logo::label::{LabelFont, LabelRun};
pub use crate::logo::layout::LogoFrame;
pub use crate::logo::painter::LogoPainter;
pub use crate::logo::style::LogoStyle;
pub use crate::render::cpu::{CpuRasterizer, CpuRasterizerOpts, render_parallel};
pub use crate::render::display_list::{BlendMode, DisplayList, DrawOp, GradientStop, Paint};
pub use crate::render::frame::FrameRGBA;
pub use crate::view::cycler::StyleCycler;
pub use crate::view::logo_view::{AMBIENT_ICON_SIZE, LogoView, LogoViewConfig};
pub use crate::view::showcase::Showcase;
