//! The logo model and the painter that records it.

/// Immutable logo state and blending.
pub mod decoration;
/// Label shaping and metrics.
pub mod label;
/// Per-paint geometry.
pub mod layout;
/// Mark artwork.
pub mod mark;
/// Display-list recording of a decoration.
pub mod painter;
/// The three discrete layouts.
pub mod style;
