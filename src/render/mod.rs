//! Recording and rasterization.

/// CPU rasterizer powered by `vello_cpu`.
pub mod cpu;
/// Display list of drawing commands.
pub mod display_list;
/// Rendered frame buffers.
pub mod frame;
