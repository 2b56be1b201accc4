//! Frame sinks and sequence rendering.
//!
//! Sinks consume rendered frames in timeline order and are fed by [`sequence::render_sequence`].

/// Drive a showcase over a frame range into a sink.
pub mod sequence;
/// Generic frame sink trait and built-in sinks.
pub mod sink;
