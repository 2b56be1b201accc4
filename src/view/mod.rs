//! Hosts that drive the painter over time.

/// Periodic style publisher.
pub mod cycler;
/// Configurable animated logo.
pub mod logo_view;
/// Full-screen launch surface.
pub mod showcase;
