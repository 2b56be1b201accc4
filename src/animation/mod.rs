/// Easing curves.
pub mod ease;
/// Decoration transitions over a clock.
pub mod transition;
