//! Motion primitives shared by every scene builder.

/// Easing curves.
pub mod ease;
/// Progress-driven oscillators, reveals and clamps.
pub mod motion;
