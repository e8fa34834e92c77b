/// Category dispatch from a frame index to a composed [`scene::Scene`].
pub mod frame;
pub(crate) mod figure;
pub(crate) mod routines;
/// Draw commands and the clamping scene builder.
pub mod scene;
