//! Rasterization of composed scenes.

/// Backend trait and frame buffer type.
pub mod backend;
/// `vello_cpu` backend.
pub mod cpu;
/// Frame loop, sequential or on a rayon pool.
pub mod pipeline;
/// Ordered, uniformly sized frame collections.
pub mod sequence;
