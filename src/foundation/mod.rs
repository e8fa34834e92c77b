/// Canvas, colour and frame-rate primitives.
pub mod core;
/// Crate-wide error taxonomy.
pub mod error;
/// Engine configuration (JSON file plus environment overrides).
pub mod config;
pub(crate) mod rng;
