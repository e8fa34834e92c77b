//! Pre-made recording library and output naming.

pub mod naming;
pub mod recordings;
