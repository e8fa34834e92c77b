/// Built-in bitmap face.
pub mod bitmap;
/// Font lookup and parley shaping.
pub mod font;
