/// The fixed set of routine categories.
pub mod category;
/// Ordered keyword classifier.
pub mod keywords;
