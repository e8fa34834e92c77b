//! One builder per category. Each exposes its background colour and a `compose` function.

pub(crate) mod bath;
pub(crate) mod brush_teeth;
pub(crate) mod clean;
pub(crate) mod default;
pub(crate) mod dress;
pub(crate) mod eat_breakfast;
pub(crate) mod play;
pub(crate) mod read;
pub(crate) mod wake_up;
pub(crate) mod wash_hands;
