use crate::animation::motion::MotionState;
use crate::classify::category::Category;
use crate::compose::routines;
use crate::compose::scene::{Scene, SceneBuilder};
use crate::foundation::core::{Canvas, Rgb8};

/// Background colour a category's frames are cleared to.
pub fn background_for(category: Category) -> Rgb8 {
    match category {
        Category::BrushTeeth => routines::brush_teeth::BACKGROUND,
        Category::WakeUp => routines::wake_up::BACKGROUND,
        Category::EatBreakfast => routines::eat_breakfast::BACKGROUND,
        Category::Dress => routines::dress::BACKGROUND,
        Category::Bath => routines::bath::BACKGROUND,
        Category::WashHands => routines::wash_hands::BACKGROUND,
        Category::Play => routines::play::BACKGROUND,
        Category::Read => routines::read::BACKGROUND,
        Category::Clean => routines::clean::BACKGROUND,
        Category::Default => routines::default::BACKGROUND,
    }
}

/// Compose one frame. Pure: the result depends only on the arguments.
///
/// `prompt` is only drawn by the default builder, which prints it as a caption.
pub fn compose_frame(
    category: Category,
    prompt: &str,
    motion: MotionState,
    canvas: Canvas,
) -> Scene {
    let mut b = SceneBuilder::new(canvas, background_for(category));
    match category {
        Category::BrushTeeth => routines::brush_teeth::compose(&mut b, motion),
        Category::WakeUp => routines::wake_up::compose(&mut b, motion),
        Category::EatBreakfast => routines::eat_breakfast::compose(&mut b, motion),
        Category::Dress => routines::dress::compose(&mut b, motion),
        Category::Bath => routines::bath::compose(&mut b, motion),
        Category::WashHands => routines::wash_hands::compose(&mut b, motion),
        Category::Play => routines::play::compose(&mut b, motion),
        Category::Read => routines::read::compose(&mut b, motion),
        Category::Clean => routines::clean::compose(&mut b, motion),
        Category::Default => routines::default::compose(&mut b, motion, prompt),
    }
    b.build()
}

#[cfg(test)]
#[path = "../../tests/unit/compose/frame.rs"]
mod tests;
