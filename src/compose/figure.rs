//! Shared character parts and palette.

use crate::compose::scene::{Paint, SceneBuilder};
use crate::foundation::core::{Point, Rect, Rgb8};

pub(crate) const SKIN: Rgb8 = Rgb8::new(253, 230, 138);
pub(crate) const PUPIL: Rgb8 = Rgb8::new(17, 24, 39);
pub(crate) const MOUTH: Rgb8 = Rgb8::new(239, 68, 68);
pub(crate) const MOUTH_EDGE: Rgb8 = Rgb8::new(185, 28, 28);
pub(crate) const SKY: Rgb8 = Rgb8::new(147, 197, 253);
pub(crate) const BLUE: Rgb8 = Rgb8::new(59, 130, 246);
pub(crate) const DEEP_BLUE: Rgb8 = Rgb8::new(37, 99, 235);
pub(crate) const NAVY: Rgb8 = Rgb8::new(29, 78, 216);
pub(crate) const GREEN: Rgb8 = Rgb8::new(34, 197, 94);
pub(crate) const DEEP_GREEN: Rgb8 = Rgb8::new(22, 163, 74);
pub(crate) const GOLD: Rgb8 = Rgb8::new(251, 191, 36);
pub(crate) const AMBER: Rgb8 = Rgb8::new(245, 158, 11);
pub(crate) const SILVER: Rgb8 = Rgb8::new(192, 192, 192);
pub(crate) const GREY: Rgb8 = Rgb8::new(128, 128, 128);
pub(crate) const STEEL: Rgb8 = Rgb8::new(156, 163, 175);
pub(crate) const CREAM: Rgb8 = Rgb8::new(254, 243, 199);
pub(crate) const ORANGE: Rgb8 = Rgb8::new(255, 140, 0);

/// Vertical position of the top-of-frame caption.
pub(crate) const CAPTION_Y: f64 = 200.0;

pub(crate) fn head(b: &mut SceneBuilder, center: Point, radius: f64, outline: f64) {
    b.circle(center, radius, Paint::outlined(SKIN, Rgb8::BLACK, outline));
}

/// A solid eye spanning `x0..x1` horizontally and `y0..y1` vertically.
pub(crate) fn eye(b: &mut SceneBuilder, x0: f64, y0: f64, x1: f64, y1: f64) {
    b.ellipse(Rect::new(x0, y0, x1, y1), Paint::fill(PUPIL));
}

/// Lower-half arc from `(cx - half_width, top)` to `(cx + half_width, bottom)`.
pub(crate) fn smile(b: &mut SceneBuilder, cx: f64, top: f64, bottom: f64, half_width: f64, width: f64) {
    b.arc(
        Rect::new(cx - half_width, top, cx + half_width, bottom),
        0.0,
        180.0,
        width,
        MOUTH,
    );
}

/// Two short slanted strokes: a focused, tight-lipped mouth.
pub(crate) fn focused_mouth(b: &mut SceneBuilder, cx: f64, y: f64) {
    b.line(Point::new(cx - 15.0, y), Point::new(cx - 5.0, y + 5.0), 2.0, MOUTH);
    b.line(Point::new(cx + 5.0, y + 5.0), Point::new(cx + 15.0, y), 2.0, MOUTH);
}

pub(crate) fn limb(b: &mut SceneBuilder, from: Point, to: Point, width: f64) {
    b.line(from, to, width, SKIN);
}

/// Caption centered horizontally near the top of the frame.
pub(crate) fn caption(b: &mut SceneBuilder, text: &str, size_px: f64, color: Rgb8) {
    let cx = b.canvas().width_f64() / 2.0;
    b.text(text, Point::new(cx, CAPTION_Y), size_px, color);
}
