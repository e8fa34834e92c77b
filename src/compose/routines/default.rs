use crate::animation::motion::MotionState;
use crate::compose::figure::{self, BLUE, SKY};
use crate::compose::scene::{Paint, SceneBuilder};
use crate::foundation::core::{Point, Rect, Rgb8};

pub(crate) const BACKGROUND: Rgb8 = Rgb8::new(240, 248, 255);

const REST: Point = Point::new(360.0, 400.0);
const HEAD_RADIUS: f64 = 60.0;
const CAPTION: Rgb8 = Rgb8::new(30, 30, 30);

/// A bouncing character with the prompt printed underneath.
pub(crate) fn compose(b: &mut SceneBuilder, m: MotionState, prompt: &str) {
    let cx = REST.x;
    let cy = REST.y - m.bounce(100.0, 4.0);

    figure::head(b, Point::new(cx, cy), HEAD_RADIUS, 3.0);
    figure::eye(b, cx - 20.0, cy - 15.0, cx - 5.0, cy - 5.0);
    figure::eye(b, cx + 5.0, cy - 15.0, cx + 20.0, cy - 5.0);
    figure::smile(b, cx, cy + 5.0, cy + 20.0, 20.0 + m.osc(5.0, 4.0), 3.0);

    let body_h = 80.0 + m.osc(10.0, 4.0);
    b.rect(
        Rect::new(cx - 40.0, cy + HEAD_RADIUS, cx + 40.0, cy + HEAD_RADIUS + body_h),
        Paint::outlined(SKY, BLUE, 3.0),
    );

    let wave = m.osc(10.0, 2.0);
    let lift = m.cosc(10.0, 2.0, 0.0);
    figure::limb(
        b,
        Point::new(cx - 40.0, cy + 60.0),
        Point::new(cx - 60.0 + wave, cy + 40.0 + lift),
        8.0,
    );
    figure::limb(
        b,
        Point::new(cx + 40.0, cy + 60.0),
        Point::new(cx + 60.0 - wave, cy + 40.0 - lift),
        8.0,
    );

    b.text(prompt.trim(), Point::new(cx, 700.0), 32.0, CAPTION);
}
