use crate::animation::motion::{MotionState, clamp_radius};
use crate::compose::figure::{self, AMBER, BLUE, GOLD, MOUTH, SKIN, SKY};
use crate::compose::scene::{Paint, SceneBuilder};
use crate::foundation::core::{Point, Rect, Rgb8};
use crate::foundation::rng::Rng64;

pub(crate) const BACKGROUND: Rgb8 = Rgb8::new(240, 248, 255);

const CENTER: Point = Point::new(360.0, 400.0);
const HEAD_RADIUS: f64 = 80.0;
const FOAM: Rgb8 = Rgb8::new(200, 200, 200);
const SPARKLE_EVERY: u64 = 15;
const SPARKLE_SALT: u64 = 0x7EE7_B1A5;

pub(crate) fn compose(b: &mut SceneBuilder, m: MotionState) {
    let (cx, cy) = (CENTER.x, CENTER.y);

    figure::head(b, CENTER, HEAD_RADIUS, 2.0);
    b.rect(
        Rect::new(cx - 60.0, cy + HEAD_RADIUS, cx + 60.0, cy + HEAD_RADIUS + 200.0),
        Paint::outlined(SKY, Rgb8::BLACK, 2.0),
    );

    let blink = m.blink(60, 55, 0.1);
    let eye_y = cy - 20.0;
    figure::eye(b, cx - 30.0, eye_y - 10.0, cx - 10.0, eye_y + 10.0 * blink);
    figure::eye(b, cx + 10.0, eye_y - 10.0, cx + 30.0, eye_y + 10.0 * blink);

    let mouth_half = (40.0 + m.osc(10.0, 8.0)) / 2.0;
    b.ellipse(
        Rect::new(cx - mouth_half, cy + 15.0, cx + mouth_half, cy + 30.0),
        Paint::fill(MOUTH),
    );
    for i in 0..6 {
        let x = cx - 25.0 + f64::from(i) * 8.0;
        let y = cy + 20.0;
        b.rect(
            Rect::new(x, y, x + 6.0, y + 8.0),
            Paint::outlined(Rgb8::WHITE, FOAM, 1.0),
        );
    }

    let brush_motion = m.osc(30.0, 6.0);
    let arm_x = cx + 60.0 + brush_motion;
    let arm_y = cy + 40.0;
    b.rect(
        Rect::new(arm_x, arm_y, arm_x + 80.0, arm_y + 20.0),
        Paint::outlined(SKIN, Rgb8::BLACK, 2.0),
    );
    let handle_len = 60.0;
    b.rect(
        Rect::new(arm_x + 60.0, arm_y - 5.0, arm_x + 60.0 + handle_len, arm_y + 25.0),
        Paint::outlined(BLUE, Rgb8::BLACK, 2.0),
    );

    let bristle_x = arm_x + 60.0 + handle_len;
    let bristle_y = arm_y + 10.0 + m.osc(3.0, 12.0);
    b.rect(
        Rect::new(bristle_x, bristle_y - 8.0, bristle_x + 15.0, bristle_y + 8.0),
        Paint::outlined(Rgb8::WHITE, Rgb8::BLACK, 1.0),
    );
    for i in 0..8 {
        let y = bristle_y - 6.0 + f64::from(i) * 1.5;
        b.line(
            Point::new(bristle_x + 2.0, y),
            Point::new(bristle_x + 13.0, y),
            1.0,
            FOAM,
        );
    }

    for i in 0..5 {
        let fi = f64::from(i);
        let x = cx - 20.0 + fi * 8.0 + brush_motion * 0.5;
        let y = cy + 35.0 + m.osc_phase(5.0, 10.0, fi);
        let r = clamp_radius(3.0 + m.osc_phase(2.0, 8.0, fi * 2.0), 1.0, 5.0);
        b.circle(Point::new(x, y), r, Paint::outlined(Rgb8::WHITE, FOAM, 1.0));
    }

    if m.every(SPARKLE_EVERY) {
        let mut rng = Rng64::for_frame(m.frame.0, SPARKLE_SALT);
        let x = cx + rng.range_i64(-40, 40) as f64;
        let y = cy + rng.range_i64(-30, 30) as f64;
        b.circle(Point::new(x, y), 3.0, Paint::outlined(GOLD, AMBER, 1.0));
    }
}
