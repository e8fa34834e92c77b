use crate::animation::motion::MotionState;
use crate::compose::figure::{self, BLUE, DEEP_GREEN, GREEN, MOUTH, MOUTH_EDGE, SKY};
use crate::compose::scene::{Paint, SceneBuilder};
use crate::foundation::core::{Point, Rect, Rgb8};

pub(crate) const BACKGROUND: Rgb8 = Rgb8::new(254, 243, 199);

const HEAD_RADIUS: f64 = 70.0;
const BLOCK: f64 = 40.0;

pub(crate) fn compose(b: &mut SceneBuilder, m: MotionState) {
    let ball = Point::new(150.0 + m.osc(100.0, 4.0), 900.0 - m.bounce(200.0, 4.0));
    let ball_r = 25.0 + m.osc(5.0, 8.0);
    b.circle(ball, ball_r, Paint::outlined(MOUTH, MOUTH_EDGE, 3.0));

    for i in 0..3 {
        let fi = f64::from(i);
        let x = 500.0 + fi * 60.0 + m.osc_phase(20.0, 3.0, fi);
        let y = 850.0 - m.cosc(30.0, 5.0, fi);
        b.rect(
            Rect::new(x - BLOCK / 2.0, y - BLOCK / 2.0, x + BLOCK / 2.0, y + BLOCK / 2.0),
            Paint::outlined(GREEN, DEEP_GREEN, 2.0),
        );
        b.text((i + 1).to_string(), Point::new(x, y), 20.0, Rgb8::WHITE);
    }

    let hop = m.bounce(1.0, 6.0);
    let cx = 360.0 + m.osc(80.0, 6.0);
    let cy = 500.0 - hop * 100.0;
    figure::head(b, Point::new(cx, cy), HEAD_RADIUS, 3.0);

    let eye = 8.0 + m.osc(2.0, 10.0);
    let eye_y = cy - 15.0;
    figure::eye(b, cx - 25.0, eye_y - eye, cx - 10.0, eye_y + eye);
    figure::eye(b, cx + 10.0, eye_y - eye, cx + 25.0, eye_y + eye);

    let grin = 30.0 + m.osc(5.0, 8.0);
    figure::smile(b, cx, cy + 5.0, cy + 25.0, grin, 4.0);

    let body_h = 100.0 + m.osc(20.0, 6.0);
    let hip_y = cy + HEAD_RADIUS + body_h;
    b.rect(
        Rect::new(cx - 40.0, cy + HEAD_RADIUS, cx + 40.0, hip_y),
        Paint::outlined(SKY, BLUE, 3.0),
    );

    let wave = m.osc(40.0, 12.0);
    let hand_y = cy + 40.0 - hop * 30.0;
    figure::limb(b, Point::new(cx - 40.0, cy + 60.0), Point::new(cx - 70.0 + wave, hand_y), 10.0);
    figure::limb(b, Point::new(cx + 40.0, cy + 60.0), Point::new(cx + 70.0 - wave, hand_y), 10.0);

    let stride = m.osc(30.0, 8.0);
    figure::limb(
        b,
        Point::new(cx - 20.0, hip_y),
        Point::new(cx - 25.0 + stride, hip_y + 60.0),
        12.0,
    );
    figure::limb(
        b,
        Point::new(cx + 20.0, hip_y),
        Point::new(cx + 25.0 - stride, hip_y + 60.0),
        12.0,
    );

    if m.reveal(0.2) {
        figure::caption(b, "Play Time!", 42.0, MOUTH);
    }
}
