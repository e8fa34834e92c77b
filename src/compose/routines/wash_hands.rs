use crate::animation::motion::{MotionState, clamp_center, clamp_radius};
use crate::compose::figure::{self, BLUE, DEEP_BLUE, GREY, SILVER, SKIN, SKY, STEEL};
use crate::compose::scene::{Paint, SceneBuilder};
use crate::foundation::core::{Point, Rect, Rgb8};

pub(crate) const BACKGROUND: Rgb8 = Rgb8::new(240, 249, 255);

const SINK: Rect = Rect::new(200.0, 500.0, 520.0, 620.0);
const HAND_RADIUS: f64 = 15.0;
const HEAD_RADIUS: f64 = 50.0;

pub(crate) fn compose(b: &mut SceneBuilder, m: MotionState) {
    let canvas = b.canvas();
    let mid_x = SINK.x0 + SINK.width() / 2.0;
    let mid_y = SINK.y0 + SINK.height() / 2.0;

    b.ellipse(SINK, Paint::outlined(Rgb8::WHITE, STEEL, 4.0));
    b.rect(
        Rect::new(mid_x - 10.0, SINK.y0 - 80.0, mid_x + 10.0, SINK.y0),
        Paint::outlined(SILVER, GREY, 2.0),
    );

    let stream_x = mid_x + m.osc(5.0, 8.0);
    b.line(
        Point::new(mid_x, SINK.y0 - 80.0),
        Point::new(stream_x, mid_y),
        6.0,
        SKY,
    );
    for i in 0..6 {
        let fi = f64::from(i);
        let x = stream_x + m.osc_phase(8.0, 10.0, fi);
        let y = mid_y + fi * 15.0 + m.cosc(5.0, 12.0, fi);
        let r = clamp_radius(2.0 + m.osc_phase(1.0, 15.0, fi), 1.0, 3.0);
        b.circle(Point::new(x, y), r, Paint::outlined(BLUE, DEEP_BLUE, 1.0));
    }

    let wash = m.osc(20.0, 12.0);
    let rub = m.cosc(10.0, 16.0, 0.0);
    let hand = Paint::outlined(SKIN, Rgb8::BLACK, 2.0);
    b.circle(Point::new(mid_x - 30.0 + wash, mid_y + rub), HAND_RADIUS, hand);
    b.circle(Point::new(mid_x + 30.0 - wash, mid_y - rub), HAND_RADIUS, hand);

    for i in 0..10 {
        let fi = f64::from(i);
        let r = clamp_radius(1.0 + m.osc_phase(2.0, 20.0, fi), 1.0, 3.0);
        let x = clamp_center(mid_x + m.osc_phase(40.0, 8.0, fi), r, canvas.width_f64());
        let y = clamp_center(mid_y + m.cosc(30.0, 6.0, fi), r, canvas.height_f64());
        b.circle(Point::new(x, y), r, Paint::outlined(Rgb8::WHITE, SKY, 1.0));
    }

    let head = Point::new(mid_x, SINK.y0 - 150.0);
    figure::head(b, head, HEAD_RADIUS, 3.0);
    let eye_y = head.y - 10.0;
    figure::eye(b, head.x - 20.0, eye_y - 6.0, head.x - 8.0, eye_y + 6.0);
    figure::eye(b, head.x + 8.0, eye_y - 6.0, head.x + 20.0, eye_y + 6.0);
    figure::focused_mouth(b, head.x, head.y + 15.0);

    let pump_x = SINK.x1 + 50.0;
    let pump_base = SINK.y0 - 60.0;
    b.rect(
        Rect::new(pump_x - 15.0, pump_base - 30.0, pump_x + 15.0, pump_base),
        Paint::outlined(Rgb8::WHITE, STEEL, 2.0),
    );
    let pump_y = pump_base - 15.0 - m.osc(5.0, 6.0);
    b.rect(
        Rect::new(pump_x - 8.0, pump_y - 10.0, pump_x + 8.0, pump_y + 10.0),
        Paint::outlined(SILVER, GREY, 1.0),
    );

    if m.reveal(0.3) {
        figure::caption(b, "Washing Hands!", 36.0, DEEP_BLUE);
    }
}
