use crate::animation::motion::{MotionState, clamp_center, clamp_radius};
use crate::compose::figure::{
    self, AMBER, BLUE, CREAM, DEEP_GREEN, GOLD, GREEN, GREY, SILVER, SKY, STEEL,
};
use crate::compose::scene::{Paint, SceneBuilder};
use crate::foundation::core::{Point, Rect, Rgb8};

pub(crate) const BACKGROUND: Rgb8 = Rgb8::new(240, 253, 244);

const HEAD_RADIUS: f64 = 70.0;
const SURFACE: Rect = Rect::new(150.0, 750.0, 450.0, 770.0);
const SHINE_EDGE: Rgb8 = Rgb8::new(200, 200, 200);
const GRIME_EDGE: Rgb8 = Rgb8::new(107, 114, 128);

/// Width of the wiped part of the surface.
pub(crate) fn cleaned_width(m: MotionState) -> f64 {
    SURFACE.width() * m.progress * 0.8
}

pub(crate) fn compose(b: &mut SceneBuilder, m: MotionState) {
    let canvas = b.canvas();

    let bottle_x = 500.0;
    let bottle_y = 600.0 + m.osc(10.0, 4.0);
    b.rect(
        Rect::new(bottle_x - 20.0, bottle_y - 60.0, bottle_x + 20.0, bottle_y),
        Paint::outlined(Rgb8::WHITE, STEEL, 2.0),
    );
    let trigger_x = bottle_x + m.osc(8.0, 8.0);
    let trigger_y = bottle_y - 40.0;
    b.rect(
        Rect::new(trigger_x - 8.0, trigger_y - 15.0, trigger_x + 8.0, trigger_y + 5.0),
        Paint::outlined(SILVER, GREY, 1.0),
    );
    for i in 0..5 {
        let fi = f64::from(i);
        let r = clamp_radius(1.0 + m.osc_phase(2.0, 15.0, fi), 1.0, 3.0);
        let x = trigger_x + 15.0 + fi * 12.0 + m.osc_phase(6.0, 12.0, fi);
        let y = trigger_y - 10.0 + m.cosc(4.0, 10.0, fi);
        b.circle(
            Point::new(
                clamp_center(x, r, canvas.width_f64()),
                clamp_center(y, r, canvas.height_f64()),
            ),
            r,
            Paint::outlined(SKY, BLUE, 1.0),
        );
    }

    let cx = 300.0 + m.osc(50.0, 6.0);
    let cy = 500.0;
    figure::head(b, Point::new(cx, cy), HEAD_RADIUS, 3.0);
    let eye_y = cy - 15.0;
    figure::eye(b, cx - 25.0, eye_y - 6.0, cx - 10.0, eye_y + 6.0);
    figure::eye(b, cx + 10.0, eye_y - 6.0, cx + 25.0, eye_y + 6.0);
    figure::focused_mouth(b, cx, cy + 20.0);

    b.rect(
        Rect::new(cx - 50.0, cy + HEAD_RADIUS, cx + 50.0, cy + HEAD_RADIUS + 120.0),
        Paint::outlined(GREEN, DEEP_GREEN, 3.0),
    );

    let wipe = m.osc(30.0, 10.0);
    let left_hand = Point::new(cx - 70.0 + wipe, cy + 60.0 + m.osc(15.0, 8.0));
    figure::limb(b, Point::new(cx - 50.0, cy + 80.0), left_hand, 10.0);
    b.circle(
        Point::new(left_hand.x + 10.0, left_hand.y + m.osc(8.0, 12.0)),
        20.0,
        Paint::outlined(CREAM, GOLD, 2.0),
    );
    figure::limb(
        b,
        Point::new(cx + 50.0, cy + 80.0),
        Point::new(cx + 80.0 - wipe * 0.5, cy + 60.0 + m.cosc(10.0, 8.0, 0.0)),
        10.0,
    );

    for i in 0..8 {
        let fi = f64::from(i);
        let r = 2.0 + m.osc_phase(3.0, 14.0, fi);
        if r > 1.0 {
            let x = 200.0 + m.osc_phase(100.0, 7.0, fi);
            let y = 700.0 + m.cosc(50.0, 9.0, fi);
            b.circle(Point::new(x, y), r, Paint::outlined(GOLD, AMBER, 1.0));
        }
    }

    b.rect(SURFACE, Paint::outlined(STEEL, GRIME_EDGE, 2.0));
    let clean = cleaned_width(m);
    if clean > 0.0 {
        b.rect(
            Rect::new(SURFACE.x0, SURFACE.y0, SURFACE.x0 + clean, SURFACE.y1),
            Paint::outlined(Rgb8::WHITE, SHINE_EDGE, 1.0),
        );
    }

    if m.reveal(0.3) {
        figure::caption(b, "Cleaning Up!", 38.0, GREEN);
    }
}
