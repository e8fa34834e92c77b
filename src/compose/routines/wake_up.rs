use crate::animation::ease::Ease;
use crate::animation::motion::MotionState;
use crate::compose::figure::{self, AMBER, BLUE, GOLD, ORANGE, SKY};
use crate::compose::scene::{Paint, SceneBuilder};
use crate::foundation::core::{Point, Rect, Rgb8};

pub(crate) const BACKGROUND: Rgb8 = Rgb8::new(255, 248, 220);

const SUN_X: f64 = 360.0;
const SUN_RADIUS: f64 = 60.0;
const BED: Rect = Rect::new(200.0, 600.0, 520.0, 750.0);
const BED_FRAME: Rgb8 = Rgb8::new(31, 41, 57);
const BLANKET: Rgb8 = Rgb8::new(167, 139, 250);
const BLANKET_EDGE: Rgb8 = Rgb8::new(139, 92, 246);
const HEAD_RADIUS: f64 = 70.0;

pub(crate) fn compose(b: &mut SceneBuilder, m: MotionState) {
    let p = m.progress;

    let sun_y = 1000.0 - (p * 300.0).floor();
    let sun = Point::new(SUN_X, sun_y);
    b.circle(sun, SUN_RADIUS, Paint::outlined(GOLD, AMBER, 3.0));
    for i in 0..12 {
        let fi = f64::from(i);
        let angle = (fi * 30.0 + p * 360.0).to_radians();
        let len = 80.0 + m.osc_phase(20.0, 4.0, fi);
        let (sin, cos) = angle.sin_cos();
        b.line(
            Point::new(sun.x + cos * (SUN_RADIUS + 20.0), sun.y + sin * (SUN_RADIUS + 20.0)),
            Point::new(sun.x + cos * (SUN_RADIUS + len), sun.y + sin * (SUN_RADIUS + len)),
            3.0,
            GOLD,
        );
    }

    b.rect(BED, Paint::outlined(SKY, BLUE, 3.0));
    b.rect(
        Rect::new(BED.x0, BED.y1 - 20.0, BED.x1, BED.y1),
        Paint::outlined(BED_FRAME, Rgb8::BLACK, 2.0),
    );

    // Sit up from lying in bed to above the headboard.
    let sit = m.eased(Ease::InSine);
    let head_x = BED.x0 + BED.width() / 2.0;
    let head_y = (BED.y0 + 50.0) + ((BED.y0 - 50.0) - (BED.y0 + 50.0)) * sit;
    figure::head(b, Point::new(head_x, head_y), HEAD_RADIUS, 3.0);

    let eye_h = 15.0 * m.ramp_after(0.3);
    if eye_h > 0.0 {
        let ey = head_y - 10.0;
        figure::eye(b, head_x - 25.0, ey - eye_h / 2.0, head_x - 10.0, ey + eye_h / 2.0);
        figure::eye(b, head_x + 10.0, ey - eye_h / 2.0, head_x + 25.0, ey + eye_h / 2.0);
    }

    let smile = m.ramp_after(0.5);
    if smile > 0.0 {
        figure::smile(b, head_x, head_y + 5.0, head_y + 25.0, 30.0 * smile, 3.0);
    }

    let blanket_y = BED.y0 + 20.0 + (1.0 - sit) * 60.0;
    let blanket_h = BED.height() - 40.0 - (1.0 - sit) * 60.0;
    b.rect(
        Rect::new(BED.x0 + 20.0, blanket_y, BED.x1 - 20.0, blanket_y + blanket_h),
        Paint::outlined(BLANKET, BLANKET_EDGE, 2.0),
    );
    for i in 0..5 {
        let y = blanket_y + f64::from(i) * (blanket_h / 5.0);
        b.line(
            Point::new(BED.x0 + 25.0, y),
            Point::new(BED.x1 - 25.0, y),
            1.0,
            BLANKET_EDGE,
        );
    }

    let stretch = m.ramp_after(0.4);
    let shoulder_y = head_y + 30.0;
    let reach = 60.0 + stretch * 40.0;
    let hand_y = shoulder_y - stretch * 40.0 - reach;
    figure::limb(
        b,
        Point::new(head_x - 50.0, shoulder_y),
        Point::new(head_x - 60.0 - stretch * 30.0, hand_y),
        8.0,
    );
    figure::limb(
        b,
        Point::new(head_x + 50.0, shoulder_y),
        Point::new(head_x + 60.0 + stretch * 30.0, hand_y),
        8.0,
    );

    if m.reveal(0.7) {
        figure::caption(b, "Good Morning!", 48.0, ORANGE);
    }
}
