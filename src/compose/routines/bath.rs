use crate::animation::motion::{MotionState, clamp_radius, clamp_range};
use crate::compose::figure::{self, BLUE, CREAM, DEEP_BLUE, GOLD, SKY, STEEL};
use crate::compose::scene::{Paint, SceneBuilder};
use crate::foundation::core::{Point, Rect, Rgb8};

pub(crate) const BACKGROUND: Rgb8 = Rgb8::new(219, 234, 254);

const TUB: Rect = Rect::new(150.0, 600.0, 570.0, 800.0);
const HEAD_RADIUS: f64 = 60.0;

/// Water surface offset from the tub rim, kept inside `[20, tub_height - 20]`.
pub(crate) fn water_level(m: MotionState) -> f64 {
    let tub_h = TUB.height();
    clamp_range(tub_h - 40.0 - m.osc(10.0, 4.0), 20.0, tub_h - 20.0)
}

/// Eye height while relaxing; never below 2 px.
pub(crate) fn eye_height(m: MotionState) -> f64 {
    let relax = m.osc(0.5, 2.0) + 0.5;
    (12.0 * relax).floor().max(2.0)
}

pub(crate) fn compose(b: &mut SceneBuilder, m: MotionState) {
    b.rect(TUB, Paint::outlined(Rgb8::WHITE, STEEL, 4.0));

    let level = water_level(m);
    let surface = TUB.y0 + level;
    b.rect(
        Rect::new(TUB.x0 + 10.0, surface, TUB.x1 - 10.0, TUB.y1 - 10.0),
        Paint::outlined(BLUE, DEEP_BLUE, 2.0),
    );
    for i in 0..5 {
        let fi = f64::from(i);
        let x = TUB.x0 + 50.0 + fi * 70.0 + m.osc_phase(15.0, 6.0, fi);
        let y = surface + m.cosc(5.0, 8.0, fi);
        let r = clamp_radius(3.0 + m.osc_phase(2.0, 10.0, fi), 1.0, 5.0);
        b.circle(Point::new(x, y), r, Paint::outlined(SKY, BLUE, 1.0));
    }

    // The head always stays above the water line.
    let cx = TUB.x0 + TUB.width() / 2.0;
    let head_y = TUB.y0 + (level - 30.0).max(10.0);
    figure::head(b, Point::new(cx, head_y), HEAD_RADIUS, 3.0);

    let eye_h = eye_height(m);
    let eye_y = head_y - 15.0;
    let top = (eye_y - eye_h / 2.0).max(0.0);
    let bottom = (eye_y + eye_h / 2.0).max(top + 1.0);
    figure::eye(b, cx - 20.0, top, cx - 5.0, bottom);
    figure::eye(b, cx + 5.0, top, cx + 20.0, bottom);

    let smile = 20.0 + m.osc(5.0, 3.0);
    figure::smile(b, cx, head_y + 5.0, head_y + 20.0, smile, 3.0);

    let scrub = m.osc(30.0, 8.0);
    figure::limb(
        b,
        Point::new(cx - 50.0, head_y + 30.0),
        Point::new(
            (cx - 80.0 + scrub).max(TUB.x0 + 10.0),
            head_y + 40.0 + m.osc(10.0, 6.0),
        ),
        10.0,
    );
    figure::limb(
        b,
        Point::new(cx + 50.0, head_y + 30.0),
        Point::new(
            (cx + 80.0 - scrub).min(TUB.x1 - 10.0),
            head_y + 40.0 + m.cosc(10.0, 6.0, 0.0),
        ),
        10.0,
    );

    // Foam only where it sits between the rim and the water surface.
    for i in 0..8 {
        let fi = f64::from(i);
        let x = TUB.x0 + 30.0 + fi * 50.0 + m.osc_phase(20.0, 5.0, fi);
        let y = surface - 20.0 + m.cosc(15.0, 7.0, fi);
        let r = (2.0 + m.osc_phase(3.0, 12.0, fi)).max(1.0);
        if y > TUB.y0 && y < surface && x > TUB.x0 && x < TUB.x1 {
            b.circle(Point::new(x, y), r, Paint::outlined(Rgb8::WHITE, SKY, 1.0));
        }
    }

    let towel_x = TUB.x1 + 30.0;
    let towel_y = TUB.y0 + 50.0 + m.osc(10.0, 4.0);
    b.rect(
        Rect::new(towel_x, towel_y, towel_x + 40.0, towel_y + 60.0),
        Paint::outlined(CREAM, GOLD, 2.0),
    );

    if m.reveal(0.4) {
        figure::caption(b, "Bath Time!", 40.0, DEEP_BLUE);
    }
}
