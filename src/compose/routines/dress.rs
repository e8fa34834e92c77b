use crate::animation::motion::MotionState;
use crate::compose::figure::{self, BLUE, GREEN, MOUTH, MOUTH_EDGE, NAVY};
use crate::compose::scene::{Paint, SceneBuilder};
use crate::foundation::core::{Point, Rect, Rgb8};

pub(crate) const BACKGROUND: Rgb8 = Rgb8::new(248, 250, 252);

const CENTER: Point = Point::new(360.0, 450.0);
const HEAD_RADIUS: f64 = 80.0;
const SHIRT_HEIGHT: f64 = 180.0;

pub(crate) fn compose(b: &mut SceneBuilder, m: MotionState) {
    let p = m.progress;
    let (cx, cy) = (CENTER.x, CENTER.y);

    figure::head(b, CENTER, HEAD_RADIUS, 3.0);
    let eye_y = cy - 20.0;
    figure::eye(b, cx - 30.0, eye_y - 8.0, cx - 10.0, eye_y + 8.0);
    figure::eye(b, cx + 10.0, eye_y - 8.0, cx + 30.0, eye_y + 8.0);

    let mouth_half = (25.0 + m.osc(3.0, 6.0)) / 2.0;
    b.ellipse(
        Rect::new(cx - mouth_half, cy + 15.0, cx + mouth_half, cy + 25.0),
        Paint::outlined(MOUTH, MOUTH_EDGE, 2.0),
    );

    // The shirt slides on over the first two thirds and flips colour every eighth.
    let shirt_on = (p * 1.5).min(1.0);
    let shirt = if m.step(8) % 2 == 0 { GREEN } else { BLUE };
    let shirt_top = cy + HEAD_RADIUS;
    let shirt_bottom = shirt_top + (SHIRT_HEIGHT * shirt_on).floor();
    if shirt_on > 0.0 {
        b.rect(
            Rect::new(cx - 60.0, shirt_top, cx + 60.0, shirt_bottom),
            Paint::outlined(shirt, Rgb8::BLACK, 3.0),
        );
        if shirt_on > 0.5 {
            for i in 0..4 {
                let y = shirt_top + 30.0 + f64::from(i) * 30.0;
                if y < shirt_bottom {
                    b.circle(
                        Point::new(cx, y),
                        5.0,
                        Paint::outlined(Rgb8::WHITE, Rgb8::BLACK, 1.0),
                    );
                }
            }
        }
    }

    let swing = m.osc(40.0, 3.0);
    figure::limb(
        b,
        Point::new(cx - 60.0, cy + 120.0),
        Point::new(cx - 80.0 - swing, cy + 100.0 + m.osc(20.0, 4.0)),
        12.0,
    );
    figure::limb(
        b,
        Point::new(cx + 60.0, cy + 120.0),
        Point::new(cx + 80.0 + swing, cy + 100.0 + m.cosc(20.0, 4.0, 0.0)),
        12.0,
    );

    if shirt_on > 0.3 {
        let sleeve = 40.0 + m.osc(20.0, 4.0);
        b.line(
            Point::new(cx - 60.0, cy + 120.0),
            Point::new(cx - 60.0 - sleeve, cy + 140.0),
            15.0,
            shirt,
        );
        b.line(
            Point::new(cx + 60.0, cy + 120.0),
            Point::new(cx + 60.0 + sleeve, cy + 140.0),
            15.0,
            shirt,
        );
    }

    let pants_on = ((p - 0.3) * 1.5).max(0.0);
    if pants_on > 0.0 {
        let top = cy + HEAD_RADIUS + SHIRT_HEIGHT;
        let bottom = top + 100.0 * pants_on;
        b.rect(
            Rect::new(cx - 50.0, top, cx + 50.0, bottom),
            Paint::outlined(BLUE, NAVY, 3.0),
        );
        if pants_on > 0.5 {
            let leg = 60.0 * (pants_on - 0.5) * 2.0;
            b.rect(
                Rect::new(cx - 45.0, bottom - 20.0, cx - 15.0, bottom + leg),
                Paint::outlined(BLUE, NAVY, 2.0),
            );
            b.rect(
                Rect::new(cx + 15.0, bottom - 20.0, cx + 45.0, bottom + leg),
                Paint::outlined(BLUE, NAVY, 2.0),
            );
        }
    }

    if m.reveal(0.6) {
        figure::caption(b, "Getting Dressed!", 42.0, GREEN);
    }
}
