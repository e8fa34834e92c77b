use crate::animation::motion::{MotionState, clamp_radius};
use crate::compose::figure::{
    self, AMBER, BLUE, GOLD, GREY, MOUTH, MOUTH_EDGE, NAVY, ORANGE, SILVER, SKIN,
};
use crate::compose::scene::{Paint, SceneBuilder};
use crate::foundation::core::{Point, Rect, Rgb8};

pub(crate) const BACKGROUND: Rgb8 = Rgb8::new(255, 253, 208);

const TABLE_Y: f64 = 800.0;
const TABLE: Rgb8 = Rgb8::new(139, 69, 19);
const TABLE_EDGE: Rgb8 = Rgb8::new(101, 67, 33);
const PLATE: Point = Point::new(360.0, 700.0);
const PLATE_RIM: Rgb8 = Rgb8::new(200, 200, 200);
const PANCAKE: Rgb8 = Rgb8::new(255, 228, 181);
const PANCAKE_EDGE: Rgb8 = Rgb8::new(222, 184, 135);
const CHEEK: Rgb8 = Rgb8::new(255, 182, 193);
const CHEEK_EDGE: Rgb8 = Rgb8::new(255, 105, 180);
const CENTER: Point = Point::new(360.0, 450.0);
const HEAD_RADIUS: f64 = 80.0;

pub(crate) fn compose(b: &mut SceneBuilder, m: MotionState) {
    let p = m.progress;
    let (cx, cy) = (CENTER.x, CENTER.y);
    let width = b.canvas().width_f64();

    b.rect(
        Rect::new(0.0, TABLE_Y, width, TABLE_Y + 100.0),
        Paint::outlined(TABLE, TABLE_EDGE, 3.0),
    );
    b.circle(PLATE, 80.0, Paint::outlined(Rgb8::WHITE, PLATE_RIM, 4.0));

    // The food shrinks as it is eaten and disappears below 5 px.
    let food = 50.0 * (1.0 - p * 0.8);
    if food > 5.0 {
        b.circle(PLATE, food, Paint::outlined(GOLD, AMBER, 2.0));
        for i in 0..3 {
            let fi = f64::from(i);
            let r = food - 10.0 - fi * 5.0;
            if r > 0.0 {
                b.circle(
                    Point::new(PLATE.x, PLATE.y - 10.0 + fi * 8.0),
                    r,
                    Paint::outlined(PANCAKE, PANCAKE_EDGE, 1.0),
                );
            }
        }
    }

    figure::head(b, CENTER, HEAD_RADIUS, 3.0);

    let look = p * 10.0;
    let eye_y = cy - 20.0;
    figure::eye(b, cx - 30.0 + look, eye_y - 8.0, cx - 10.0 + look, eye_y + 8.0);
    figure::eye(b, cx + 10.0 + look, eye_y - 8.0, cx + 30.0 + look, eye_y + 8.0);

    let chew = clamp_radius((12.0 + m.osc(6.0, 8.0)) / 2.0, 1.0, 9.0);
    b.circle(
        Point::new(cx, cy + 15.0),
        chew,
        Paint::outlined(MOUTH, MOUTH_EDGE, 2.0),
    );

    b.rect(
        Rect::new(cx - 50.0, cy + HEAD_RADIUS, cx + 50.0, cy + HEAD_RADIUS + 150.0),
        Paint::outlined(BLUE, NAVY, 3.0),
    );

    let arm_x = cx + 70.0 + m.osc(20.0, 6.0);
    let arm_y = cy + 60.0;
    b.rect(
        Rect::new(arm_x, arm_y, arm_x + 80.0, arm_y + 25.0),
        Paint::outlined(SKIN, Rgb8::BLACK, 2.0),
    );
    let fork_x = arm_x + 70.0;
    let fork_y = arm_y + 12.0;
    let fork_len = 50.0;
    b.rect(
        Rect::new(fork_x, fork_y - 3.0, fork_x + fork_len, fork_y + 3.0),
        Paint::outlined(SILVER, GREY, 1.0),
    );
    let tine_y = fork_y + m.osc(2.0, 4.0);
    b.ellipse(
        Rect::new(fork_x + fork_len - 10.0, tine_y - 8.0, fork_x + fork_len + 5.0, tine_y + 8.0),
        Paint::outlined(SILVER, GREY, 2.0),
    );

    if m.reveal(0.3) {
        b.ellipse(
            Rect::new(cx - 60.0, cy - 10.0, cx - 50.0, cy),
            Paint::outlined(CHEEK, CHEEK_EDGE, 1.0),
        );
        b.ellipse(
            Rect::new(cx + 50.0, cy - 10.0, cx + 60.0, cy),
            Paint::outlined(CHEEK, CHEEK_EDGE, 1.0),
        );
    }

    if m.reveal(0.5) {
        b.text("Yum!", Point::new(cx, cy - 120.0), 36.0, ORANGE);
    }
}
