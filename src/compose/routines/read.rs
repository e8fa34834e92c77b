use crate::animation::motion::MotionState;
use crate::compose::figure::{self, MOUTH_EDGE};
use crate::compose::scene::{Paint, SceneBuilder};
use crate::foundation::core::{Point, Rect, Rgb8};

pub(crate) const BACKGROUND: Rgb8 = Rgb8::new(255, 250, 240);

const BOOK_CENTER: Point = Point::new(360.0, 640.0);
const BOOK_WIDTH: f64 = 400.0;
const BOOK_HEIGHT: f64 = 280.0;
const LINES_PER_PAGE: u32 = 8;
const COVER: Rgb8 = Rgb8::new(220, 53, 69);
const PAGE_EDGE: Rgb8 = Rgb8::new(100, 100, 100);
const INK: Rgb8 = Rgb8::new(50, 50, 50);
const SHIRT: Rgb8 = Rgb8::new(100, 150, 255);
const SHIRT_EDGE: Rgb8 = Rgb8::new(50, 100, 200);
const CHARACTER: Point = Point::new(360.0, 400.0);
const HEAD_RADIUS: f64 = 60.0;

pub(crate) fn compose(b: &mut SceneBuilder, m: MotionState) {
    let (bx, by) = (BOOK_CENTER.x, BOOK_CENTER.y);
    let half_w = BOOK_WIDTH / 2.0;
    let half_h = BOOK_HEIGHT / 2.0;

    b.rect(
        Rect::new(bx - half_w - 10.0, by - half_h, bx - half_w, by + half_h),
        Paint::outlined(COVER, MOUTH_EDGE, 3.0),
    );
    b.rect(
        Rect::new(bx - half_w, by - half_h, bx - 10.0, by + half_h),
        Paint::outlined(Rgb8::WHITE, PAGE_EDGE, 3.0),
    );
    let turn = m.osc(8.0, 3.0);
    b.rect(
        Rect::new(bx + 10.0, by - half_h, bx + half_w + turn, by + half_h),
        Paint::outlined(Rgb8::WHITE, PAGE_EDGE, 3.0),
    );

    for page_x in [bx - half_w + 30.0, bx + 30.0] {
        for i in 0..LINES_PER_PAGE {
            let y = by - 100.0 + f64::from(i) * 25.0;
            let len = 140.0 - f64::from(i % 2) * 20.0;
            b.rect(Rect::new(page_x, y, page_x + len, y + 3.0), Paint::fill(INK));
        }
    }

    let icon = Point::new(b.canvas().width_f64() / 2.0, figure::CAPTION_Y);
    book_icon(b, icon);

    let (cx, cy) = (CHARACTER.x, CHARACTER.y);
    figure::head(b, CHARACTER, HEAD_RADIUS, 3.0);
    let blink = m.blink(80, 75, 0.2);
    let eye_top = cy - 23.0;
    figure::eye(b, cx - 25.0, eye_top, cx - 10.0, eye_top + 16.0 * blink);
    figure::eye(b, cx + 10.0, eye_top, cx + 25.0, eye_top + 16.0 * blink);
    figure::smile(b, cx, cy + 10.0, cy + 30.0, 20.0, 3.0);

    b.rect(
        Rect::new(cx - 45.0, cy + HEAD_RADIUS, cx + 45.0, cy + HEAD_RADIUS + 100.0),
        Paint::outlined(SHIRT, SHIRT_EDGE, 3.0),
    );
    figure::limb(
        b,
        Point::new(cx - 45.0, cy + 80.0),
        Point::new(bx - half_w - 15.0, by),
        12.0,
    );
    figure::limb(
        b,
        Point::new(cx + 45.0, cy + 80.0),
        Point::new(bx + half_w + 15.0, by),
        12.0,
    );

    b.text("Reading a Book", Point::new(360.0, 1100.0), 48.0, SHIRT_EDGE);
}

/// Small open book drawn above the scene.
fn book_icon(b: &mut SceneBuilder, center: Point) {
    let (x, y) = (center.x, center.y);
    b.rect(
        Rect::new(x - 42.0, y - 28.0, x - 2.0, y + 28.0),
        Paint::outlined(Rgb8::WHITE, COVER, 4.0),
    );
    b.rect(
        Rect::new(x + 2.0, y - 28.0, x + 42.0, y + 28.0),
        Paint::outlined(Rgb8::WHITE, COVER, 4.0),
    );
    for i in 0..3 {
        let ly = y - 12.0 + f64::from(i) * 12.0;
        b.line(Point::new(x - 34.0, ly), Point::new(x - 10.0, ly), 2.0, INK);
        b.line(Point::new(x + 10.0, ly), Point::new(x + 34.0, ly), 2.0, INK);
    }
}
