use super::*;
use crate::compose::scene::SceneBuilder;
use crate::foundation::core::Canvas;

const SMALL: Canvas = Canvas {
    width: 64,
    height: 48,
};

fn backend() -> CpuBackend {
    CpuBackend::new(RenderSettings::default())
}

#[test]
fn empty_scene_is_solid_background() {
    let scene = SceneBuilder::new(SMALL, Rgb8::new(10, 20, 30)).build();
    let frame = backend().render_scene(&scene).unwrap();
    assert_eq!((frame.width, frame.height), (64, 48));
    assert!(frame.is_well_formed());
    assert!(frame.premultiplied);
    assert!(frame.data.chunks_exact(4).all(|p| p == [10, 20, 30, 255]));
}

#[test]
fn filled_rect_covers_its_interior_only() {
    let mut b = SceneBuilder::new(SMALL, Rgb8::BLACK);
    b.rect(Rect::new(10.0, 10.0, 30.0, 20.0), Paint::fill(Rgb8::WHITE));
    let frame = backend().render_scene(&b.build()).unwrap();
    assert_eq!(frame.pixel(20, 15), Some([255, 255, 255, 255]));
    assert_eq!(frame.pixel(5, 5), Some([0, 0, 0, 255]));
    assert_eq!(frame.pixel(40, 15), Some([0, 0, 0, 255]));
}

#[test]
fn outline_is_drawn_inside_bounds() {
    let mut b = SceneBuilder::new(SMALL, Rgb8::BLACK);
    b.rect(
        Rect::new(10.0, 10.0, 40.0, 40.0),
        Paint::outlined(Rgb8::WHITE, Rgb8::new(255, 0, 0), 4.0),
    );
    let frame = backend().render_scene(&b.build()).unwrap();
    assert_eq!(frame.pixel(11, 25), Some([255, 0, 0, 255]));
    assert_eq!(frame.pixel(25, 25), Some([255, 255, 255, 255]));
    assert_eq!(frame.pixel(8, 25), Some([0, 0, 0, 255]));
}

#[test]
fn ellipse_leaves_corners_clear() {
    let mut b = SceneBuilder::new(SMALL, Rgb8::BLACK);
    b.ellipse(Rect::new(0.0, 0.0, 40.0, 40.0), Paint::fill(Rgb8::WHITE));
    let frame = backend().render_scene(&b.build()).unwrap();
    assert_eq!(frame.pixel(20, 20), Some([255, 255, 255, 255]));
    assert_eq!(frame.pixel(1, 1), Some([0, 0, 0, 255]));
}

#[test]
fn lower_half_arc_paints_below_center_only() {
    let mut b = SceneBuilder::new(SMALL, Rgb8::BLACK);
    b.arc(Rect::new(10.0, 4.0, 50.0, 44.0), 0.0, 180.0, 4.0, Rgb8::WHITE);
    let frame = backend().render_scene(&b.build()).unwrap();
    let lit = |y0: u32, y1: u32| {
        (y0..y1).any(|y| (0..64).any(|x| frame.pixel(x, y) != Some([0, 0, 0, 255])))
    };
    assert!(lit(30, 44));
    assert!(!lit(0, 20));
}

#[test]
fn builtin_text_draws_near_its_center() {
    let mut b = SceneBuilder::new(SMALL, Rgb8::BLACK);
    b.text("HI", Point::new(32.0, 24.0), 16.0, Rgb8::WHITE);
    let scene = b.build();
    let frame = backend().render_scene(&scene).unwrap();
    let lit: Vec<(u32, u32)> = (0..48)
        .flat_map(|y| (0..64).map(move |x| (x, y)))
        .filter(|&(x, y)| frame.pixel(x, y) == Some([255, 255, 255, 255]))
        .collect();
    assert!(!lit.is_empty());
    assert!(lit.iter().all(|&(x, y)| (8..56).contains(&x) && (8..40).contains(&y)));
}

#[test]
fn rendering_is_repeatable_with_a_reused_context() {
    let mut b = SceneBuilder::new(SMALL, Rgb8::new(1, 2, 3));
    b.circle(Point::new(32.0, 24.0), 10.0, Paint::fill(Rgb8::new(200, 100, 50)));
    let scene = b.build();
    let mut be = backend();
    let a = be.render_scene(&scene).unwrap();
    let c = be.render_scene(&scene).unwrap();
    assert_eq!(a, c);
}

#[test]
fn oversized_canvas_is_a_render_error() {
    let canvas = Canvas {
        width: 70_000,
        height: 4,
    };
    let scene = SceneBuilder::new(canvas, Rgb8::BLACK).build();
    let err = backend().render_scene(&scene).unwrap_err();
    assert!(matches!(err, ReelError::Render(_)));
}
