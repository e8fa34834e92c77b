use super::*;
use crate::compose::scene::DrawOp;
use crate::foundation::error::{ReelError, ReelResult};
use crate::render::backend::RenderSettings;
use crate::render::cpu::CpuBackend;

struct BrokenBackend;

impl RenderBackend for BrokenBackend {
    fn render_scene(&mut self, _scene: &Scene) -> ReelResult<FrameRGBA> {
        Err(ReelError::render("no rasterizer"))
    }
}

#[test]
fn scene_carries_the_prompt_under_the_title() {
    let scene = placeholder_scene("  Fly a kite ", Canvas::PORTRAIT);
    assert_eq!(scene.background, PLACEHOLDER_BACKGROUND);
    let texts: Vec<&str> = scene.texts().collect();
    assert_eq!(texts, vec!["Demo video\nFly a kite"]);
    match &scene.ops[0] {
        DrawOp::Text {
            center,
            size_px,
            color,
            ..
        } => {
            assert_eq!(*center, Point::new(360.0, 640.0));
            assert_eq!(*size_px, PLACEHOLDER_TEXT_SIZE);
            assert_eq!(*color, PLACEHOLDER_TEXT);
        }
        other => panic!("unexpected op {other:?}"),
    }
}

#[test]
fn blank_prompt_keeps_the_title() {
    let scene = placeholder_scene("", Canvas::PORTRAIT);
    assert_eq!(scene.texts().collect::<Vec<_>>(), vec!["Demo video"]);
}

#[test]
fn frame_count_follows_duration_and_is_never_zero() {
    let mut be = CpuBackend::new(RenderSettings::default());
    let seq = render_placeholder("x", 0.5, Fps(24), &mut be);
    assert_eq!(seq.len(), 12);
    assert_eq!(seq.dimensions(), Some((720, 1280)));
    assert_eq!(seq.frames()[0], seq.frames()[11]);

    let seq = render_placeholder("x", 0.001, Fps(24), &mut be);
    assert_eq!(seq.len(), 1);
}

#[test]
fn caption_pixels_are_drawn() {
    let mut be = CpuBackend::new(RenderSettings::default());
    let seq = render_placeholder("hello", 0.1, Fps(10), &mut be);
    let frame = &seq.frames()[0];
    assert_eq!(frame.pixel(0, 0), Some([30, 30, 30, 255]));
    assert!(frame.data.chunks_exact(4).any(|p| p[0] > 200));
}

#[test]
fn render_failure_still_yields_frames() {
    let seq = render_placeholder("x", 1.0, Fps(5), &mut BrokenBackend);
    assert_eq!(seq.len(), 5);
    assert!(seq.frames()[0].data.chunks_exact(4).all(|p| p == [30, 30, 30, 255]));
}
