use super::*;

use crate::compose::routines::{bath, clean};
use crate::compose::scene::DrawOp;
use crate::foundation::core::Rect;

const PROBES: [f64; 6] = [0.0, 1e-6, 0.25, 0.5, 1.0 - 1e-6, 1.0];

fn inside(canvas: Canvas, r: Rect) -> bool {
    r.x0 >= 0.0
        && r.y0 >= 0.0
        && r.x1 <= canvas.width_f64()
        && r.y1 <= canvas.height_f64()
        && r.x0 <= r.x1
        && r.y0 <= r.y1
}

#[test]
fn every_op_stays_on_canvas_near_the_ends() {
    let canvas = Canvas::PORTRAIT;
    for category in Category::ALL {
        for p in PROBES {
            let scene = compose_frame(category, "prompt", MotionState::at_progress(p), canvas);
            assert!(!scene.ops.is_empty(), "{category} at {p}");
            for op in &scene.ops {
                assert!(inside(canvas, op.bounds()), "{category} at {p}: {op:?}");
            }
        }
    }
}

#[test]
fn every_frame_of_a_clip_stays_on_canvas() {
    let canvas = Canvas::PORTRAIT;
    for category in Category::ALL {
        for i in 0..72 {
            let scene = compose_frame(category, "x", MotionState::new(i, 72), canvas);
            assert!(scene.ops.iter().all(|op| inside(canvas, op.bounds())));
        }
    }
}

#[test]
fn backgrounds_match_categories() {
    assert_eq!(background_for(Category::BrushTeeth), Rgb8::new(240, 248, 255));
    assert_eq!(background_for(Category::WakeUp), Rgb8::new(255, 248, 220));
    assert_eq!(background_for(Category::EatBreakfast), Rgb8::new(255, 253, 208));
    assert_eq!(background_for(Category::Dress), Rgb8::new(248, 250, 252));
    assert_eq!(background_for(Category::Bath), Rgb8::new(219, 234, 254));
    assert_eq!(background_for(Category::WashHands), Rgb8::new(240, 249, 255));
    assert_eq!(background_for(Category::Play), Rgb8::new(254, 243, 199));
    assert_eq!(background_for(Category::Read), Rgb8::new(255, 250, 240));
    assert_eq!(background_for(Category::Clean), Rgb8::new(240, 253, 244));
    assert_eq!(background_for(Category::Default), Rgb8::new(240, 248, 255));
}

#[test]
fn composition_is_pure() {
    for category in Category::ALL {
        for i in [0, 15, 37, 71] {
            let m = MotionState::new(i, 72);
            let a = compose_frame(category, "same", m, Canvas::PORTRAIT);
            let b = compose_frame(category, "same", m, Canvas::PORTRAIT);
            assert_eq!(a, b, "{category} frame {i}");
        }
    }
}

fn caption_shown(category: Category, p: f64, text: &str) -> bool {
    compose_frame(category, "", MotionState::at_progress(p), Canvas::PORTRAIT)
        .texts()
        .any(|t| t == text)
}

#[test]
fn overlays_reveal_after_their_thresholds() {
    let cases = [
        (Category::WakeUp, 0.7, "Good Morning!"),
        (Category::EatBreakfast, 0.5, "Yum!"),
        (Category::Dress, 0.6, "Getting Dressed!"),
        (Category::Bath, 0.4, "Bath Time!"),
        (Category::WashHands, 0.3, "Washing Hands!"),
        (Category::Play, 0.2, "Play Time!"),
        (Category::Clean, 0.3, "Cleaning Up!"),
    ];
    for (category, threshold, text) in cases {
        assert!(!caption_shown(category, threshold, text), "{category}");
        assert!(caption_shown(category, threshold + 0.01, text), "{category}");
    }
    assert!(caption_shown(Category::Read, 0.0, "Reading a Book"));
}

#[test]
fn default_prints_the_prompt() {
    let blank = compose_frame(
        Category::Default,
        "   ",
        MotionState::at_progress(0.4),
        Canvas::PORTRAIT,
    );
    assert_eq!(blank.texts().count(), 0);
    let scene = compose_frame(
        Category::Default,
        "  fly a kite ",
        MotionState::at_progress(0.4),
        Canvas::PORTRAIT,
    );
    assert_eq!(scene.texts().collect::<Vec<_>>(), vec!["fly a kite"]);
}

#[test]
fn brush_teeth_sparkles_on_every_fifteenth_frame() {
    let count = |i: u64| {
        compose_frame(Category::BrushTeeth, "", MotionState::new(i, 72), Canvas::PORTRAIT)
            .ops
            .len()
    };
    assert_eq!(count(15), count(16) + 1);
    assert_eq!(count(30), count(29) + 1);
}

#[test]
fn bath_water_and_eyes_are_clamped() {
    for i in 0..=1000 {
        let m = MotionState::new(i, 1000);
        let level = bath::water_level(m);
        assert!((20.0..=180.0).contains(&level));
        assert!(bath::eye_height(m) >= 2.0);
    }
}

#[test]
fn cleaned_surface_grows() {
    assert_eq!(clean::cleaned_width(MotionState::at_progress(0.0)), 0.0);
    assert!((clean::cleaned_width(MotionState::at_progress(1.0)) - 240.0).abs() < 1e-9);
}

#[test]
fn wake_up_head_rises() {
    let head_y = |p: f64| {
        let scene = compose_frame(Category::WakeUp, "", MotionState::at_progress(p), Canvas::PORTRAIT);
        // Sun, 12 rays, bed, bed frame, then the head.
        match &scene.ops[15] {
            DrawOp::Ellipse { bounds, .. } => bounds.center().y,
            other => panic!("unexpected op {other:?}"),
        }
    };
    assert!((head_y(0.0) - 650.0).abs() < 1e-9);
    assert!(head_y(0.99) < head_y(0.5));
    assert!(head_y(0.5) < head_y(0.0));
}
