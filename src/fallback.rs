//! Terminal rendering path: a still caption card that always produces frames.

use crate::compose::scene::{Scene, SceneBuilder};
use crate::foundation::core::{Canvas, Fps, Point, Rgb8};
use crate::render::backend::{FrameRGBA, RenderBackend};
use crate::render::sequence::FrameSequence;

pub const PLACEHOLDER_BACKGROUND: Rgb8 = Rgb8::new(30, 30, 30);
pub const PLACEHOLDER_TEXT: Rgb8 = Rgb8::new(240, 240, 240);
pub const PLACEHOLDER_TEXT_SIZE: f64 = 48.0;

/// Caption card: "Demo video" over the prompt, centered.
pub fn placeholder_scene(prompt: &str, canvas: Canvas) -> Scene {
    let mut b = SceneBuilder::new(canvas, PLACEHOLDER_BACKGROUND);
    let center = Point::new(canvas.width_f64() / 2.0, canvas.height_f64() / 2.0);
    let prompt = prompt.trim();
    let text = if prompt.is_empty() {
        "Demo video".to_string()
    } else {
        format!("Demo video\n{prompt}")
    };
    b.text(text, center, PLACEHOLDER_TEXT_SIZE, PLACEHOLDER_TEXT);
    b.build()
}

/// `round(duration_seconds * fps)` identical frames, at least one.
///
/// Never fails: if the caption cannot be rasterized the frames are plain background.
#[tracing::instrument(skip(backend))]
pub fn render_placeholder(
    prompt: &str,
    duration_seconds: f64,
    fps: Fps,
    backend: &mut dyn RenderBackend,
) -> FrameSequence {
    let canvas = Canvas::PORTRAIT;
    let n = fps.frames_for_duration(duration_seconds).max(1) as usize;
    let blank = || FrameRGBA::solid(canvas.width, canvas.height, PLACEHOLDER_BACKGROUND.to_rgba());

    let frame = match backend.render_scene(&placeholder_scene(prompt, canvas)) {
        Ok(f) if f.is_well_formed() && (f.width, f.height) == (canvas.width, canvas.height) => f,
        Ok(_) => {
            tracing::warn!("placeholder frame had unexpected geometry; using blank frames");
            blank()
        }
        Err(e) => {
            tracing::warn!(error = %e, "placeholder caption failed to render; using blank frames");
            blank()
        }
    };

    FrameSequence::repeat(frame, n).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "placeholder sequence rejected; using blank frames");
        let mut seq = FrameSequence::with_capacity(n);
        for _ in 0..n {
            // Uniform solid frames cannot fail the geometry check.
            let _ = seq.push(blank());
        }
        seq
    })
}

#[cfg(test)]
#[path = "../tests/unit/fallback.rs"]
mod tests;
