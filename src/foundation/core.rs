use crate::foundation::error::{ReelError, ReelResult};

pub use kurbo::{Point, Rect, Vec2};

/// Output width in pixels.
pub const CANVAS_WIDTH: u32 = 720;
/// Output height in pixels.
pub const CANVAS_HEIGHT: u32 = 1280;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    /// The fixed portrait canvas every clip is rendered at.
    pub const PORTRAIT: Canvas = Canvas {
        width: CANVAS_WIDTH,
        height: CANVAS_HEIGHT,
    };

    pub fn width_f64(self) -> f64 {
        f64::from(self.width)
    }

    pub fn height_f64(self) -> f64 {
        f64::from(self.height)
    }

    pub fn bounds(self) -> Rect {
        Rect::new(0.0, 0.0, self.width_f64(), self.height_f64())
    }

    pub fn byte_len(self) -> usize {
        self.width as usize * self.height as usize * 4
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::PORTRAIT
    }
}

/// Opaque sRGB colour. Every scene is drawn with solid paints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const WHITE: Rgb8 = Rgb8::new(255, 255, 255);
    pub const BLACK: Rgb8 = Rgb8::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

/// Frame rate plus the derived frame count for a clip duration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps(pub u32);

impl Fps {
    pub fn new(fps: u32) -> ReelResult<Self> {
        if fps == 0 {
            return Err(ReelError::validation("frame rate must be > 0"));
        }
        Ok(Self(fps))
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }

    /// `round(duration_seconds * fps)`.
    pub fn frames_for_duration(self, duration_seconds: f64) -> u64 {
        let n = (duration_seconds * self.as_f64()).round();
        if n.is_finite() && n > 0.0 { n as u64 } else { 0 }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
