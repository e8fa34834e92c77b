//! Per-frame motion primitives.
//!
//! Every value a scene builder needs is derived from a [`MotionState`] passed by value, so frame
//! `i` is a pure function of `i`, the frame count and the builder's constants.

use std::f64::consts::PI;

use crate::animation::ease::Ease;
use crate::foundation::core::FrameIndex;

/// Normalized time for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionState {
    pub frame: FrameIndex,
    pub total_frames: u64,
    /// `frame / total_frames`, in `[0, 1)`.
    pub progress: f64,
}

impl MotionState {
    pub fn new(frame: u64, total_frames: u64) -> Self {
        let progress = if total_frames == 0 {
            0.0
        } else {
            (frame as f64 / total_frames as f64).clamp(0.0, 1.0)
        };
        Self {
            frame: FrameIndex(frame),
            total_frames,
            progress,
        }
    }

    /// State at an arbitrary progress value; used to probe curve extremes.
    pub fn at_progress(progress: f64) -> Self {
        let progress = if progress.is_finite() {
            progress.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self {
            frame: FrameIndex(0),
            total_frames: 0,
            progress,
        }
    }

    /// `amp * sin(progress * k * pi)`.
    pub fn osc(self, amp: f64, k: f64) -> f64 {
        self.osc_phase(amp, k, 0.0)
    }

    /// `amp * sin(progress * k * pi + phase)`.
    pub fn osc_phase(self, amp: f64, k: f64, phase: f64) -> f64 {
        amp * (self.progress * k * PI + phase).sin()
    }

    /// `amp * cos(progress * k * pi + phase)`.
    pub fn cosc(self, amp: f64, k: f64, phase: f64) -> f64 {
        amp * (self.progress * k * PI + phase).cos()
    }

    /// `amp * |sin(progress * k * pi)|`: a hop that never dips below rest.
    pub fn bounce(self, amp: f64, k: f64) -> f64 {
        amp * (self.progress * k * PI).sin().abs()
    }

    pub fn eased(self, ease: Ease) -> f64 {
        ease.apply(self.progress)
    }

    /// Discrete reveal: `true` once progress is strictly past `threshold`.
    pub fn reveal(self, threshold: f64) -> bool {
        self.progress > threshold
    }

    /// `max(0, (progress - threshold) / (1 - threshold))`, capped at 1.
    pub fn ramp_after(self, threshold: f64) -> f64 {
        let span = 1.0 - threshold;
        if span <= 0.0 {
            return 0.0;
        }
        ((self.progress - threshold) / span).clamp(0.0, 1.0)
    }

    /// `1.0` while open, `closed` for the last frames of each `period`.
    pub fn blink(self, period: u64, open_frames: u64, closed: f64) -> f64 {
        if period == 0 || self.frame.0 % period < open_frames {
            1.0
        } else {
            closed
        }
    }

    /// `floor(progress * steps)`, for stepped effects such as colour flips.
    pub fn step(self, steps: u32) -> u32 {
        (self.progress * f64::from(steps)).floor() as u32
    }

    /// `true` on every `every`-th frame.
    pub fn every(self, every: u64) -> bool {
        every != 0 && self.frame.0.is_multiple_of(every)
    }
}

/// Clamp `v` into `[lo, hi]`; NaN maps to `lo`.
pub fn clamp_range(v: f64, lo: f64, hi: f64) -> f64 {
    if v.is_nan() {
        return lo;
    }
    if hi < lo {
        return lo;
    }
    v.clamp(lo, hi)
}

/// A drawable radius: at least `min`, at most `max`, never negative.
pub fn clamp_radius(r: f64, min: f64, max: f64) -> f64 {
    clamp_range(r, min.max(0.0), max.max(min.max(0.0)))
}

/// Keep a circle of radius `r` inside `[0, limit]` along one axis.
pub fn clamp_center(c: f64, r: f64, limit: f64) -> f64 {
    let r = r.max(0.0).min(limit / 2.0);
    clamp_range(c, r, limit - r)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/motion.rs"]
mod tests;
