use crate::foundation::core::FrameIndex;
use crate::foundation::error::{ReelError, ReelResult};
use crate::render::backend::FrameRGBA;

/// Ordered, uniformly sized frames ready for encoding.
///
/// Geometry is checked on every insert, so a non-empty sequence is always encodable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameSequence {
    frames: Vec<FrameRGBA>,
}

impl FrameSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            frames: Vec::with_capacity(n),
        }
    }

    /// `n` copies of one frame.
    pub fn repeat(frame: FrameRGBA, n: usize) -> ReelResult<Self> {
        let mut seq = Self::with_capacity(n);
        for _ in 0..n {
            seq.push(frame.clone())?;
        }
        Ok(seq)
    }

    /// Rebuild a sequence from frames tagged with their index, in any order.
    ///
    /// Indices must cover `0..n` exactly once.
    pub fn from_indexed(mut frames: Vec<(FrameIndex, FrameRGBA)>) -> ReelResult<Self> {
        frames.sort_by_key(|(idx, _)| *idx);
        let mut seq = Self::with_capacity(frames.len());
        for (expected, (idx, frame)) in frames.into_iter().enumerate() {
            if idx.0 != expected as u64 {
                return Err(ReelError::validation(format!(
                    "frame indices must be contiguous from 0: expected {expected}, got {}",
                    idx.0
                )));
            }
            seq.push(frame)?;
        }
        Ok(seq)
    }

    pub fn push(&mut self, frame: FrameRGBA) -> ReelResult<()> {
        let index = self.frames.len();
        let (expected_width, expected_height) =
            self.dimensions().unwrap_or((frame.width, frame.height));
        if frame.width != expected_width
            || frame.height != expected_height
            || !frame.is_well_formed()
        {
            return Err(ReelError::InconsistentGeometry {
                index,
                expected_width,
                expected_height,
                width: frame.width,
                height: frame.height,
            });
        }
        self.frames.push(frame);
        Ok(())
    }

    /// Encoder precondition: at least one frame.
    pub fn validate(&self) -> ReelResult<()> {
        if self.frames.is_empty() {
            return Err(ReelError::EmptySequence);
        }
        Ok(())
    }

    /// `(width, height)` of every frame, or `None` when empty.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.frames.first().map(|f| (f.width, f.height))
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frames(&self) -> &[FrameRGBA] {
        &self.frames
    }

    pub fn get(&self, i: usize) -> Option<&FrameRGBA> {
        self.frames.get(i)
    }

    pub fn into_frames(self) -> Vec<FrameRGBA> {
        self.frames
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/sequence.rs"]
mod tests;
