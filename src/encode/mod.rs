//! Video encoding.
//!
//! Rendered sequences are streamed into a [`sink::FrameSink`]; [`ffmpeg::FfmpegEncoder`] is the
//! production [`VideoEncoder`] and writes H.264 MP4 through the system `ffmpeg`.

use std::path::{Path, PathBuf};

use crate::foundation::core::Fps;
use crate::foundation::error::ReelResult;
use crate::render::sequence::FrameSequence;

/// `ffmpeg`-based sink and encoder.
pub mod ffmpeg;
/// Frame sink trait and built-in sinks.
pub mod sink;

/// Turns a finished frame sequence into a video file.
pub trait VideoEncoder: Send + Sync {
    /// Encode `frames` at `fps` into `dest` and return the written path.
    ///
    /// Fails with `EmptySequence` for an empty sequence and `EncodeBackend` when the container
    /// could not be written.
    fn encode(&self, frames: &FrameSequence, fps: Fps, dest: &Path) -> ReelResult<PathBuf>;
}
