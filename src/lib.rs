//! brightreel turns short routine prompts ("Brush your teeth", "Read a book") into portrait
//! animation clips for children.
//!
//! A request flows through:
//!
//! - the [`RecordingLibrary`], which reuses a pre-made clip when the prompt matches one
//! - the keyword [`classify`]er, which picks one of the routine [`Category`] values
//! - the scene composer and CPU rasterizer, which draw every frame procedurally
//! - a [`VideoEncoder`], by default H.264 MP4 through the system `ffmpeg`
//! - the placeholder card, used when everything above fails
//!
//! [`Generator`] runs the whole chain and reports recovered failures as diagnostics.
#![forbid(unsafe_code)]

pub mod animation;
pub mod assets;
pub mod classify;
/// External collaborator contracts.
pub mod collab;
pub mod compose;
/// Video encoding sinks.
pub mod encode;
pub mod fallback;
pub mod foundation;
/// Prompt-to-video pipeline.
pub mod generate;
/// Rendering backend(s).
pub mod render;
pub mod text;

pub use crate::assets::recordings::{RecordingLibrary, Resolution};
pub use crate::classify::category::Category;
pub use crate::classify::keywords::classify;
pub use crate::encode::VideoEncoder;
pub use crate::encode::ffmpeg::{FfmpegEncoder, FfmpegSink, FfmpegSinkOpts, is_ffmpeg_on_path};
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::foundation::config::EngineConfig;
pub use crate::foundation::core::{Canvas, Fps, FrameIndex, Rgb8};
pub use crate::foundation::error::{FailureKind, ReelError, ReelResult};
pub use crate::generate::{AnimationRequest, Generator, OutputSource, OutputVideo};
pub use crate::render::backend::{FrameRGBA, RenderBackend, RenderSettings};
pub use crate::render::cpu::CpuBackend;
pub use crate::render::pipeline::{RenderThreading, render, render_frame};
pub use crate::render::sequence::FrameSequence;
pub use crate::text::font::FontBook;
