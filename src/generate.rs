//! Request-level pipeline.
//!
//! A request falls through resolver, synthesis or remote inference, and finally the placeholder
//! card. Each stage yields an [`Attempt`]; failures become [`Diagnostic`]s on the output instead of
//! errors, so only a failure of the placeholder path itself reaches the caller.

use std::path::{Path, PathBuf};

use crate::assets::naming::unique_mp4_path;
use crate::assets::recordings::{RecordingLibrary, Resolution};
use crate::classify::category::Category;
use crate::classify::keywords::{CATEGORY_TABLE, classify, validate_table};
use crate::collab::{RemoteVideoSource, VideoPublisher};
use crate::encode::VideoEncoder;
use crate::encode::ffmpeg::FfmpegEncoder;
use crate::fallback::render_placeholder;
use crate::foundation::config::{DEFAULT_DURATION_SECONDS, DEFAULT_FRAME_RATE, EngineConfig};
use crate::foundation::core::Fps;
use crate::foundation::error::{FailureKind, ReelError, ReelResult};
use crate::render::backend::{BackendKind, RenderSettings, create_backend};
use crate::render::pipeline::{RenderThreading, render};
use crate::text::font::FontBook;

/// Storage prefix for published clips.
pub const PUBLISH_PREFIX: &str = "generated";
pub const MP4_CONTENT_TYPE: &str = "video/mp4";

/// A validated animation request.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationRequest {
    prompt: String,
    duration_seconds: f64,
    fps: Fps,
}

impl AnimationRequest {
    /// Any prompt is valid, including an empty one. The duration must be finite and positive,
    /// the frame rate non-zero, and together they must yield at least one frame.
    pub fn new(prompt: impl Into<String>, duration_seconds: f64, frame_rate: u32) -> ReelResult<Self> {
        if !duration_seconds.is_finite() || duration_seconds <= 0.0 {
            return Err(ReelError::validation(
                "duration_seconds must be finite and > 0",
            ));
        }
        let fps = Fps::new(frame_rate)?;
        if fps.frames_for_duration(duration_seconds) == 0 {
            return Err(ReelError::validation(format!(
                "{duration_seconds}s at {frame_rate} fps yields no frames"
            )));
        }
        Ok(Self {
            prompt: prompt.into(),
            duration_seconds,
            fps,
        })
    }

    /// 3 seconds at 24 fps.
    pub fn with_defaults(prompt: impl Into<String>) -> ReelResult<Self> {
        Self::new(prompt, DEFAULT_DURATION_SECONDS, DEFAULT_FRAME_RATE)
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn duration_seconds(&self) -> f64 {
        self.duration_seconds
    }

    pub fn fps(&self) -> Fps {
        self.fps
    }

    pub fn total_frames(&self) -> u64 {
        self.fps.frames_for_duration(self.duration_seconds)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputSource {
    /// Copied from the recording library.
    Recording,
    Synthesized,
    /// Written from remote inference bytes.
    Remote,
    Placeholder,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Resolve,
    Synthesize,
    Remote,
    Placeholder,
    Publish,
}

/// A recovered failure, kept as output metadata.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Diagnostic {
    pub stage: Stage,
    pub kind: FailureKind,
    pub message: String,
}

/// Result of one producing stage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Attempt {
    Rendered(PathBuf),
    Failed(FailureKind),
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct OutputVideo {
    pub path: PathBuf,
    pub category: Category,
    pub source: OutputSource,
    /// Set when a publisher accepted the file.
    pub public_url: Option<String>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Turns prompts into video files.
pub struct Generator {
    config: EngineConfig,
    library: RecordingLibrary,
    settings: RenderSettings,
    encoder: Box<dyn VideoEncoder>,
    remote: Option<Box<dyn RemoteVideoSource>>,
    publisher: Option<Box<dyn VideoPublisher>>,
}

impl Generator {
    /// Validate `config` and the keyword tables, discover a font and use the ffmpeg encoder.
    pub fn new(config: EngineConfig) -> ReelResult<Self> {
        config.validate()?;
        validate_table(CATEGORY_TABLE)?;
        let library = RecordingLibrary::new(&config.recordings_dir)?;
        let settings = RenderSettings {
            fonts: FontBook::discover(config.font_path.as_deref()),
            ..RenderSettings::default()
        };
        Ok(Self {
            library,
            config,
            settings,
            encoder: Box::new(FfmpegEncoder::default()),
            remote: None,
            publisher: None,
        })
    }

    pub fn with_encoder(mut self, encoder: impl VideoEncoder + 'static) -> Self {
        self.encoder = Box::new(encoder);
        self
    }

    pub fn with_remote(mut self, remote: impl RemoteVideoSource + 'static) -> Self {
        self.remote = Some(Box::new(remote));
        self
    }

    pub fn with_publisher(mut self, publisher: impl VideoPublisher + 'static) -> Self {
        self.publisher = Some(Box::new(publisher));
        self
    }

    pub fn with_render_settings(mut self, settings: RenderSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn library(&self) -> &RecordingLibrary {
        &self.library
    }

    /// Request for `prompt` using the configured duration and frame rate.
    pub fn request(&self, prompt: impl Into<String>) -> ReelResult<AnimationRequest> {
        AnimationRequest::new(prompt, self.config.duration_seconds, self.config.frame_rate)
    }

    #[tracing::instrument(skip(self, req), fields(prompt = %req.prompt()))]
    pub fn generate(&self, req: &AnimationRequest) -> ReelResult<OutputVideo> {
        let mut diagnostics = Vec::new();
        let category = classify(req.prompt());

        match self.library.resolve(
            req.prompt(),
            &self.config.output_dir,
            &self.config.filename_prefix,
        ) {
            Ok(Resolution::Found { path, .. }) => {
                return Ok(OutputVideo {
                    path,
                    category,
                    source: OutputSource::Recording,
                    public_url: None,
                    diagnostics,
                });
            }
            Ok(Resolution::Miss) => {}
            Err(e) => record(&mut diagnostics, Stage::Resolve, &e),
        }

        let (stage, source, attempt) = if self.config.demo_mode {
            (
                Stage::Synthesize,
                OutputSource::Synthesized,
                self.synthesize(req, category),
            )
        } else {
            (Stage::Remote, OutputSource::Remote, self.fetch_remote(req))
        };
        let (path, source) = match attempt_from(attempt, stage, &mut diagnostics) {
            Attempt::Rendered(path) => (path, source),
            Attempt::Failed(kind) => {
                tracing::warn!(?stage, ?kind, "falling back to placeholder");
                (self.placeholder(req)?, OutputSource::Placeholder)
            }
        };

        let public_url = self.publish(&path, &mut diagnostics);
        tracing::info!(path = %path.display(), ?category, ?source, "animation ready");
        Ok(OutputVideo {
            path,
            category,
            source,
            public_url,
            diagnostics,
        })
    }

    fn destination(&self, req: &AnimationRequest) -> PathBuf {
        unique_mp4_path(
            &self.config.output_dir,
            &self.config.filename_prefix,
            req.prompt(),
        )
    }

    fn synthesize(&self, req: &AnimationRequest, category: Category) -> ReelResult<PathBuf> {
        let mut backend = create_backend(BackendKind::Cpu, &self.settings);
        let threading = RenderThreading::from(&self.config.threading);
        let frames = render(
            category,
            req.prompt(),
            req.total_frames(),
            backend.as_mut(),
            &threading,
        )?;
        self.encoder
            .encode(&frames, req.fps(), &self.destination(req))
    }

    fn fetch_remote(&self, req: &AnimationRequest) -> ReelResult<PathBuf> {
        use anyhow::Context as _;

        let remote = self
            .remote
            .as_ref()
            .ok_or_else(|| ReelError::remote("no remote video source configured"))?;
        let bytes = remote.fetch(req.prompt())?;
        if bytes.is_empty() {
            return Err(ReelError::remote("remote video source returned no bytes"));
        }
        let dest = self.destination(req);
        std::fs::create_dir_all(&self.config.output_dir).with_context(|| {
            format!(
                "failed to create output directory '{}'",
                self.config.output_dir.display()
            )
        })?;
        std::fs::write(&dest, &bytes)
            .with_context(|| format!("failed to write '{}'", dest.display()))?;
        Ok(dest)
    }

    fn placeholder(&self, req: &AnimationRequest) -> ReelResult<PathBuf> {
        let mut backend = create_backend(BackendKind::Cpu, &self.settings);
        let frames = render_placeholder(
            req.prompt(),
            req.duration_seconds(),
            req.fps(),
            backend.as_mut(),
        );
        self.encoder
            .encode(&frames, req.fps(), &self.destination(req))
    }

    fn publish(&self, path: &Path, diagnostics: &mut Vec<Diagnostic>) -> Option<String> {
        let publisher = self.publisher.as_ref()?;
        let name = path.file_name()?.to_string_lossy();
        let storage_path = format!("{PUBLISH_PREFIX}/{name}");
        let result = std::fs::read(path)
            .map_err(|e| ReelError::Other(anyhow::Error::new(e).context("read output for publish")))
            .and_then(|bytes| publisher.publish(&storage_path, &bytes, MP4_CONTENT_TYPE));
        match result {
            Ok(url) => Some(url),
            Err(e) => {
                record(diagnostics, Stage::Publish, &e);
                None
            }
        }
    }
}

fn attempt_from(
    result: ReelResult<PathBuf>,
    stage: Stage,
    diagnostics: &mut Vec<Diagnostic>,
) -> Attempt {
    match result {
        Ok(path) => Attempt::Rendered(path),
        Err(e) => {
            record(diagnostics, stage, &e);
            Attempt::Failed(e.kind())
        }
    }
}

fn record(diagnostics: &mut Vec<Diagnostic>, stage: Stage, err: &ReelError) {
    tracing::warn!(?stage, error = %err, "stage failed");
    diagnostics.push(Diagnostic {
        stage,
        kind: err.kind(),
        message: err.to_string(),
    });
}

#[cfg(test)]
#[path = "../tests/unit/generate.rs"]
mod tests;
