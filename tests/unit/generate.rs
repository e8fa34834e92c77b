use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::encode::ffmpeg::ensure_parent_dir;
use crate::render::sequence::FrameSequence;

/// Writes a small text file instead of a video; fails the first `failures` calls.
struct FakeEncoder {
    failures: AtomicUsize,
}

impl FakeEncoder {
    fn ok() -> Self {
        Self::failing(0)
    }

    fn failing(n: usize) -> Self {
        Self {
            failures: AtomicUsize::new(n),
        }
    }
}

impl VideoEncoder for FakeEncoder {
    fn encode(&self, frames: &FrameSequence, fps: Fps, dest: &Path) -> ReelResult<PathBuf> {
        frames.validate()?;
        if self
            .failures
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
        {
            return Err(ReelError::encode_backend("forced failure"));
        }
        ensure_parent_dir(dest)?;
        std::fs::write(dest, format!("{} frames @ {}", frames.len(), fps.0)).unwrap();
        Ok(dest.to_path_buf())
    }
}

struct FixedRemote(Vec<u8>);

impl RemoteVideoSource for FixedRemote {
    fn fetch(&self, _prompt: &str) -> ReelResult<Vec<u8>> {
        if self.0.is_empty() {
            return Err(ReelError::remote("inference unavailable"));
        }
        Ok(self.0.clone())
    }
}

#[derive(Clone, Default)]
struct LoggingPublisher {
    calls: Arc<Mutex<Vec<(String, String)>>>,
    fail: bool,
}

impl VideoPublisher for LoggingPublisher {
    fn publish(&self, storage_path: &str, _bytes: &[u8], content_type: &str) -> ReelResult<String> {
        self.calls
            .lock()
            .unwrap()
            .push((storage_path.to_string(), content_type.to_string()));
        if self.fail {
            return Err(ReelError::remote("bucket offline"));
        }
        Ok(format!("https://cdn.example/{storage_path}"))
    }
}

fn config(name: &str) -> EngineConfig {
    let root = PathBuf::from("target/brightreel-unit/generate").join(name);
    let _ = std::fs::remove_dir_all(&root);
    EngineConfig {
        duration_seconds: 0.25,
        frame_rate: 8,
        recordings_dir: root.join("recordings"),
        output_dir: root.join("videos"),
        ..EngineConfig::default()
    }
}

fn generator(cfg: EngineConfig, encoder: FakeEncoder) -> Generator {
    Generator::new(cfg)
        .unwrap()
        .with_render_settings(RenderSettings::default())
        .with_encoder(encoder)
}

#[test]
fn construction_checks_config_and_tables() {
    let ok = Generator::new(config("construct")).unwrap();
    assert_eq!(ok.library().root(), ok.config().recordings_dir.as_path());

    let bad = EngineConfig {
        filename_prefix: "../outside".to_string(),
        ..config("construct-bad")
    };
    assert!(matches!(
        Generator::new(bad),
        Err(crate::foundation::error::ReelError::Validation(_))
    ));
}

#[test]
fn request_validation() {
    assert!(AnimationRequest::new("", 3.0, 24).is_ok());
    assert!(AnimationRequest::new("x", 0.0, 24).is_err());
    assert!(AnimationRequest::new("x", f64::NAN, 24).is_err());
    assert!(AnimationRequest::new("x", 3.0, 0).is_err());
    assert!(AnimationRequest::new("x", 0.001, 24).is_err());

    let req = AnimationRequest::with_defaults("Brush your teeth").unwrap();
    assert_eq!(req.total_frames(), 72);
    assert_eq!(req.fps(), Fps(24));
}

#[test]
fn demo_mode_synthesizes_and_classifies() {
    let cfg = config("synth");
    let out_dir = cfg.output_dir.clone();
    let g = generator(cfg, FakeEncoder::ok());
    let out = g.generate(&g.request("Brush your teeth").unwrap()).unwrap();

    assert_eq!(out.source, OutputSource::Synthesized);
    assert_eq!(out.category, Category::BrushTeeth);
    assert!(out.path.starts_with(&out_dir));
    assert!(out.diagnostics.is_empty());
    assert_eq!(std::fs::read_to_string(&out.path).unwrap(), "2 frames @ 8");
}

#[test]
fn recording_hit_short_circuits() {
    let cfg = config("recording");
    std::fs::create_dir_all(&cfg.recordings_dir).unwrap();
    std::fs::write(cfg.recordings_dir.join("reading a book.mp4"), b"clip").unwrap();
    let g = generator(cfg, FakeEncoder::failing(usize::MAX))
        .with_publisher(LoggingPublisher::default());

    let out = g.generate(&g.request("Read a book").unwrap()).unwrap();
    assert_eq!(out.source, OutputSource::Recording);
    assert_eq!(out.category, Category::Read);
    assert_eq!(out.public_url, None);
    assert_eq!(std::fs::read(&out.path).unwrap(), b"clip");
}

#[test]
fn encode_failure_falls_back_to_placeholder() {
    let g = generator(config("placeholder"), FakeEncoder::failing(1));
    let out = g.generate(&g.request("Dance party").unwrap()).unwrap();

    assert_eq!(out.source, OutputSource::Placeholder);
    assert_eq!(out.category, Category::Play);
    assert_eq!(out.diagnostics.len(), 1);
    assert_eq!(out.diagnostics[0].stage, Stage::Synthesize);
    assert_eq!(out.diagnostics[0].kind, FailureKind::EncodeBackend);
    assert!(std::fs::metadata(&out.path).unwrap().len() > 0);
}

#[test]
fn placeholder_failure_is_the_only_surfaced_error() {
    let g = generator(config("terminal"), FakeEncoder::failing(2));
    let err = g.generate(&g.request("anything").unwrap()).unwrap_err();
    assert!(matches!(err, ReelError::EncodeBackend(_)));
}

#[test]
fn remote_bytes_are_written_when_demo_mode_is_off() {
    let cfg = EngineConfig {
        demo_mode: false,
        ..config("remote")
    };
    let g = generator(cfg, FakeEncoder::failing(usize::MAX))
        .with_remote(FixedRemote(b"remote-video".to_vec()));
    let out = g.generate(&g.request("Fly a kite").unwrap()).unwrap();
    assert_eq!(out.source, OutputSource::Remote);
    assert_eq!(std::fs::read(&out.path).unwrap(), b"remote-video");
}

#[test]
fn remote_failure_or_absence_uses_placeholder() {
    let cfg = EngineConfig {
        demo_mode: false,
        ..config("remote-fail")
    };
    let g = generator(cfg, FakeEncoder::ok()).with_remote(FixedRemote(Vec::new()));
    let out = g.generate(&g.request("Fly a kite").unwrap()).unwrap();
    assert_eq!(out.source, OutputSource::Placeholder);
    assert_eq!(out.diagnostics[0].kind, FailureKind::RemoteService);

    let cfg = EngineConfig {
        demo_mode: false,
        ..config("remote-none")
    };
    let g = generator(cfg, FakeEncoder::ok());
    let out = g.generate(&g.request("Fly a kite").unwrap()).unwrap();
    assert_eq!(out.source, OutputSource::Placeholder);
    assert_eq!(out.diagnostics[0].stage, Stage::Remote);
}

#[test]
fn generated_output_is_published_under_generated_prefix() {
    let publisher = LoggingPublisher::default();
    let calls = publisher.calls.clone();
    let g = generator(config("publish"), FakeEncoder::ok()).with_publisher(publisher);
    let out = g.generate(&g.request("Wake up").unwrap()).unwrap();

    let name = out.path.file_name().unwrap().to_string_lossy().into_owned();
    let expected_path = format!("generated/{name}");
    assert_eq!(
        out.public_url.as_deref(),
        Some(format!("https://cdn.example/{expected_path}").as_str())
    );
    assert_eq!(
        calls.lock().unwrap().as_slice(),
        &[(expected_path, MP4_CONTENT_TYPE.to_string())]
    );
}

#[test]
fn publish_failure_is_a_diagnostic() {
    let publisher = LoggingPublisher {
        fail: true,
        ..LoggingPublisher::default()
    };
    let g = generator(config("publish-fail"), FakeEncoder::ok()).with_publisher(publisher);
    let out = g.generate(&g.request("Wake up").unwrap()).unwrap();
    assert_eq!(out.source, OutputSource::Synthesized);
    assert_eq!(out.public_url, None);
    assert_eq!(out.diagnostics[0].stage, Stage::Publish);
    assert!(out.path.exists());
}

#[test]
fn invalid_config_is_rejected() {
    let cfg = EngineConfig {
        frame_rate: 0,
        ..config("invalid")
    };
    assert!(Generator::new(cfg).is_err());
}
