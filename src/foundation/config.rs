use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::error::{ReelError, ReelResult};

/// Default clip length in seconds.
pub const DEFAULT_DURATION_SECONDS: f64 = 3.0;
/// Default output frame rate.
pub const DEFAULT_FRAME_RATE: u32 = 24;

/// Worker pool controls for frame synthesis.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ThreadingConfig {
    /// Render frames on a rayon pool when `true`.
    pub parallel: bool,
    /// Explicit worker count; rayon picks one when unset.
    pub threads: Option<usize>,
    /// Frames handed to the pool per batch.
    pub chunk_size: usize,
}

impl Default for ThreadingConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            threads: None,
            chunk_size: 24,
        }
    }
}

/// Engine configuration, loaded from JSON and overridden from the environment.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub duration_seconds: f64,
    pub frame_rate: u32,
    /// Read-only library of pre-made clips.
    pub recordings_dir: PathBuf,
    /// Where generated and copied clips are written.
    pub output_dir: PathBuf,
    pub filename_prefix: String,
    /// Synthesize locally instead of calling the remote inference collaborator.
    pub demo_mode: bool,
    pub threading: ThreadingConfig,
    /// Font file tried before system font discovery.
    pub font_path: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            duration_seconds: DEFAULT_DURATION_SECONDS,
            frame_rate: DEFAULT_FRAME_RATE,
            recordings_dir: PathBuf::from("recordings"),
            output_dir: PathBuf::from("videos"),
            filename_prefix: "animation".to_string(),
            demo_mode: true,
            threading: ThreadingConfig::default(),
            font_path: None,
        }
    }
}

impl EngineConfig {
    /// Parse a JSON config file. Missing fields take their defaults.
    pub fn from_path(path: &Path) -> ReelResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> ReelResult<Self> {
        let cfg: Self = serde_json::from_str(text)
            .map_err(|e| ReelError::validation(format!("invalid config json: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Apply `BRIGHTREEL_*` environment overrides.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    pub(crate) fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(dir) = lookup("BRIGHTREEL_RECORDINGS_DIR").filter(|v| !v.trim().is_empty()) {
            self.recordings_dir = PathBuf::from(dir);
        }
        if let Some(dir) = lookup("BRIGHTREEL_VIDEOS_DIR").filter(|v| !v.trim().is_empty()) {
            self.output_dir = PathBuf::from(dir);
        }
        if let Some(flag) = lookup("BRIGHTREEL_DEMO_MODE") {
            self.demo_mode = is_truthy(&flag);
        }
        if let Some(n) = lookup("BRIGHTREEL_THREADS")
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|&n| n > 0)
        {
            self.threading.threads = Some(n);
        }
        self
    }

    pub fn validate(&self) -> ReelResult<()> {
        if !self.duration_seconds.is_finite() || self.duration_seconds <= 0.0 {
            return Err(ReelError::validation(
                "duration_seconds must be finite and > 0",
            ));
        }
        if self.frame_rate == 0 {
            return Err(ReelError::validation("frame_rate must be > 0"));
        }
        if self.filename_prefix.trim().is_empty() {
            return Err(ReelError::validation("filename_prefix must be non-empty"));
        }
        if self.filename_prefix.contains(['/', '\\']) || self.filename_prefix.contains("..") {
            return Err(ReelError::validation(
                "filename_prefix must not contain path separators or '..'",
            ));
        }
        if self.threading.threads == Some(0) {
            return Err(ReelError::validation(
                "threading.threads must be >= 1 when set",
            ));
        }
        Ok(())
    }
}

/// `1`, `true` and `yes` (any case) are truthy; everything else is false.
pub fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;
