use std::path::PathBuf;

/// Convenience result type used across brightreel.
pub type ReelResult<T> = Result<T, ReelError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum ReelError {
    /// Invalid request, configuration or table data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Rasterization failed for a composed scene.
    #[error("render error: {0}")]
    Render(String),

    /// The encoder was handed a sequence with no frames.
    #[error("empty frame sequence")]
    EmptySequence,

    /// A frame does not match the geometry of the sequence it belongs to.
    #[error(
        "inconsistent frame geometry at frame {index}: expected {expected_width}x{expected_height}, got {width}x{height}"
    )]
    InconsistentGeometry {
        /// Position of the offending frame in the sequence.
        index: usize,
        /// Sequence width.
        expected_width: u32,
        /// Sequence height.
        expected_height: u32,
        /// Offending frame width.
        width: u32,
        /// Offending frame height.
        height: u32,
    },

    /// The video encoder process or its IO failed.
    #[error("encode backend error: {0}")]
    EncodeBackend(String),

    /// Copying a stored recording into the output directory failed.
    #[error("failed to copy recording '{}' to '{}': {source}", .src.display(), .dest.display())]
    CopyIo {
        /// Library asset being copied.
        src: PathBuf,
        /// Destination file.
        dest: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// An external collaborator (remote inference, storage) failed.
    #[error("remote service error: {0}")]
    RemoteService(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Copyable tag for a [`ReelError`], used in pipeline diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Validation,
    Render,
    EmptySequence,
    InconsistentGeometry,
    EncodeBackend,
    CopyIo,
    RemoteService,
    Other,
}

impl ReelError {
    /// Build a [`ReelError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ReelError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`ReelError::EncodeBackend`] value.
    pub fn encode_backend(msg: impl Into<String>) -> Self {
        Self::EncodeBackend(msg.into())
    }

    /// Build a [`ReelError::RemoteService`] value.
    pub fn remote(msg: impl Into<String>) -> Self {
        Self::RemoteService(msg.into())
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Validation(_) => FailureKind::Validation,
            Self::Render(_) => FailureKind::Render,
            Self::EmptySequence => FailureKind::EmptySequence,
            Self::InconsistentGeometry { .. } => FailureKind::InconsistentGeometry,
            Self::EncodeBackend(_) => FailureKind::EncodeBackend,
            Self::CopyIo { .. } => FailureKind::CopyIo,
            Self::RemoteService(_) => FailureKind::RemoteService,
            Self::Other(_) => FailureKind::Other,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
