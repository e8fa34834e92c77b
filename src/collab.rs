//! Collaborators the engine hands work to but does not implement.

use crate::foundation::error::ReelResult;

/// Remote text-to-video inference. Returns encoded video bytes.
pub trait RemoteVideoSource: Send + Sync {
    fn fetch(&self, prompt: &str) -> ReelResult<Vec<u8>>;
}

/// Object storage that makes an uploaded file public.
pub trait VideoPublisher: Send + Sync {
    /// Upload `bytes` to `storage_path` and return the public URL.
    fn publish(&self, storage_path: &str, bytes: &[u8], content_type: &str) -> ReelResult<String>;
}
