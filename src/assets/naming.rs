use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

/// Longest slug kept in an output file name.
pub const MAX_SLUG_CHARS: usize = 40;

static SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// File-name-safe fragment of a prompt: lower-cased, alphanumerics plus `-` and `_`, at most
/// [`MAX_SLUG_CHARS`] characters. Empty when nothing survives.
pub fn slug(prompt: &str) -> String {
    prompt
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '-' || *c == '_')
        .take(MAX_SLUG_CHARS)
        .collect()
}

/// `{prefix}-{slug}-{unix_seconds}-{pid}-{seq}.{ext}`.
///
/// The process id and a process-wide counter keep names unique across concurrent requests for
/// the same prompt within one second.
pub fn unique_file_name(prefix: &str, prompt: &str, ext: &str) -> String {
    let ts = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let seq = SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!(
        "{prefix}-{}-{ts}-{}-{seq}.{ext}",
        slug(prompt),
        std::process::id()
    )
}

/// Fresh `.mp4` destination inside `dir`.
pub fn unique_mp4_path(dir: &Path, prefix: &str, prompt: &str) -> PathBuf {
    dir.join(unique_file_name(prefix, prompt, "mp4"))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/naming.rs"]
mod tests;
