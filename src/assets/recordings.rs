//! Reuse of pre-made clips.
//!
//! A prompt is first matched against [`RECORDING_TABLE`] (longest phrase first), then against the
//! file names in the library directory. A hit is copied into the output directory under a fresh
//! name; the library itself is never written.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::assets::naming;
use crate::classify::keywords::check_phrase;
use crate::foundation::error::{ReelError, ReelResult};

/// File extensions treated as video assets during the directory scan.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "m4v", "mov", "webm"];

/// Scan words shorter than this never match on their own.
const MIN_SCAN_WORD_CHARS: usize = 3;

/// A phrase that maps to a library file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AssetRecord {
    pub phrase: &'static str,
    pub file: &'static str,
    /// Checked when `file` is absent from the library.
    pub fallback: Option<&'static str>,
}

const fn rec(phrase: &'static str, file: &'static str) -> AssetRecord {
    AssetRecord {
        phrase,
        file,
        fallback: None,
    }
}

const TEETH: &str = "brushing your teeth.mp4";
const CLOTHES: &str = "changing clothes.mp4";
const BREAKFAST: &str = "Eating breakfast.mp4";
const NIGHT: &str = "night clothes.mp4";
const BOOK: &str = "reading a book.mp4";
const WAKING: &str = "waking up.mp4";

/// Phrase table in declaration order. Lookup order is by phrase length, longest first.
pub const RECORDING_TABLE: &[AssetRecord] = &[
    rec("brushing teeth", TEETH),
    rec("brush teeth", TEETH),
    rec("brush your teeth", TEETH),
    rec("teeth", TEETH),
    rec("brush", TEETH),
    rec("tooth", TEETH),
    rec("changing clothes", CLOTHES),
    rec("change clothes", CLOTHES),
    rec("get dressed", CLOTHES),
    rec("put on clothes", CLOTHES),
    rec("dress", CLOTHES),
    AssetRecord {
        phrase: "wear",
        file: CLOTHES,
        fallback: Some("test_dress.mp4"),
    },
    rec("clothes", CLOTHES),
    rec("eating breakfast", BREAKFAST),
    rec("eat breakfast", BREAKFAST),
    rec("breakfast", BREAKFAST),
    rec("eat", BREAKFAST),
    rec("lunch", BREAKFAST),
    rec("dinner", BREAKFAST),
    rec("night clothes", NIGHT),
    rec("pajamas", NIGHT),
    rec("put on pajamas", NIGHT),
    rec("night", NIGHT),
    rec("reading a book", BOOK),
    rec("read a book", BOOK),
    rec("read", BOOK),
    rec("book", BOOK),
    rec("story", BOOK),
    rec("waking up", WAKING),
    rec("wake up", WAKING),
    rec("wake", WAKING),
    rec("morning", WAKING),
];

/// Rejects empty, padded, upper-case or duplicate phrases and empty file names.
pub fn validate_recording_table(table: &[AssetRecord]) -> ReelResult<()> {
    let mut seen = HashSet::new();
    for r in table {
        check_phrase(r.phrase)?;
        if !seen.insert(r.phrase) {
            return Err(ReelError::validation(format!(
                "recording table repeats phrase '{}'",
                r.phrase
            )));
        }
        if r.file.trim().is_empty() || r.fallback.is_some_and(|f| f.trim().is_empty()) {
            return Err(ReelError::validation(format!(
                "recording table entry '{}' has an empty file name",
                r.phrase
            )));
        }
    }
    Ok(())
}

/// How a library file was chosen.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchRule {
    /// A table phrase occurred in the prompt.
    Phrase(String),
    /// The table entry's primary file was missing; its fallback was used.
    PhraseFallback(String),
    /// A library file name matched the prompt.
    FileName,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordingMatch {
    pub source: PathBuf,
    pub rule: MatchRule,
}

/// Outcome of [`RecordingLibrary::resolve`]. A miss is not an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    Found {
        /// Library file that matched.
        source: PathBuf,
        /// Fresh copy in the destination directory.
        path: PathBuf,
        rule: MatchRule,
    },
    Miss,
}

/// Read-only directory of pre-made clips.
#[derive(Clone, Debug)]
pub struct RecordingLibrary {
    root: PathBuf,
    table: &'static [AssetRecord],
    by_length: Vec<usize>,
}

impl RecordingLibrary {
    pub fn new(root: impl Into<PathBuf>) -> ReelResult<Self> {
        Self::with_table(root, RECORDING_TABLE)
    }

    /// Library backed by `table`, which must pass [`validate_recording_table`].
    pub fn with_table(
        root: impl Into<PathBuf>,
        table: &'static [AssetRecord],
    ) -> ReelResult<Self> {
        validate_recording_table(table)?;
        let mut by_length: Vec<usize> = (0..table.len()).collect();
        // Stable: equal lengths keep declaration order.
        by_length.sort_by_key(|&i| std::cmp::Reverse(table[i].phrase.len()));
        Ok(Self {
            root: root.into(),
            table,
            by_length,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Video files in the library, sorted by file name. A missing directory is empty.
    pub fn assets(&self) -> ReelResult<Vec<PathBuf>> {
        use anyhow::Context as _;

        if !self.root.is_dir() {
            return Ok(Vec::new());
        }
        let mut out = Vec::new();
        let rd = std::fs::read_dir(&self.root)
            .with_context(|| format!("read_dir '{}'", self.root.display()))?;
        for entry in rd.flatten() {
            let path = entry.path();
            if path.is_file() && is_video_file(&path) {
                out.push(path);
            }
        }
        out.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(out)
    }

    /// Find a library file for `prompt` without copying anything.
    pub fn find(&self, prompt: &str) -> ReelResult<Option<RecordingMatch>> {
        let prompt = prompt.trim().to_lowercase();
        if prompt.is_empty() {
            return Ok(None);
        }
        if let Some(m) = self.find_in_table(&prompt) {
            return Ok(Some(m));
        }
        self.find_by_file_name(&prompt)
    }

    fn find_in_table(&self, prompt: &str) -> Option<RecordingMatch> {
        for &i in &self.by_length {
            let r = &self.table[i];
            if !prompt.contains(r.phrase) {
                continue;
            }
            let primary = self.root.join(r.file);
            if primary.is_file() {
                return Some(RecordingMatch {
                    source: primary,
                    rule: MatchRule::Phrase(r.phrase.to_string()),
                });
            }
            if let Some(fallback) = r.fallback.map(|f| self.root.join(f))
                && fallback.is_file()
            {
                return Some(RecordingMatch {
                    source: fallback,
                    rule: MatchRule::PhraseFallback(r.phrase.to_string()),
                });
            }
        }
        None
    }

    fn find_by_file_name(&self, prompt: &str) -> ReelResult<Option<RecordingMatch>> {
        for path in self.assets()? {
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if file_name_matches(stem, prompt) {
                return Ok(Some(RecordingMatch {
                    source: path,
                    rule: MatchRule::FileName,
                }));
            }
        }
        Ok(None)
    }

    /// Match `prompt` and copy the hit into `dest_dir` under a fresh name.
    #[tracing::instrument(skip(self), fields(library = %self.root.display()))]
    pub fn resolve(&self, prompt: &str, dest_dir: &Path, prefix: &str) -> ReelResult<Resolution> {
        let Some(found) = self.find(prompt)? else {
            tracing::debug!("no recording matched");
            return Ok(Resolution::Miss);
        };

        let ext = found
            .source
            .extension()
            .and_then(|s| s.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_else(|| "mp4".to_string());
        let dest = dest_dir.join(naming::unique_file_name(prefix, prompt, &ext));
        let copy_err = |source: std::io::Error| ReelError::CopyIo {
            src: found.source.clone(),
            dest: dest.clone(),
            source,
        };
        std::fs::create_dir_all(dest_dir).map_err(copy_err)?;
        std::fs::copy(&found.source, &dest).map_err(copy_err)?;

        tracing::info!(
            src = %found.source.display(),
            dest = %dest.display(),
            rule = ?found.rule,
            "serving recording"
        );
        Ok(Resolution::Found {
            source: found.source,
            path: dest,
            rule: found.rule,
        })
    }
}

fn is_video_file(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| VIDEO_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

/// `brush_teeth` matches "time to brush teeth" as a whole, or through any word of 3+ characters.
fn file_name_matches(stem: &str, prompt: &str) -> bool {
    let normalized = stem.to_lowercase().replace(['_', '-'], " ");
    let normalized = normalized.trim();
    if normalized.is_empty() {
        return false;
    }
    prompt.contains(normalized)
        || normalized
            .split_whitespace()
            .any(|w| w.chars().count() >= MIN_SCAN_WORD_CHARS && prompt.contains(w))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/recordings.rs"]
mod tests;
