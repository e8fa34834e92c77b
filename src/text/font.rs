//! Font capability lookup and text shaping.
//!
//! [`FontBook::discover`] always returns something drawable: a configured font file, a system
//! sans-serif face, or the built-in bitmap face in [`crate::text::bitmap`].

use std::path::Path;
use std::sync::Arc;

use crate::foundation::error::{ReelError, ReelResult};

/// Families tried, in order, when looking for a system face.
const PREFERRED_FAMILIES: [&str; 6] = [
    "DejaVu Sans",
    "Liberation Sans",
    "Noto Sans",
    "Arial",
    "Helvetica",
    "FreeSans",
];

/// The face captions are drawn with.
#[derive(Clone, Debug)]
pub enum FontFace {
    /// An outline font, shaped with parley and drawn as glyph runs.
    Outline { name: String, bytes: Arc<Vec<u8>> },
    /// The built-in 5x7 bitmap face.
    Builtin,
}

#[derive(Clone, Debug)]
pub struct FontBook {
    face: FontFace,
}

impl FontBook {
    pub fn builtin() -> Self {
        Self {
            face: FontFace::Builtin,
        }
    }

    /// Use a specific font file's bytes.
    pub fn from_bytes(name: impl Into<String>, bytes: Vec<u8>) -> ReelResult<Self> {
        let mut db = usvg::fontdb::Database::new();
        db.load_font_data(bytes.clone());
        if db.faces().next().is_none() {
            return Err(ReelError::validation("font data contains no usable face"));
        }
        Ok(Self {
            face: FontFace::Outline {
                name: name.into(),
                bytes: Arc::new(bytes),
            },
        })
    }

    /// Configured file first, then system fonts, then the built-in face. Never fails.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn discover(font_path: Option<&Path>) -> Self {
        if let Some(path) = font_path {
            match std::fs::read(path)
                .map_err(|e| ReelError::Other(e.into()))
                .and_then(|bytes| Self::from_bytes(path.display().to_string(), bytes))
            {
                Ok(book) => {
                    tracing::debug!(path = %path.display(), "using configured font");
                    return book;
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "configured font unusable");
                }
            }
        }

        if let Some(book) = system_face() {
            return book;
        }
        tracing::debug!("no system font found; using built-in bitmap face");
        Self::builtin()
    }

    pub fn face(&self) -> &FontFace {
        &self.face
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self.face, FontFace::Builtin)
    }

    pub fn name(&self) -> &str {
        match &self.face {
            FontFace::Outline { name, .. } => name,
            FontFace::Builtin => "builtin-5x7",
        }
    }
}

fn system_face() -> Option<FontBook> {
    let mut db = usvg::fontdb::Database::new();
    db.load_system_fonts();

    let mut families: Vec<usvg::fontdb::Family<'_>> = PREFERRED_FAMILIES
        .iter()
        .map(|name| usvg::fontdb::Family::Name(name))
        .collect();
    families.push(usvg::fontdb::Family::SansSerif);

    let query = usvg::fontdb::Query {
        families: &families,
        weight: usvg::fontdb::Weight::NORMAL,
        ..Default::default()
    };
    let id = db.query(&query)?;
    let name = db
        .face(id)
        .and_then(|f| f.families.first().map(|(n, _)| n.clone()))
        .unwrap_or_default();
    let (bytes, index) = db.with_face_data(id, |data, index| (data.to_vec(), index))?;
    // Glyph runs are drawn from face 0 of the blob; skip collection members.
    if index != 0 {
        tracing::debug!(%name, index, "system face is not the first in its collection");
        return None;
    }
    tracing::debug!(%name, "using system font");
    Some(FontBook {
        face: FontFace::Outline {
            name,
            bytes: Arc::new(bytes),
        },
    })
}

/// RGBA8 brush carried through parley layouts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextBrush {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Stateful helper for shaping text with parley. One per render worker.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrush>,
    registered: Option<(usize, String)>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutEngine {
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            registered: None,
        }
    }

    /// Shape `text` with the outline font in `font_bytes`, breaking lines at `max_width_px`.
    pub fn layout_plain(
        &mut self,
        text: &str,
        font_bytes: &Arc<Vec<u8>>,
        size_px: f32,
        brush: TextBrush,
        max_width_px: Option<f32>,
    ) -> ReelResult<parley::Layout<TextBrush>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(ReelError::validation(
                "text size_px must be finite and > 0",
            ));
        }

        let family_name = self.family_for(font_bytes)?;
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family_name)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrush> = builder.build(text);
        layout.break_all_lines(max_width_px);
        layout.align(
            max_width_px,
            parley::Alignment::Start,
            parley::AlignmentOptions::default(),
        );
        Ok(layout)
    }

    /// Register the font once per engine; keyed by the shared buffer's address.
    fn family_for(&mut self, font_bytes: &Arc<Vec<u8>>) -> ReelResult<String> {
        let key = Arc::as_ptr(font_bytes) as usize;
        if let Some((k, name)) = &self.registered
            && *k == key
        {
            return Ok(name.clone());
        }

        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.as_ref().clone()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            ReelError::validation("no font families registered from font bytes")
        })?;
        let family_name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| ReelError::validation("registered font family has no name"))?
            .to_string();
        self.registered = Some((key, family_name.clone()));
        Ok(family_name)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/font.rs"]
mod tests;
