use crate::compose::scene::Scene;
use crate::foundation::error::ReelResult;
use crate::text::font::FontBook;

/// A rendered frame as RGBA8 pixels.
///
/// Backends produce premultiplied alpha. Scenes always start from an opaque background, so in
/// practice every pixel has `a == 255` and premultiplied equals straight alpha.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    /// Tightly packed, row-major.
    pub data: Vec<u8>,
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// A frame filled with one opaque colour.
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let mut data = vec![0u8; width as usize * height as usize * 4];
        for px in data.chunks_exact_mut(4) {
            px.copy_from_slice(&rgba);
        }
        Self {
            width,
            height,
            data,
            premultiplied: true,
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        self.data.get(i..i + 4).map(|p| [p[0], p[1], p[2], p[3]])
    }

    /// `true` when `data` holds exactly `width * height` pixels.
    pub fn is_well_formed(&self) -> bool {
        self.data.len() == self.width as usize * self.height as usize * 4
    }
}

/// Rasterizes composed scenes.
pub trait RenderBackend {
    fn render_scene(&mut self, scene: &Scene) -> ReelResult<FrameRGBA>;

    /// Settings needed to construct equivalent worker backends.
    fn worker_render_settings(&self) -> Option<RenderSettings> {
        None
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackendKind {
    /// CPU raster backend powered by `vello_cpu`.
    Cpu,
}

#[derive(Clone, Debug)]
pub struct RenderSettings {
    /// Face used for every caption.
    pub fonts: FontBook,
    /// Flattening tolerance for curves, in pixels.
    pub tolerance: f64,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            fonts: FontBook::builtin(),
            tolerance: 0.1,
        }
    }
}

pub fn create_backend(kind: BackendKind, settings: &RenderSettings) -> Box<dyn RenderBackend> {
    match kind {
        BackendKind::Cpu => Box::new(crate::render::cpu::CpuBackend::new(settings.clone())),
    }
}
