use std::sync::Arc;

use kurbo::{Cap, Join, PathEl, Shape as _, Stroke, StrokeOpts};

use crate::compose::scene::{DrawOp, Paint, Scene};
use crate::foundation::core::{Point, Rect, Rgb8, Vec2};
use crate::foundation::error::{ReelError, ReelResult};
use crate::render::backend::{FrameRGBA, RenderBackend, RenderSettings};
use crate::text::bitmap;
use crate::text::font::{FontFace, TextBrush, TextLayoutEngine};

pub struct CpuBackend {
    settings: RenderSettings,
    text_engine: TextLayoutEngine,
    font: Option<(Arc<Vec<u8>>, vello_cpu::peniko::FontData)>,
    ctx: Option<vello_cpu::RenderContext>,
}

impl CpuBackend {
    pub fn new(settings: RenderSettings) -> Self {
        let font = match settings.fonts.face() {
            FontFace::Outline { bytes, .. } => Some((
                bytes.clone(),
                vello_cpu::peniko::FontData::new(
                    vello_cpu::peniko::Blob::from(bytes.as_ref().clone()),
                    0,
                ),
            )),
            FontFace::Builtin => None,
        };
        Self {
            settings,
            text_engine: TextLayoutEngine::new(),
            font,
            ctx: None,
        }
    }

    fn with_ctx_mut<R>(
        &mut self,
        width: u16,
        height: u16,
        f: impl FnOnce(&mut Self, &mut vello_cpu::RenderContext) -> ReelResult<R>,
    ) -> ReelResult<R> {
        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            _ => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();
        let out = f(self, &mut ctx)?;
        self.ctx = Some(ctx);
        Ok(out)
    }
}

impl RenderBackend for CpuBackend {
    fn render_scene(&mut self, scene: &Scene) -> ReelResult<FrameRGBA> {
        let width: u16 = scene
            .canvas
            .width
            .try_into()
            .map_err(|_| ReelError::render("canvas width exceeds u16"))?;
        let height: u16 = scene
            .canvas
            .height
            .try_into()
            .map_err(|_| ReelError::render("canvas height exceeds u16"))?;
        if width == 0 || height == 0 {
            return Err(ReelError::render("canvas must be non-empty"));
        }

        let mut pixmap = vello_cpu::Pixmap::new(width, height);
        self.with_ctx_mut(width, height, |this, ctx| {
            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            set_color(ctx, scene.background);
            ctx.fill_rect(&rect_to_cpu(scene.canvas.bounds()));
            for op in &scene.ops {
                this.draw_op(ctx, op)?;
            }
            ctx.flush();
            ctx.render_to_pixmap(&mut pixmap);
            Ok(())
        })?;

        Ok(FrameRGBA {
            width: scene.canvas.width,
            height: scene.canvas.height,
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }

    fn worker_render_settings(&self) -> Option<RenderSettings> {
        Some(self.settings.clone())
    }
}

impl CpuBackend {
    fn draw_op(&mut self, ctx: &mut vello_cpu::RenderContext, op: &DrawOp) -> ReelResult<()> {
        let tol = self.settings.tolerance;
        match op {
            DrawOp::Ellipse { bounds, paint } => {
                fill_and_outline(ctx, *bounds, *paint, tol, |r| {
                    kurbo::Ellipse::from_rect(r).to_path(tol)
                });
            }
            DrawOp::Rect { bounds, paint } => {
                fill_and_outline(ctx, *bounds, *paint, tol, |r| r.to_path(tol));
            }
            DrawOp::Line {
                from,
                to,
                width,
                color,
            } => {
                let line = kurbo::Line::new(*from, *to);
                stroke_path(ctx, line.path_elements(tol), *width, *color, tol);
            }
            DrawOp::Arc {
                bounds,
                start_deg,
                sweep_deg,
                width,
                color,
            } => {
                // Inset so the stroke stays inside the box, like the outlines.
                let inset = (width / 2.0).min(bounds.width() / 2.0).min(bounds.height() / 2.0);
                let arc = kurbo::Arc {
                    center: bounds.center(),
                    radii: Vec2::new(bounds.width() / 2.0 - inset, bounds.height() / 2.0 - inset),
                    start_angle: start_deg.to_radians(),
                    sweep_angle: sweep_deg.to_radians(),
                    x_rotation: 0.0,
                };
                stroke_path(ctx, arc.path_elements(tol), *width, *color, tol);
            }
            DrawOp::Text {
                text,
                center,
                size_px,
                wrap_width,
                color,
            } => self.draw_text(ctx, text, *center, *size_px, *wrap_width, *color)?,
        }
        Ok(())
    }

    fn draw_text(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        text: &str,
        center: Point,
        size_px: f64,
        wrap_width: f64,
        color: Rgb8,
    ) -> ReelResult<()> {
        let Some((bytes, font)) = &self.font else {
            set_color(ctx, color);
            for cell in bitmap::cells(text, center, size_px, wrap_width) {
                ctx.fill_rect(&rect_to_cpu(cell));
            }
            return Ok(());
        };

        let brush = TextBrush {
            r: color.r,
            g: color.g,
            b: color.b,
            a: 255,
        };
        let layout = self.text_engine.layout_plain(
            text,
            bytes,
            size_px as f32,
            brush,
            Some(wrap_width as f32),
        )?;

        let block_w = f64::from(layout.width());
        let origin_x = center.x - block_w / 2.0;
        let origin_y = center.y - f64::from(layout.height()) / 2.0;
        for line in layout.lines() {
            // Lines are laid out flush left; shift each to the block's center.
            let line_x = origin_x + (block_w - f64::from(line.metrics().advance)) / 2.0;
            ctx.set_transform(vello_cpu::kurbo::Affine::translate((line_x, origin_y)));
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let brush = run.style().brush;
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, brush.a,
                ));
                let glyphs = run.glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                ctx.glyph_run(font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        Ok(())
    }
}

/// Fill `bounds` with the shape `make`, then stroke the outline inside the bounds.
fn fill_and_outline(
    ctx: &mut vello_cpu::RenderContext,
    bounds: Rect,
    paint: Paint,
    tol: f64,
    make: impl Fn(Rect) -> kurbo::BezPath,
) {
    if let Some(fill) = paint.fill {
        set_color(ctx, fill);
        ctx.fill_path(&bezpath_to_cpu(make(bounds)));
    }
    let Some(outline) = paint.outline else {
        return;
    };
    let half = outline.width / 2.0;
    let inner = bounds.inset(-half);
    if inner.width() <= 0.0 || inner.height() <= 0.0 {
        // Outline thicker than the shape: the shape is all outline.
        set_color(ctx, outline.color);
        ctx.fill_path(&bezpath_to_cpu(make(bounds)));
        return;
    }
    let shape = make(inner);
    let style = Stroke::new(outline.width).with_join(Join::Miter);
    let stroked = kurbo::stroke(shape.iter(), &style, &StrokeOpts::default(), tol);
    set_color(ctx, outline.color);
    ctx.fill_path(&bezpath_to_cpu(stroked));
}

fn stroke_path(
    ctx: &mut vello_cpu::RenderContext,
    path: impl IntoIterator<Item = PathEl>,
    width: f64,
    color: Rgb8,
    tol: f64,
) {
    let style = Stroke::new(width).with_caps(Cap::Butt);
    let stroked = kurbo::stroke(path, &style, &StrokeOpts::default(), tol);
    set_color(ctx, color);
    ctx.fill_path(&bezpath_to_cpu(stroked));
}

fn set_color(ctx: &mut vello_cpu::RenderContext, c: Rgb8) {
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, 255));
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: kurbo::BezPath) -> vello_cpu::kurbo::BezPath {
    let mut out = vello_cpu::kurbo::BezPath::new();
    for el in path {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
