//! Declarative per-frame draw commands.
//!
//! Scene builders never touch pixels. They push [`DrawOp`]s through a [`SceneBuilder`], which
//! normalizes and clamps every coordinate into the canvas before the op is stored, so a backend
//! can rasterize a [`Scene`] without any further bounds checks.

use crate::animation::motion::clamp_range;
use crate::foundation::core::{Canvas, Point, Rect, Rgb8};

/// Horizontal margin kept free when captions wrap.
pub const TEXT_MARGIN: f64 = 24.0;

const MAX_STROKE_WIDTH: f64 = 64.0;
const MIN_TEXT_SIZE: f64 = 1.0;
const MAX_TEXT_SIZE: f64 = 256.0;

/// An outline drawn inside a shape's bounds.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Stroke {
    pub color: Rgb8,
    pub width: f64,
}

/// Fill and optional inner outline for closed shapes.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Paint {
    pub fill: Option<Rgb8>,
    pub outline: Option<Stroke>,
}

impl Paint {
    pub fn fill(color: Rgb8) -> Self {
        Self {
            fill: Some(color),
            outline: None,
        }
    }

    pub fn outlined(fill: Rgb8, outline: Rgb8, width: f64) -> Self {
        Self {
            fill: Some(fill),
            outline: Some(Stroke {
                color: outline,
                width,
            }),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum DrawOp {
    Ellipse {
        bounds: Rect,
        paint: Paint,
    },
    Rect {
        bounds: Rect,
        paint: Paint,
    },
    Line {
        from: Point,
        to: Point,
        width: f64,
        color: Rgb8,
    },
    /// Elliptical arc inscribed in `bounds`. Angles are degrees clockwise from 3 o'clock
    /// (y grows downward), so `0..180` is the lower half: a smile.
    Arc {
        bounds: Rect,
        start_deg: f64,
        sweep_deg: f64,
        width: f64,
        color: Rgb8,
    },
    /// Text centered on `center`, wrapped at `wrap_width`.
    Text {
        text: String,
        center: Point,
        size_px: f64,
        wrap_width: f64,
        color: Rgb8,
    },
}

impl DrawOp {
    /// Axis-aligned box covering the op's control geometry.
    pub fn bounds(&self) -> Rect {
        match self {
            Self::Ellipse { bounds, .. } | Self::Rect { bounds, .. } | Self::Arc { bounds, .. } => {
                *bounds
            }
            Self::Line { from, to, .. } => Rect::from_points(*from, *to),
            Self::Text { center, .. } => Rect::from_points(*center, *center),
        }
    }
}

/// One composed frame: background plus ops in paint order.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Scene {
    pub canvas: Canvas,
    pub background: Rgb8,
    pub ops: Vec<DrawOp>,
}

impl Scene {
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

pub struct SceneBuilder {
    canvas: Canvas,
    background: Rgb8,
    ops: Vec<DrawOp>,
}

impl SceneBuilder {
    pub fn new(canvas: Canvas, background: Rgb8) -> Self {
        Self {
            canvas,
            background,
            ops: Vec::with_capacity(64),
        }
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn ellipse(&mut self, bounds: Rect, paint: Paint) -> &mut Self {
        if let Some(bounds) = self.clamp_rect(bounds) {
            let paint = sanitize_paint(paint);
            self.ops.push(DrawOp::Ellipse { bounds, paint });
        }
        self
    }

    pub fn circle(&mut self, center: Point, radius: f64, paint: Paint) -> &mut Self {
        let r = radius.abs();
        self.ellipse(
            Rect::new(center.x - r, center.y - r, center.x + r, center.y + r),
            paint,
        )
    }

    pub fn rect(&mut self, bounds: Rect, paint: Paint) -> &mut Self {
        if let Some(bounds) = self.clamp_rect(bounds) {
            let paint = sanitize_paint(paint);
            self.ops.push(DrawOp::Rect { bounds, paint });
        }
        self
    }

    pub fn line(&mut self, from: Point, to: Point, width: f64, color: Rgb8) -> &mut Self {
        let Some(width) = sanitize_width(width) else {
            return self;
        };
        let from = self.clamp_point(from);
        let to = self.clamp_point(to);
        self.ops.push(DrawOp::Line {
            from,
            to,
            width,
            color,
        });
        self
    }

    /// Arc from `start_deg` to `end_deg`, both clockwise from 3 o'clock.
    pub fn arc(
        &mut self,
        bounds: Rect,
        start_deg: f64,
        end_deg: f64,
        width: f64,
        color: Rgb8,
    ) -> &mut Self {
        let Some(width) = sanitize_width(width) else {
            return self;
        };
        if !start_deg.is_finite() || !end_deg.is_finite() || end_deg <= start_deg {
            return self;
        }
        if let Some(bounds) = self.clamp_rect(bounds) {
            self.ops.push(DrawOp::Arc {
                bounds,
                start_deg,
                sweep_deg: (end_deg - start_deg).min(360.0),
                width,
                color,
            });
        }
        self
    }

    pub fn text(
        &mut self,
        text: impl Into<String>,
        center: Point,
        size_px: f64,
        color: Rgb8,
    ) -> &mut Self {
        let text = text.into();
        if text.trim().is_empty() {
            return self;
        }
        let size_px = clamp_range(size_px, MIN_TEXT_SIZE, MAX_TEXT_SIZE);
        let wrap_width = (self.canvas.width_f64() - 2.0 * TEXT_MARGIN).max(1.0);
        let center = self.clamp_point(center);
        self.ops.push(DrawOp::Text {
            text,
            center,
            size_px,
            wrap_width,
            color,
        });
        self
    }

    pub fn build(self) -> Scene {
        Scene {
            canvas: self.canvas,
            background: self.background,
            ops: self.ops,
        }
    }

    fn clamp_point(&self, p: Point) -> Point {
        Point::new(
            clamp_range(p.x, 0.0, self.canvas.width_f64()),
            clamp_range(p.y, 0.0, self.canvas.height_f64()),
        )
    }

    /// Normalize corner order, then clip into the canvas. Shapes left with no area are dropped.
    fn clamp_rect(&self, r: Rect) -> Option<Rect> {
        let r = r.abs();
        let p0 = self.clamp_point(Point::new(r.x0, r.y0));
        let p1 = self.clamp_point(Point::new(r.x1, r.y1));
        let out = Rect::from_points(p0, p1);
        (out.width() > 0.0 && out.height() > 0.0).then_some(out)
    }
}

fn sanitize_width(width: f64) -> Option<f64> {
    (width.is_finite() && width > 0.0).then(|| width.min(MAX_STROKE_WIDTH))
}

fn sanitize_paint(paint: Paint) -> Paint {
    Paint {
        fill: paint.fill,
        outline: paint.outline.and_then(|s| {
            sanitize_width(s.width).map(|width| Stroke {
                color: s.color,
                width,
            })
        }),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/scene.rs"]
mod tests;
