//! CPU raster surface backed by a tiny-skia pixmap.
//!
//! Text is not rasterized by this backend.

use crate::renderer::{RenderResult, RendererError};
use crate::surface::Surface;
use kurbo::{Affine, BezPath, PathEl, Point, Rect, Size};
use peniko::Color;
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};

/// [`Surface`] drawing into an owned [`Pixmap`].
pub struct PixmapSurface {
    pixmap: Pixmap,
    transform: Transform,
}

impl PixmapSurface {
    pub fn new(width: u32, height: u32) -> RenderResult<Self> {
        Ok(Self {
            pixmap: new_pixmap(width, height)?,
            transform: Transform::identity(),
        })
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Encode the current frame as PNG.
    pub fn encode_png(&self) -> RenderResult<Vec<u8>> {
        self.pixmap
            .encode_png()
            .map_err(|e| RendererError::Surface(e.to_string()))
    }
}

fn new_pixmap(width: u32, height: u32) -> RenderResult<Pixmap> {
    Pixmap::new(width, height)
        .ok_or_else(|| RendererError::InitFailed(format!("invalid pixmap size {width}x{height}")))
}

fn to_transform(affine: Affine) -> Transform {
    let [a, b, c, d, e, f] = affine.as_coeffs();
    Transform::from_row(a as f32, b as f32, c as f32, d as f32, e as f32, f as f32)
}

fn to_paint(color: Color) -> Paint<'static> {
    let rgba = color.to_rgba8();
    let mut paint = Paint::default();
    paint.set_color_rgba8(rgba.r, rgba.g, rgba.b, rgba.a);
    paint.anti_alias = true;
    paint
}

/// Convert a kurbo path. `None` when tiny-skia rejects it (empty, single point).
fn to_path(path: &BezPath) -> Option<tiny_skia::Path> {
    let mut pb = PathBuilder::new();
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => pb.move_to(p.x as f32, p.y as f32),
            PathEl::LineTo(p) => pb.line_to(p.x as f32, p.y as f32),
            PathEl::QuadTo(p1, p2) => pb.quad_to(p1.x as f32, p1.y as f32, p2.x as f32, p2.y as f32),
            PathEl::CurveTo(p1, p2, p3) => pb.cubic_to(
                p1.x as f32,
                p1.y as f32,
                p2.x as f32,
                p2.y as f32,
                p3.x as f32,
                p3.y as f32,
            ),
            PathEl::ClosePath => pb.close(),
        }
    }
    pb.finish()
}

impl Surface for PixmapSurface {
    fn size(&self) -> Size {
        Size::new(f64::from(self.pixmap.width()), f64::from(self.pixmap.height()))
    }

    fn resize(&mut self, width: u32, height: u32) -> RenderResult<()> {
        self.pixmap = new_pixmap(width, height)?;
        Ok(())
    }

    fn clear(&mut self) -> RenderResult<()> {
        self.pixmap.fill(tiny_skia::Color::TRANSPARENT);
        Ok(())
    }

    fn set_transform(&mut self, transform: Affine) -> RenderResult<()> {
        self.transform = to_transform(transform);
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let Some(rect) = tiny_skia::Rect::from_ltrb(rect.x0 as f32, rect.y0 as f32, rect.x1 as f32, rect.y1 as f32)
        else {
            return;
        };
        self.pixmap
            .fill_rect(rect, &to_paint(color), self.transform, None);
    }

    fn fill_path(&mut self, path: &BezPath, color: Color) {
        if let Some(path) = to_path(path) {
            self.pixmap
                .fill_path(&path, &to_paint(color), FillRule::Winding, self.transform, None);
        }
    }

    fn stroke_path(&mut self, path: &BezPath, color: Color, width: f64) {
        let Some(path) = to_path(path) else {
            return;
        };
        let stroke = Stroke {
            width: width as f32,
            ..Default::default()
        };
        self.pixmap
            .stroke_path(&path, &to_paint(color), &stroke, self.transform, None);
    }

    fn fill_text(&mut self, text: &str, _position: Point, _font_size: f64, _color: Color) -> RenderResult<()> {
        log::trace!("pixmap surface skips text {text:?}");
        Ok(())
    }
}
