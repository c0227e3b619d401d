use std::path::Path;

use anyhow::Context as _;
use vello_cpu::kurbo::{Affine, Rect, RoundedRect, Shape as _, Stroke};

use crate::foundation::error::{SlidecastError, SlidecastResult};
use crate::render::color::Rgb8;
use crate::render::text::FontFace;

/// Opaque CPU raster target for one slide.
pub struct Canvas {
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> SlidecastResult<Self> {
        let w = u16::try_from(width)
            .map_err(|_| SlidecastError::render(format!("canvas width {width} is too large")))?;
        let h = u16::try_from(height)
            .map_err(|_| SlidecastError::render(format!("canvas height {height} is too large")))?;
        if w == 0 || h == 0 {
            return Err(SlidecastError::render("canvas width/height must be non-zero"));
        }
        Ok(Self {
            width: w,
            height: h,
            ctx: vello_cpu::RenderContext::new(w, h),
        })
    }

    pub fn width(&self) -> f64 {
        f64::from(self.width)
    }

    pub fn height(&self) -> f64 {
        f64::from(self.height)
    }

    pub fn fill(&mut self, color: Rgb8) {
        let (w, h) = (self.width(), self.height());
        self.fill_rect(Rect::new(0.0, 0.0, w, h), color);
    }

    /// Top-to-bottom blend with 256 mask levels, one row at a time.
    pub fn vertical_gradient(&mut self, top: Rgb8, bottom: Rgb8) {
        let (w, h) = (self.width(), self.height());
        for y in 0..self.height {
            let level = (255.0 * f64::from(y) / h).floor();
            let color = top.mix(bottom, level / 255.0);
            let y = f64::from(y);
            self.fill_rect(Rect::new(0.0, y, w, y + 1.0), color);
        }
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Rgb8) {
        self.ctx.set_transform(Affine::IDENTITY);
        self.ctx.set_paint(color.to_paint());
        self.ctx.fill_rect(&rect);
    }

    pub fn stroke_rounded_rect(&mut self, rect: Rect, radius: f64, line_width: f64, color: Rgb8) {
        let rr = RoundedRect::from_rect(rect, radius);
        let mut path = vello_cpu::kurbo::BezPath::new();
        for el in rr.path_elements(0.1) {
            path.push(el);
        }
        self.ctx.set_transform(Affine::IDENTITY);
        self.ctx.set_paint(color.to_paint());
        self.ctx.set_stroke(Stroke::new(line_width));
        self.ctx.stroke_path(&path);
    }

    /// Draw one line of text with its top-left corner at `(x, y)`.
    pub fn draw_text(
        &mut self,
        face: &mut FontFace,
        text: &str,
        x: f64,
        y: f64,
        size_px: f32,
        color: Rgb8,
    ) {
        if text.is_empty() {
            return;
        }
        let layout = face.layout(text, size_px, color);
        let font = face.font_data().clone();

        self.ctx.set_transform(Affine::translate((x, y)));
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                self.ctx.set_paint(run.style().brush.to_paint());
                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                self.ctx
                    .glyph_run(&font)
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
        self.ctx.set_transform(Affine::IDENTITY);
    }

    /// Rasterize everything drawn so far into straight RGBA8 rows.
    pub fn into_rgba8(mut self) -> Vec<u8> {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        let mut data = pixmap.data_as_u8_slice().to_vec();
        unpremultiply_in_place(&mut data);
        data
    }

    pub fn save_png(self, path: &Path) -> SlidecastResult<()> {
        let (w, h) = (u32::from(self.width), u32::from(self.height));
        let data = self.into_rgba8();
        image::save_buffer_with_format(
            path,
            &data,
            w,
            h,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }
}

fn unpremultiply_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
