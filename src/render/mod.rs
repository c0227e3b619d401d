//! Slide rasterization: one PNG per slide at the requested aspect format.

use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::config::Config;
use crate::foundation::error::{SlidecastError, SlidecastResult};
use crate::model::request::AspectFormat;
use crate::model::slide::{BrandKit, LayoutType, Slide};

/// Drawing surface backed by `vello_cpu`.
pub mod canvas;
/// Hex color parsing and gradient extraction.
pub mod color;
pub mod layouts;
/// Font loading, measurement and word wrap.
pub mod text;

use color::Rgb8;
use layouts::Palette;
use text::FontFace;

pub const DEFAULT_BACKGROUND: Rgb8 = Rgb8::new(0x0a, 0x0a, 0x0f);
pub const DEFAULT_TEXT: Rgb8 = Rgb8::new(0xff, 0xff, 0xff);
pub const DEFAULT_ACCENT: Rgb8 = Rgb8::new(0xec, 0x48, 0x99);

/// Regular sans-serif faces probed when no font path is configured.
pub const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Anything that can turn a slide into an image file.
pub trait SlideRasterizer {
    /// Draw `slide` to `out` and return the written path.
    fn render(
        &mut self,
        slide: &Slide,
        out: &Path,
        format: AspectFormat,
        brand: Option<&BrandKit>,
    ) -> SlidecastResult<PathBuf>;
}

/// CPU slide renderer using one font face for all text.
#[derive(Debug)]
pub struct SlideRenderer {
    face: FontFace,
}

impl SlideRenderer {
    /// Use the configured font, or the first readable entry of [`FONT_CANDIDATES`].
    pub fn new(cfg: &Config) -> SlidecastResult<Self> {
        let path = match &cfg.font_path {
            Some(p) => p.clone(),
            None => find_system_font().ok_or_else(|| {
                SlidecastError::render(
                    "no usable font found; set SLIDECAST_FONT_PATH to a .ttf/.otf file",
                )
            })?,
        };
        tracing::debug!(font = %path.display(), "loading slide font");
        Ok(Self::with_face(FontFace::load(&path)?))
    }

    pub fn with_face(face: FontFace) -> Self {
        Self { face }
    }
}

impl SlideRasterizer for SlideRenderer {
    #[tracing::instrument(level = "debug", skip(self, slide, brand), fields(title = %slide.title))]
    fn render(
        &mut self,
        slide: &Slide,
        out: &Path,
        format: AspectFormat,
        brand: Option<&BrandKit>,
    ) -> SlidecastResult<PathBuf> {
        let (width, height) = format.dimensions();
        let mut canvas = canvas::Canvas::new(width, height)?;

        canvas.fill(Rgb8::parse_or(&slide.background_color, DEFAULT_BACKGROUND));
        if let Some((top, bottom)) = slide.gradient.as_deref().and_then(color::gradient_endpoints) {
            canvas.vertical_gradient(top, bottom);
        }

        let palette = palette_for(slide, brand);
        let face = &mut self.face;
        match slide.layout_type {
            LayoutType::Title => layouts::draw_title(&mut canvas, face, slide, palette),
            LayoutType::Statistics => layouts::draw_statistics(&mut canvas, face, slide, palette),
            LayoutType::Conclusion => layouts::draw_conclusion(&mut canvas, face, slide, palette),
            LayoutType::Content
            | LayoutType::Quote
            | LayoutType::Timeline
            | LayoutType::Image
            | LayoutType::Comparison => layouts::draw_bullets(&mut canvas, face, slide, palette),
        }

        if let Some(name) = brand.and_then(|b| b.name.as_deref()).filter(|n| !n.is_empty()) {
            layouts::draw_brand_name(&mut canvas, face, name, palette.accent);
        }

        if let Some(parent) = out.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        canvas.save_png(out)?;
        Ok(out.to_path_buf())
    }
}

/// Brand primary color wins over the slide accent.
pub fn palette_for(slide: &Slide, brand: Option<&BrandKit>) -> Palette {
    let accent = brand
        .and_then(|b| b.primary_color.as_deref())
        .filter(|c| !c.is_empty())
        .unwrap_or(&slide.accent_color);
    Palette {
        text: Rgb8::parse_or(&slide.text_color, DEFAULT_TEXT),
        accent: Rgb8::parse_or(accent, DEFAULT_ACCENT),
    }
}

pub fn find_system_font() -> Option<PathBuf> {
    FONT_CANDIDATES
        .iter()
        .map(PathBuf::from)
        .find(|p| p.is_file())
}

#[cfg(test)]
#[path = "../../tests/unit/render/mod.rs"]
mod tests;
