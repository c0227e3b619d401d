use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{SlidecastError, SlidecastResult};
use crate::render::color::Rgb8;

/// One registered font face plus the Parley contexts used to shape text with it.
pub struct FontFace {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<Rgb8>,
    family_name: String,
    data: vello_cpu::peniko::FontData,
}

impl std::fmt::Debug for FontFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontFace")
            .field("family_name", &self.family_name)
            .finish_non_exhaustive()
    }
}

impl FontFace {
    pub fn load(path: &Path) -> SlidecastResult<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("read font '{}'", path.display()))?;
        Self::from_bytes(bytes)
    }

    pub fn from_bytes(bytes: Vec<u8>) -> SlidecastResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(bytes.clone()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| SlidecastError::render("no font families registered from font bytes"))?;
        let family_name = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| SlidecastError::render("registered font family has no name"))?
            .to_string();

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family_name,
            data: vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(bytes), 0),
        })
    }

    pub(crate) fn font_data(&self) -> &vello_cpu::peniko::FontData {
        &self.data
    }

    /// Shape `text` as a single unbounded paragraph.
    pub fn layout(&mut self, text: &str, size_px: f32, brush: Rgb8) -> parley::Layout<Rgb8> {
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(self.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<Rgb8> = builder.build(text);
        layout.break_all_lines(None);
        layout
    }

    /// Horizontal advance of `text` rendered on one line.
    pub fn measure(&mut self, text: &str, size_px: f32) -> f32 {
        if text.is_empty() {
            return 0.0;
        }
        let layout = self.layout(text, size_px, Rgb8::default());
        layout
            .lines()
            .map(|line| line.metrics().advance)
            .fold(0.0, f32::max)
    }

    /// Greedy word wrap of `text` at `size_px` within `max_width`.
    pub fn wrap(&mut self, text: &str, size_px: f32, max_width: f32) -> Vec<String> {
        wrap_words(text, max_width, |candidate| self.measure(candidate, size_px))
    }
}

/// Greedy word wrap. Words are split on whitespace and re-joined with single spaces.
///
/// A word wider than `max_width` gets a line of its own; no empty lines are produced.
pub fn wrap_words(text: &str, max_width: f32, mut measure: impl FnMut(&str) -> f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        let candidate = format!("{current} {word}");
        if measure(&candidate) > max_width {
            lines.push(std::mem::replace(&mut current, word.to_owned()));
        } else {
            current = candidate;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
