//! Per-layout drawing routines.
//!
//! Coordinates are in output pixels with the origin at the top-left corner.

use vello_cpu::kurbo::Rect;

use crate::model::slide::Slide;
use crate::render::canvas::Canvas;
use crate::render::color::Rgb8;
use crate::render::text::FontFace;

pub const PADDING_X: f64 = 80.0;
pub const PADDING_Y: f64 = 60.0;

pub const TITLE_SIZE: f32 = 54.0;
pub const BODY_SIZE: f32 = 28.0;
pub const SMALL_SIZE: f32 = 20.0;
pub const TAG_SIZE: f32 = 24.0;

/// Gap between the title baseline area and the first content row.
const CONTENT_OFFSET: f64 = 120.0;
const STAT_ROW_HEIGHT: f64 = 160.0;
const STAT_LABEL_OFFSET: f64 = 70.0;
const BULLET_SPACING: f64 = 80.0;
const BULLET_LINE_HEIGHT: f64 = 32.0;
const BULLET_TEXT_INDENT: f64 = 24.0;
const BULLET_WRAP_SLACK: f64 = 40.0;
const CENTERED_WIDTH_RATIO: f64 = 0.8;
const CENTERED_LINE_GAP: f64 = 8.0;

const TAG_PAD_X: f64 = 32.0;
const TAG_PAD_Y: f64 = 16.0;
const TAG_GAP: f64 = 12.0;
const TAG_RADIUS: f64 = 20.0;
const TAG_OUTLINE: f64 = 2.0;

const SUBTITLE_FADE: f64 = 0.7;
const LABEL_FADE: f64 = 0.75;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub text: Rgb8,
    pub accent: Rgb8,
}

/// Title centered at 40% height, optional subtitle at 55%.
pub fn draw_title(canvas: &mut Canvas, face: &mut FontFace, slide: &Slide, palette: Palette) {
    let h = canvas.height();
    draw_centered_block(canvas, face, &slide.title, TITLE_SIZE, palette.text, h * 0.4);

    let subtitle = slide
        .subtitle
        .as_deref()
        .filter(|s| !s.is_empty())
        .or_else(|| slide.description.as_deref().filter(|s| !s.is_empty()))
        .or_else(|| slide.bullets.first().map(String::as_str))
        .unwrap_or("");
    if !subtitle.is_empty() {
        draw_centered_block(
            canvas,
            face,
            subtitle,
            BODY_SIZE,
            palette.text.fade(SUBTITLE_FADE),
            h * 0.55,
        );
    }
}

/// Title plus a 2-column grid of up to four `value: label` stats.
pub fn draw_statistics(canvas: &mut Canvas, face: &mut FontFace, slide: &Slide, palette: Palette) {
    canvas.draw_text(face, &slide.title, PADDING_X, PADDING_Y, TITLE_SIZE, palette.text);

    let grid_top = PADDING_Y + CONTENT_OFFSET;
    let col_width = ((canvas.width() - 2.0 * PADDING_X) / 2.0).floor();
    for (idx, stat) in slide.bullets.iter().take(4).enumerate() {
        let (col, row) = ((idx % 2) as f64, (idx / 2) as f64);
        let x = PADDING_X + col * col_width;
        let y = grid_top + row * STAT_ROW_HEIGHT;
        let (value, label) = split_stat(stat);
        canvas.draw_text(face, value, x, y, TITLE_SIZE, palette.accent);
        if !label.is_empty() {
            canvas.draw_text(
                face,
                label,
                x,
                y + STAT_LABEL_OFFSET,
                SMALL_SIZE,
                palette.text.fade(LABEL_FADE),
            );
        }
    }
}

/// Title centered at 35% height, bullets as an outlined tag cloud from 55%.
pub fn draw_conclusion(canvas: &mut Canvas, face: &mut FontFace, slide: &Slide, palette: Palette) {
    let h = canvas.height();
    draw_centered_block(canvas, face, &slide.title, TITLE_SIZE, palette.text, h * 0.35);
    if slide.bullets.is_empty() {
        return;
    }

    let widths: Vec<f64> = slide
        .bullets
        .iter()
        .map(|tag| f64::from(face.measure(tag, TAG_SIZE)))
        .collect();
    let boxes = tag_cloud_boxes(&widths, canvas.width(), h * 0.55, f64::from(TAG_SIZE));
    for (tag, rect) in slide.bullets.iter().zip(boxes) {
        canvas.stroke_rounded_rect(rect, TAG_RADIUS, TAG_OUTLINE, palette.accent);
        canvas.draw_text(
            face,
            tag,
            rect.x0 + TAG_PAD_X / 2.0,
            rect.y0 + TAG_PAD_Y / 2.0,
            TAG_SIZE,
            palette.text,
        );
    }
}

/// Title plus wrapped bullets, each with a small accent marker.
pub fn draw_bullets(canvas: &mut Canvas, face: &mut FontFace, slide: &Slide, palette: Palette) {
    canvas.draw_text(face, &slide.title, PADDING_X, PADDING_Y, TITLE_SIZE, palette.text);

    let content_top = PADDING_Y + CONTENT_OFFSET;
    let wrap_width = (canvas.width() - PADDING_X * 2.0 - BULLET_WRAP_SLACK) as f32;
    for (idx, bullet) in slide.bullets.iter().enumerate() {
        let y = content_top + idx as f64 * BULLET_SPACING;
        canvas.fill_rect(
            Rect::new(PADDING_X, y + 8.0, PADDING_X + 8.0, y + 24.0),
            palette.accent,
        );
        for (i, line) in face.wrap(bullet, BODY_SIZE, wrap_width).iter().enumerate() {
            canvas.draw_text(
                face,
                line,
                PADDING_X + BULLET_TEXT_INDENT,
                y + i as f64 * BULLET_LINE_HEIGHT,
                BODY_SIZE,
                palette.text,
            );
        }
    }
}

/// Upper-cased brand name in the bottom-left corner.
pub fn draw_brand_name(canvas: &mut Canvas, face: &mut FontFace, name: &str, accent: Rgb8) {
    let y = canvas.height() - 40.0;
    canvas.draw_text(face, &name.to_uppercase(), PADDING_X, y, SMALL_SIZE, accent);
}

fn draw_centered_block(
    canvas: &mut Canvas,
    face: &mut FontFace,
    text: &str,
    size_px: f32,
    color: Rgb8,
    center_y: f64,
) {
    let width = canvas.width();
    let lines = face.wrap(text, size_px, (width * CENTERED_WIDTH_RATIO).floor() as f32);
    let line_height = f64::from(size_px) + CENTERED_LINE_GAP;
    let start_y = center_y - lines.len() as f64 * line_height / 2.0;
    for (idx, line) in lines.iter().enumerate() {
        let line_width = f64::from(face.measure(line, size_px));
        let x = (width - line_width) / 2.0;
        canvas.draw_text(face, line, x, start_y + idx as f64 * line_height, size_px, color);
    }
}

/// Split `"value: label"` at the first colon; both halves are trimmed.
pub fn split_stat(text: &str) -> (&str, &str) {
    match text.split_once(':') {
        Some((value, label)) => (value.trim(), label.trim()),
        None => (text.trim(), ""),
    }
}

/// Flow tag boxes left to right from `start_y`, wrapping at the right padding.
///
/// `text_widths` are the measured tag text widths; each box adds horizontal and
/// vertical padding around the text.
pub fn tag_cloud_boxes(text_widths: &[f64], canvas_width: f64, start_y: f64, font_size: f64) -> Vec<Rect> {
    let mut x = PADDING_X;
    let mut y = start_y;
    let h = font_size + TAG_PAD_Y;
    text_widths
        .iter()
        .map(|tw| {
            let w = tw + TAG_PAD_X;
            if x + w > canvas_width - PADDING_X {
                x = PADDING_X;
                y += h + TAG_GAP;
            }
            let rect = Rect::new(x, y, x + w, y + h);
            x += w + TAG_GAP;
            rect
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/render/layouts.rs"]
mod tests;
