use ab_glyph::{Font, FontArc, Glyph, GlyphId, PxScale, ScaleFont, point};
use image::{Rgba, RgbaImage};

use crate::foundation::color::Rgb8;
use crate::foundation::error::BrandResult;
use crate::foundation::math::floor_div;
use crate::render::composite::{CoverageMode, apply_ink};
use crate::render::raster::transparent_canvas;
use crate::text::font::FontResolver;

/// Added to every channel of the text color for the glow pass.
pub const GLOW_BRIGHTEN: u8 = 120;
/// Alpha of the glow pass.
pub const GLOW_ALPHA: u8 = 25;

/// Everything needed to render a centered text block onto a transparent canvas.
#[derive(Clone, Debug)]
pub struct TextSpec<'a> {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Text to draw; `\n` separates lines.
    pub text: &'a str,
    /// Font file name, resolved through a [`FontResolver`].
    pub font_name: &'a str,
    /// Em size in pixels. Half of it (floored) separates lines.
    pub font_size: u32,
    pub color: Rgb8,
    /// Extra spacing per letter gap, used when centering each line.
    pub letter_spacing: i32,
    pub glow: bool,
    pub x_offset: i32,
    pub y_offset: i32,
    /// Smoothed coverage when `true`, bilevel coverage otherwise.
    pub antialias: bool,
}

/// Measured ink box of one line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LineMetrics {
    /// Ink width plus `(chars - 1) * letter_spacing`.
    pub width: i32,
    /// Ink height.
    pub height: i32,
}

/// Top-left draw origin of each line for a centered block.
pub fn place_lines(
    canvas_width: u32,
    canvas_height: u32,
    lines: &[LineMetrics],
    font_size: u32,
    x_offset: i32,
    y_offset: i32,
) -> Vec<(i32, i32)> {
    let gap = (font_size / 2) as i32;
    let total_height: i32 = lines.iter().map(|m| m.height).sum::<i32>()
        + (lines.len().saturating_sub(1) as i32) * gap;

    let mut y = floor_div(canvas_height as i32 - total_height, 2) + y_offset;
    let mut out = Vec::with_capacity(lines.len());
    for m in lines {
        let x = floor_div(canvas_width as i32 - m.width, 2) + x_offset;
        out.push((x, y));
        y += m.height + gap;
    }
    out
}

/// Scale whose em square is `size_px` pixels.
fn em_scale(font: &FontArc, size_px: f32) -> PxScale {
    let units_per_em = font.units_per_em().unwrap_or(1000.0);
    PxScale::from(size_px * font.height_unscaled() / units_per_em)
}

/// Glyphs on whole-pixel pen positions, baseline at the ascent below the origin.
fn layout_line(font: &FontArc, scale: PxScale, line: &str) -> Vec<Glyph> {
    let scaled = font.as_scaled(scale);
    let baseline = scaled.ascent().round();

    let mut caret = 0.0f32;
    let mut prev: Option<GlyphId> = None;
    let mut glyphs = Vec::with_capacity(line.len());
    for c in line.chars() {
        let id = scaled.glyph_id(c);
        if let Some(prev) = prev {
            caret += scaled.kern(prev, id);
        }
        glyphs.push(id.with_scale_and_position(scale, point(caret.round(), baseline)));
        caret += scaled.h_advance(id);
        prev = Some(id);
    }
    glyphs
}

fn measure_line(
    font: &FontArc,
    glyphs: &[Glyph],
    char_count: usize,
    spacing: i32,
) -> LineMetrics {
    let mut bounds: Option<(f32, f32, f32, f32)> = None;
    for glyph in glyphs {
        let Some(outlined) = font.outline_glyph(glyph.clone()) else {
            continue;
        };
        let b = outlined.px_bounds();
        bounds = Some(match bounds {
            None => (b.min.x, b.min.y, b.max.x, b.max.y),
            Some((x0, y0, x1, y1)) => (
                x0.min(b.min.x),
                y0.min(b.min.y),
                x1.max(b.max.x),
                y1.max(b.max.y),
            ),
        });
    }

    let (ink_w, ink_h) = bounds
        .map(|(x0, y0, x1, y1)| ((x1 - x0) as i32, (y1 - y0) as i32))
        .unwrap_or((0, 0));
    LineMetrics {
        width: ink_w + (char_count as i32 - 1) * spacing,
        height: ink_h,
    }
}

fn draw_glyphs(
    canvas: &mut RgbaImage,
    font: &FontArc,
    glyphs: &[Glyph],
    (ox, oy): (i32, i32),
    ink: Rgba<u8>,
    mode: CoverageMode,
) {
    for glyph in glyphs {
        let mut glyph = glyph.clone();
        glyph.position = point(glyph.position.x + ox as f32, glyph.position.y + oy as f32);
        let Some(outlined) = font.outline_glyph(glyph) else {
            continue;
        };
        let b = outlined.px_bounds();
        let (bx, by) = (b.min.x as i32, b.min.y as i32);
        outlined.draw(|x, y, coverage| {
            apply_ink(canvas, bx + x as i32, by + y as i32, ink, coverage, mode);
        });
    }
}

/// Draw `spec.text` centered on `canvas` with an already-resolved font.
pub fn draw_text_block(canvas: &mut RgbaImage, font: &FontArc, spec: &TextSpec<'_>) {
    let scale = em_scale(font, spec.font_size as f32);
    let mode = CoverageMode::from_antialias(spec.antialias);

    let runs: Vec<Vec<Glyph>> = spec
        .text
        .split('\n')
        .map(|line| layout_line(font, scale, line))
        .collect();
    let metrics: Vec<LineMetrics> = spec
        .text
        .split('\n')
        .zip(&runs)
        .map(|(line, glyphs)| {
            measure_line(font, glyphs, line.chars().count(), spec.letter_spacing)
        })
        .collect();
    let origins = place_lines(
        spec.width,
        spec.height,
        &metrics,
        spec.font_size,
        spec.x_offset,
        spec.y_offset,
    );
    tracing::debug!(?metrics, ?origins, "text block placement");

    if spec.glow {
        let glow = spec.color.brightened(GLOW_BRIGHTEN).with_alpha(GLOW_ALPHA);
        for (glyphs, &(x, y)) in runs.iter().zip(&origins) {
            draw_glyphs(canvas, font, glyphs, (x, y - 1), glow, mode);
        }
    }

    let ink = spec.color.with_alpha(255);
    for (glyphs, &origin) in runs.iter().zip(&origins) {
        draw_glyphs(canvas, font, glyphs, origin, ink, mode);
    }
}

/// Transparent canvas with the centered text block drawn on it.
///
/// Font problems never fail the render: if no font resolves, the canvas is returned blank.
#[tracing::instrument(skip(fonts))]
pub fn text_composite(spec: &TextSpec<'_>, fonts: &FontResolver) -> BrandResult<RgbaImage> {
    let mut canvas = transparent_canvas(spec.width, spec.height)?;
    if let Some(font) = fonts.resolve(spec.font_name) {
        draw_text_block(&mut canvas, &font.font, spec);
    }
    Ok(canvas)
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
