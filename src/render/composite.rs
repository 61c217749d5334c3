use image::{Rgba, RgbaImage};

use crate::foundation::math::mul_div255_u8;

pub type PremulRgba8 = [u8; 4];

/// How glyph coverage turns into pixel writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoverageMode {
    /// Pixel is either fully inked (coverage >= 0.5, ink replaces the pixel) or untouched.
    Bilevel,
    /// Ink alpha is scaled by coverage and composited source-over.
    Antialiased,
}

impl CoverageMode {
    pub fn from_antialias(antialias: bool) -> Self {
        if antialias {
            Self::Antialiased
        } else {
            Self::Bilevel
        }
    }
}

pub fn over(dst: PremulRgba8, src: PremulRgba8, opacity: f32) -> PremulRgba8 {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 || src[3] == 0 {
        return dst;
    }

    let op = ((opacity * 255.0).round() as i32).clamp(0, 255) as u16;
    let sa = mul_div255_u8(u16::from(src[3]), op);
    if sa == 0 {
        return dst;
    }

    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = sa.saturating_add(mul_div255_u8(u16::from(dst[3]), inv));

    for i in 0..3 {
        let sc = mul_div255_u8(u16::from(src[i]), op);
        let dc = mul_div255_u8(u16::from(dst[i]), inv);
        out[i] = sc.saturating_add(dc);
    }
    out
}

pub fn premultiply(px: [u8; 4]) -> PremulRgba8 {
    let a = u16::from(px[3]);
    [
        mul_div255_u8(u16::from(px[0]), a),
        mul_div255_u8(u16::from(px[1]), a),
        mul_div255_u8(u16::from(px[2]), a),
        px[3],
    ]
}

pub fn unpremultiply(px: PremulRgba8) -> [u8; 4] {
    let a = u32::from(px[3]);
    if a == 0 {
        return [0, 0, 0, 0];
    }
    let un = |c: u8| ((u32::from(c) * 255 + a / 2) / a).min(255) as u8;
    [un(px[0]), un(px[1]), un(px[2]), px[3]]
}

/// Composite straight-alpha `ink` over straight-alpha `dst`, weighted by `coverage`.
pub fn blend_straight(dst: [u8; 4], ink: [u8; 4], coverage: f32) -> [u8; 4] {
    unpremultiply(over(premultiply(dst), premultiply(ink), coverage))
}

/// Apply one glyph coverage sample at `(x, y)`. Samples outside the canvas are dropped.
pub fn apply_ink(
    canvas: &mut RgbaImage,
    x: i32,
    y: i32,
    ink: Rgba<u8>,
    coverage: f32,
    mode: CoverageMode,
) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as u32, y as u32);
    if x >= canvas.width() || y >= canvas.height() {
        return;
    }

    match mode {
        CoverageMode::Bilevel => {
            if coverage >= 0.5 {
                canvas.put_pixel(x, y, ink);
            }
        }
        CoverageMode::Antialiased => {
            if coverage <= 0.0 {
                return;
            }
            let dst = canvas.get_pixel(x, y).0;
            canvas.put_pixel(x, y, Rgba(blend_straight(dst, ink.0, coverage)));
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/composite.rs"]
mod tests;
