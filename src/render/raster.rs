use image::{Rgb, RgbImage, RgbaImage};

use crate::foundation::color::Rgb8;
use crate::foundation::error::{BrandError, BrandResult};

/// Spatial direction of a color ramp.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RampDirection {
    /// Start color at column 0.
    LeftToRight,
    /// Start color at the last column.
    RightToLeft,
}

fn check_dims(width: u32, height: u32) -> BrandResult<()> {
    if width == 0 || height == 0 {
        return Err(BrandError::invalid_argument(format!(
            "image dimensions must be non-zero, got {width}x{height}"
        )));
    }
    Ok(())
}

/// Opaque image filled with `color`.
pub fn solid_background(width: u32, height: u32, color: Rgb8) -> BrandResult<RgbImage> {
    check_dims(width, height)?;
    Ok(RgbImage::from_pixel(width, height, color.to_rgb()))
}

/// Image whose every pixel has zero alpha.
pub fn transparent_canvas(width: u32, height: u32) -> BrandResult<RgbaImage> {
    check_dims(width, height)?;
    Ok(RgbaImage::new(width, height))
}

/// One-pixel-tall linear ramp from `start` to `end`.
///
/// Column `x` (before mirroring) holds `start + trunc((end - start) * x / (width - 1))` per
/// channel. A width of 1 yields a single `start` pixel.
pub fn gradient_strip(
    width: u32,
    start: Rgb8,
    end: Rgb8,
    direction: RampDirection,
) -> BrandResult<RgbImage> {
    check_dims(width, 1)?;

    let mut image = RgbImage::new(width, 1);
    if width == 1 {
        image.put_pixel(0, 0, start.to_rgb());
        return Ok(image);
    }

    let span = i64::from(width - 1);
    let s = start.channels().map(i64::from);
    let e = end.channels().map(i64::from);

    for x in 0..width {
        let step = i64::from(x);
        let mut px = [0u8; 3];
        for i in 0..3 {
            // `/` truncates toward zero, matching the ramp definition for descending channels.
            let v = s[i] + (e[i] - s[i]) * step / span;
            px[i] = v.clamp(0, 255) as u8;
        }
        let col = match direction {
            RampDirection::LeftToRight => x,
            RampDirection::RightToLeft => width - 1 - x,
        };
        image.put_pixel(col, 0, Rgb(px));
    }

    Ok(image)
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
