use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageFormat};

use crate::foundation::error::BrandResult;

/// Encoding chosen once per artifact from its file name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Palette GIF; fully transparent pixels map to the transparent palette entry.
    Gif,
    /// Truecolor PNG, alpha kept as-is.
    Png,
}

impl OutputFormat {
    /// `.gif` (any case) selects [`OutputFormat::Gif`]; every other name gets [`OutputFormat::Png`].
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("gif") => Self::Gif,
            _ => Self::Png,
        }
    }

    pub fn encode(self, image: &DynamicImage) -> BrandResult<Vec<u8>> {
        let mut out = Cursor::new(Vec::new());
        match self {
            Self::Gif => {
                // The GIF encoder quantizes from RGBA; alpha 0 becomes the transparent index.
                DynamicImage::ImageRgba8(image.to_rgba8()).write_to(&mut out, ImageFormat::Gif)?
            }
            Self::Png => image.write_to(&mut out, ImageFormat::Png)?,
        }
        Ok(out.into_inner())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/format.rs"]
mod tests;
