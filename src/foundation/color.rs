use std::fmt;

use serde::{Serialize, Serializer};

use crate::foundation::error::{BrandError, BrandResult};

/// Opaque 8-bit RGB color.
///
/// The textual form is always `#RRGGBB` with uppercase hex digits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `RRGGBB` with an optional leading `#`.
    pub fn from_hex(s: &str) -> BrandResult<Self> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(BrandError::format(format!(
                "hex color must be exactly 6 hex digits, got \"{s}\""
            )));
        }

        fn hex_byte(pair: &str) -> BrandResult<u8> {
            u8::from_str_radix(pair, 16)
                .map_err(|_| BrandError::format(format!("invalid hex byte \"{pair}\"")))
        }

        Ok(Self::new(
            hex_byte(&digits[0..2])?,
            hex_byte(&digits[2..4])?,
            hex_byte(&digits[4..6])?,
        ))
    }

    /// Parse a user-supplied color, which must match `^#[0-9A-Fa-f]{6}$`.
    pub fn parse_strict(s: &str) -> BrandResult<Self> {
        if !s.starts_with('#') {
            return Err(BrandError::validation(format!(
                "colors must be in hex format (e.g., #FFFFFF), got \"{s}\""
            )));
        }
        Self::from_hex(s).map_err(|_| {
            BrandError::validation(format!(
                "colors must be in hex format (e.g., #FFFFFF), got \"{s}\""
            ))
        })
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    pub fn from_channels([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }

    /// Add `amount` to every channel, saturating at 255.
    pub fn brightened(self, amount: u8) -> Self {
        Self::new(
            self.r.saturating_add(amount),
            self.g.saturating_add(amount),
            self.b.saturating_add(amount),
        )
    }

    pub fn to_rgb(self) -> image::Rgb<u8> {
        image::Rgb(self.channels())
    }

    pub fn with_alpha(self, a: u8) -> image::Rgba<u8> {
        image::Rgba([self.r, self.g, self.b, a])
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Rgb8 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

/// The two colors at 1/3 and 2/3 of the way from `start` to `end`.
///
/// Each channel is stepped independently with floor division, so
/// `(start, mid1, mid2, end)` forms a four-stop ramp.
pub fn middle_colors(start: Rgb8, end: Rgb8) -> (Rgb8, Rgb8) {
    let at = |num: i32| {
        let mut out = [0u8; 3];
        for (i, (s, e)) in start.channels().into_iter().zip(end.channels()).enumerate() {
            let (s, e) = (i32::from(s), i32::from(e));
            let v = s + ((e - s) * num).div_euclid(3);
            out[i] = v.clamp(0, 255) as u8;
        }
        Rgb8::from_channels(out)
    };
    (at(1), at(2))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/color.rs"]
mod tests;
