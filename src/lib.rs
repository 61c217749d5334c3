//! Brandgen renders a small, fixed branding bundle from a handful of colors.
//!
//! One run derives a four-stop palette from a start and an end color and writes:
//!
//! - two `BrandingProperties.properties` files
//! - a logo bitmap with rendered text
//! - either six one-pixel-tall gradient header strips or a single solid strip
//! - a second, two-line logo bitmap
//!
//! Everything is computed in memory and handed to an [`ArtifactSink`], one write per file.
#![forbid(unsafe_code)]

pub mod assemble;
pub mod encode;
mod foundation;
pub mod render;
pub mod text;

pub use crate::assemble::assembler::{
    BrandingOpts, HeaderStyle, Manifest, ManifestEntry, Palette, assemble,
};
pub use crate::encode::format::OutputFormat;
pub use crate::encode::sink::{Artifact, ArtifactKind, ArtifactSink, DirSink, InMemorySink};
pub use crate::foundation::color::{Rgb8, middle_colors};
pub use crate::foundation::error::{BrandError, BrandResult};
pub use crate::render::raster::{
    RampDirection, gradient_strip, solid_background, transparent_canvas,
};
pub use crate::render::text::{TextSpec, text_composite};
pub use crate::text::font::{FontResolver, FontSource, FontStrategy, LoadedFont};
