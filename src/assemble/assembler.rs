use std::path::{Path, PathBuf};

use image::DynamicImage;

use crate::assemble::properties::{admin_properties, root_properties};
use crate::encode::sink::{Artifact, ArtifactKind, ArtifactSink};
use crate::foundation::color::{Rgb8, middle_colors};
use crate::foundation::error::BrandResult;
use crate::render::raster::{RampDirection, gradient_strip, solid_background};
use crate::render::text::{TextSpec, text_composite};
use crate::text::font::FontResolver;

pub const BRANDING_DIR: &str = "branding";
pub const ADMIN_DIR: &str = "branding/ccmadmin";

pub const DEFAULT_START_COLOR: Rgb8 = Rgb8::WHITE;
pub const DEFAULT_END_COLOR: Rgb8 = Rgb8::new(255, 0, 0);

/// Width of each of the six gradient header strips.
pub const GRADIENT_WIDTH: u32 = 652;
/// Width of the single solid header strip.
pub const SOLID_WIDTH: u32 = 2048;

pub const PRIMARY_LOGO_FONT: &str = "m6x11.ttf";
pub const SECONDARY_LOGO_FONT: &str = "m3x6.ttf";

/// Header background mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderStyle {
    /// One wide strip filled with the end color.
    Solid,
    /// Three ramp segments through the midpoints, each in both directions.
    Gradient,
}

/// Validated inputs for one run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrandingOpts {
    pub style: HeaderStyle,
    pub glow: bool,
    pub start_color: Rgb8,
    pub end_color: Rgb8,
    /// Primary logo text color; the end color when unset.
    pub logo_color: Option<Rgb8>,
    pub antialias: bool,
}

impl BrandingOpts {
    pub fn new(style: HeaderStyle) -> Self {
        Self {
            style,
            glow: false,
            start_color: DEFAULT_START_COLOR,
            end_color: DEFAULT_END_COLOR,
            logo_color: None,
            antialias: false,
        }
    }

    pub fn palette(&self) -> Palette {
        Palette::resolve(self.start_color, self.end_color, self.logo_color)
    }
}

/// Every color a run uses, derived once from the inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Palette {
    pub start: Rgb8,
    pub mid1: Rgb8,
    pub mid2: Rgb8,
    pub end: Rgb8,
    pub logo: Rgb8,
}

impl Palette {
    pub fn resolve(start: Rgb8, end: Rgb8, logo: Option<Rgb8>) -> Self {
        let (mid1, mid2) = middle_colors(start, end);
        Self {
            start,
            mid1,
            mid2,
            end,
            logo: logo.unwrap_or(end),
        }
    }
}

/// The 44x25 "AB" mark referenced by the root properties file.
pub fn primary_logo_spec(opts: &BrandingOpts, palette: &Palette) -> TextSpec<'static> {
    TextSpec {
        width: 44,
        height: 25,
        text: "AB",
        font_name: PRIMARY_LOGO_FONT,
        font_size: 32,
        color: palette.logo,
        letter_spacing: 0,
        glow: opts.glow,
        x_offset: 1,
        y_offset: 0,
        antialias: opts.antialias,
    }
}

/// The 44x44 two-line mark shown in the admin header.
pub fn secondary_logo_spec(opts: &BrandingOpts, palette: &Palette) -> TextSpec<'static> {
    TextSpec {
        width: 44,
        height: 44,
        text: "Automate\nBuilders",
        font_name: SECONDARY_LOGO_FONT,
        font_size: 20,
        color: palette.end,
        letter_spacing: -6,
        glow: opts.glow,
        x_offset: -20,
        y_offset: -2,
        antialias: opts.antialias,
    }
}

/// One written artifact as reported in the manifest.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ManifestEntry {
    /// Path relative to the sink root, `/`-separated.
    pub path: String,
    pub kind: ArtifactKind,
    /// Encoded size.
    pub bytes: usize,
}

/// Summary of a completed run.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Manifest {
    pub style: HeaderStyle,
    pub palette: Palette,
    pub artifacts: Vec<ManifestEntry>,
}

struct Emitter<'s> {
    sink: &'s mut dyn ArtifactSink,
    entries: Vec<ManifestEntry>,
}

impl Emitter<'_> {
    fn emit(&mut self, artifact: Artifact) -> BrandResult<()> {
        self.sink.write(&artifact)?;
        self.entries.push(ManifestEntry {
            path: artifact.path.to_string_lossy().replace('\\', "/"),
            kind: artifact.kind,
            bytes: artifact.bytes.len(),
        });
        Ok(())
    }

    fn image(&mut self, path: PathBuf, image: DynamicImage) -> BrandResult<()> {
        let artifact = Artifact::image(path, &image)?;
        self.emit(artifact)
    }
}

fn in_dir(dir: &str, name: &str) -> PathBuf {
    PathBuf::from(format!("{dir}/{name}"))
}

/// Gradient strip file names and their color segments, left-to-right set first.
pub fn gradient_plan(palette: &Palette) -> Vec<(String, Rgb8, Rgb8, RampDirection)> {
    let segments = [
        ("Beg", palette.start, palette.mid1),
        ("Mid", palette.mid1, palette.mid2),
        ("End", palette.mid2, palette.end),
    ];
    let mut plan = Vec::with_capacity(6);
    for (dir, suffix) in [
        (RampDirection::LeftToRight, "LTR"),
        (RampDirection::RightToLeft, "RTL"),
    ] {
        for (segment, from, to) in segments {
            plan.push((format!("brandingHeader{segment}{suffix}.gif"), from, to, dir));
        }
    }
    plan
}

/// Render and write the whole branding bundle in one pass.
///
/// The first failure aborts the run; artifacts already written stay on the sink.
#[tracing::instrument(skip(fonts, sink))]
pub fn assemble(
    opts: &BrandingOpts,
    fonts: &FontResolver,
    sink: &mut dyn ArtifactSink,
) -> BrandResult<Manifest> {
    let palette = opts.palette();
    tracing::debug!(?palette, "resolved palette");

    sink.ensure_dir(Path::new(BRANDING_DIR))?;
    sink.ensure_dir(Path::new(ADMIN_DIR))?;

    let mut out = Emitter {
        sink,
        entries: Vec::new(),
    };

    out.emit(Artifact::properties(
        in_dir(BRANDING_DIR, "BrandingProperties.properties"),
        &root_properties(),
    ))?;
    out.emit(Artifact::properties(
        in_dir(ADMIN_DIR, "BrandingProperties.properties"),
        &admin_properties(&palette),
    ))?;

    let logo = text_composite(&primary_logo_spec(opts, &palette), fonts)?;
    out.image(
        in_dir(BRANDING_DIR, "branding_logo.png"),
        DynamicImage::ImageRgba8(logo),
    )?;

    match opts.style {
        HeaderStyle::Gradient => {
            for (name, from, to, dir) in gradient_plan(&palette) {
                let strip = gradient_strip(GRADIENT_WIDTH, from, to, dir)?;
                out.image(in_dir(ADMIN_DIR, &name), DynamicImage::ImageRgb8(strip))?;
            }
        }
        HeaderStyle::Solid => {
            let strip = solid_background(SOLID_WIDTH, 1, palette.end)?;
            out.image(
                in_dir(ADMIN_DIR, "brandingHeader.gif"),
                DynamicImage::ImageRgb8(strip),
            )?;
        }
    }

    let mark = text_composite(&secondary_logo_spec(opts, &palette), fonts)?;
    out.image(
        in_dir(ADMIN_DIR, "ciscoLogo12pxMargin.gif"),
        DynamicImage::ImageRgba8(mark),
    )?;

    Ok(Manifest {
        style: opts.style,
        palette,
        artifacts: out.entries,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/assemble/assembler.rs"]
mod tests;
