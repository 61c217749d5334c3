use std::{
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use sha2::Digest as _;
use tracing_subscriber::EnvFilter;

use brandgen::assemble::assembler::{PRIMARY_LOGO_FONT, SECONDARY_LOGO_FONT};

/// Generate branding assets.
#[derive(Parser, Debug)]
#[command(name = "brandgen", version)]
struct Cli {
    /// Header background style.
    #[arg(long, value_enum)]
    style: StyleChoice,

    /// Add a glow pass under both logo texts.
    #[arg(long)]
    glow: bool,

    /// Starting color in hex format (e.g., #FFFFFF).
    #[arg(long, value_parser = parse_color, default_value = "#FFFFFF")]
    start_color: brandgen::Rgb8,

    /// Ending color in hex format (e.g., #FF0000).
    #[arg(long, value_parser = parse_color, default_value = "#FF0000")]
    end_color: brandgen::Rgb8,

    /// Color for the branding_logo.png text (e.g., #000000). Defaults to the end color.
    #[arg(long, value_parser = parse_color)]
    logo_color: Option<brandgen::Rgb8>,

    /// Smooth glyph edges instead of bilevel rendering.
    #[arg(long)]
    antialias: bool,

    /// Directory under which `branding/` is written.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Directory searched first for the logo fonts [default: `fonts/` next to the executable].
    #[arg(long)]
    font_dir: Option<PathBuf>,

    /// Print diagnostics about logo font resolution (source + SHA-256 of font bytes).
    #[arg(long)]
    dump_fonts: bool,

    /// Write a JSON manifest of the palette and every artifact written.
    #[arg(long)]
    manifest: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StyleChoice {
    Solid,
    Gradient,
}

fn parse_color(s: &str) -> Result<brandgen::Rgb8, String> {
    brandgen::Rgb8::parse_strict(s).map_err(|e| e.to_string())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let style = match cli.style {
        StyleChoice::Solid => brandgen::HeaderStyle::Solid,
        StyleChoice::Gradient => brandgen::HeaderStyle::Gradient,
    };
    let opts = brandgen::BrandingOpts {
        style,
        glow: cli.glow,
        start_color: cli.start_color,
        end_color: cli.end_color,
        logo_color: cli.logo_color,
        antialias: cli.antialias,
    };

    let palette = opts.palette();
    println!("Using colors:");
    println!("Start color: {}", palette.start);
    println!("End color: {}", palette.end);
    println!("Logo color: {}", palette.logo);
    println!("Generated middle colors: {}, {}", palette.mid1, palette.mid2);

    let font_dir = cli.font_dir.clone().unwrap_or_else(default_font_dir);
    tracing::debug!(font_dir = %font_dir.display(), "font directory");
    let fonts = brandgen::FontResolver::new(font_dir);
    if cli.dump_fonts {
        dump_font_diagnostics(&fonts);
    }

    let mut sink = brandgen::DirSink::new(&cli.out_dir);
    let manifest = brandgen::assemble(&opts, &fonts, &mut sink)
        .with_context(|| format!("generate branding under '{}'", cli.out_dir.display()))?;

    if let Some(path) = &cli.manifest {
        write_manifest(path, &manifest)?;
    }

    eprintln!(
        "wrote {} artifacts under {}",
        manifest.artifacts.len(),
        cli.out_dir.join(brandgen::assemble::assembler::BRANDING_DIR).display()
    );
    Ok(())
}

/// `fonts/` beside the running executable, or cwd-relative `fonts` if that cannot be located.
fn default_font_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("fonts")))
        .unwrap_or_else(|| PathBuf::from("fonts"))
}

fn write_manifest(path: &Path, manifest: &brandgen::Manifest) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create manifest dir '{}'", parent.display()))?;
    }
    let f = File::create(path).with_context(|| format!("create manifest '{}'", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(f), manifest)
        .with_context(|| format!("write manifest '{}'", path.display()))?;
    Ok(())
}

fn dump_font_diagnostics(fonts: &brandgen::FontResolver) {
    eprintln!("logo font diagnostics:");
    for name in [PRIMARY_LOGO_FONT, SECONDARY_LOGO_FONT] {
        eprintln!("  {name}:");
        match fonts.resolve(name) {
            Some(font) => {
                eprintln!("    source: {}", font.source);
                eprintln!("    sha256: {}", sha256_hex(font.bytes()));
            }
            None => eprintln!("    source: <none, text will not be drawn>"),
        }
    }
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}
