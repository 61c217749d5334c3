use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use ab_glyph::{FontArc, FontVec};

use crate::foundation::error::{BrandError, BrandResult};

/// Public-domain Tuffy Regular, the last resort of every default lookup chain.
pub const BUILTIN_FONT: &[u8] = include_bytes!("../../assets/fonts/Tuffy.ttf");
pub const BUILTIN_FONT_NAME: &str = "Tuffy";

/// Where a loaded font came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FontSource {
    /// A font file on disk.
    File(PathBuf),
    /// A face picked from the system font database.
    System {
        /// PostScript name of the chosen face.
        post_script_name: String,
    },
    /// The font compiled into the binary.
    BuiltIn,
}

impl fmt::Display for FontSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "file '{}'", path.display()),
            Self::System { post_script_name } => write!(f, "system face '{post_script_name}'"),
            Self::BuiltIn => write!(f, "built-in face '{BUILTIN_FONT_NAME}'"),
        }
    }
}

/// A parsed font plus the bytes it was parsed from.
#[derive(Clone)]
pub struct LoadedFont {
    pub font: FontArc,
    pub source: FontSource,
    data: Arc<Vec<u8>>,
}

impl LoadedFont {
    pub fn from_bytes(data: Vec<u8>, index: u32, source: FontSource) -> BrandResult<Self> {
        let font = FontVec::try_from_vec_and_index(data.clone(), index)
            .map_err(|e| BrandError::font_load(format!("{source}: {e}")))?;
        Ok(Self {
            font: FontArc::new(font),
            source,
            data: Arc::new(data),
        })
    }

    pub fn builtin() -> BrandResult<Self> {
        Self::from_bytes(BUILTIN_FONT.to_vec(), 0, FontSource::BuiltIn)
    }

    pub fn bytes(&self) -> &[u8] {
        &self.data
    }
}

impl fmt::Debug for LoadedFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadedFont")
            .field("source", &self.source)
            .field("len", &self.data.len())
            .finish()
    }
}

/// One step of the font lookup chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FontStrategy {
    /// `<dir>/<name>`.
    FontDir(PathBuf),
    /// `<name>` taken as a path.
    LiteralPath,
    /// Default sans-serif face of the system font database.
    SystemDefault,
    /// [`BUILTIN_FONT`].
    BuiltIn,
}

impl FontStrategy {
    pub fn load(&self, name: &str) -> BrandResult<LoadedFont> {
        match self {
            Self::FontDir(dir) => load_file(&dir.join(name)),
            Self::LiteralPath => load_file(Path::new(name)),
            Self::SystemDefault => load_system_default(),
            Self::BuiltIn => LoadedFont::builtin(),
        }
    }
}

fn load_file(path: &Path) -> BrandResult<LoadedFont> {
    let data = std::fs::read(path).map_err(|e| {
        BrandError::font_load(format!("could not read '{}': {e}", path.display()))
    })?;
    LoadedFont::from_bytes(data, 0, FontSource::File(path.to_path_buf()))
}

fn load_system_default() -> BrandResult<LoadedFont> {
    use usvg::fontdb::{Database, Family, Query};

    let mut db = Database::new();
    db.load_system_fonts();

    let query = Query {
        families: &[Family::SansSerif],
        ..Query::default()
    };
    let id = db
        .query(&query)
        .or_else(|| db.faces().next().map(|face| face.id))
        .ok_or_else(|| BrandError::font_load("system font database is empty"))?;

    let post_script_name = db
        .face(id)
        .map(|face| face.post_script_name.clone())
        .unwrap_or_default();

    db.with_face_data(id, |data, index| {
        LoadedFont::from_bytes(
            data.to_vec(),
            index,
            FontSource::System {
                post_script_name: post_script_name.clone(),
            },
        )
    })
    .ok_or_else(|| {
        BrandError::font_load(format!("system face '{post_script_name}' has no data"))
    })?
}

/// Ordered font lookup. The first strategy that yields a font wins.
#[derive(Clone, Debug)]
pub struct FontResolver {
    strategies: Vec<FontStrategy>,
}

impl FontResolver {
    /// Font directory, literal path, system default face, then the built-in face.
    pub fn new(font_dir: impl Into<PathBuf>) -> Self {
        Self::with_strategies(vec![
            FontStrategy::FontDir(font_dir.into()),
            FontStrategy::LiteralPath,
            FontStrategy::SystemDefault,
            FontStrategy::BuiltIn,
        ])
    }

    pub fn with_strategies(strategies: Vec<FontStrategy>) -> Self {
        Self { strategies }
    }

    pub fn strategies(&self) -> &[FontStrategy] {
        &self.strategies
    }

    /// Never fails: every strategy error is logged and `None` means nothing was usable.
    pub fn resolve(&self, name: &str) -> Option<LoadedFont> {
        for strategy in &self.strategies {
            match strategy.load(name) {
                Ok(font) => {
                    if font.source == FontSource::BuiltIn {
                        tracing::warn!(font = name, "falling back to built-in font");
                    } else {
                        tracing::debug!(font = name, source = %font.source, "resolved font");
                    }
                    return Some(font);
                }
                Err(err) => {
                    tracing::warn!(font = name, ?strategy, %err, "font strategy failed");
                }
            }
        }
        tracing::warn!(font = name, "no usable font found, text will not be drawn");
        None
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/font.rs"]
mod tests;
