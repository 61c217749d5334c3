use std::path::{Path, PathBuf};

use image::DynamicImage;

use crate::encode::format::OutputFormat;
use crate::foundation::error::{BrandError, BrandResult};

/// What an [`Artifact`] holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ArtifactKind {
    /// UTF-8 `key = value` text.
    Properties,
    /// Encoded raster image.
    Image {
        /// Encoding used for the bytes.
        format: OutputFormat,
        /// Width in pixels.
        width: u32,
        /// Height in pixels.
        height: u32,
    },
}

/// One output file: a path relative to the sink root plus its encoded bytes.
#[derive(Clone, Debug)]
pub struct Artifact {
    pub path: PathBuf,
    pub kind: ArtifactKind,
    pub bytes: Vec<u8>,
}

impl Artifact {
    pub fn properties(path: impl Into<PathBuf>, text: &str) -> Self {
        Self {
            path: path.into(),
            kind: ArtifactKind::Properties,
            bytes: text.as_bytes().to_vec(),
        }
    }

    /// Encode `image` with the format implied by `path`.
    pub fn image(path: impl Into<PathBuf>, image: &DynamicImage) -> BrandResult<Self> {
        let path = path.into();
        let format = OutputFormat::for_path(&path);
        let bytes = format.encode(image)?;
        Ok(Self {
            kind: ArtifactKind::Image {
                format,
                width: image.width(),
                height: image.height(),
            },
            path,
            bytes,
        })
    }
}

/// Destination for artifacts, called in emission order.
pub trait ArtifactSink {
    /// Make sure the relative directory `dir` exists. Must be idempotent.
    fn ensure_dir(&mut self, dir: &Path) -> BrandResult<()>;
    /// Store `artifact`, replacing any previous artifact at the same path.
    fn write(&mut self, artifact: &Artifact) -> BrandResult<()>;
}

/// Writes artifacts below a root directory on disk.
#[derive(Clone, Debug)]
pub struct DirSink {
    root: PathBuf,
}

impl DirSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ArtifactSink for DirSink {
    fn ensure_dir(&mut self, dir: &Path) -> BrandResult<()> {
        let path = self.root.join(dir);
        std::fs::create_dir_all(&path).map_err(|e| BrandError::io(&path, e))
    }

    fn write(&mut self, artifact: &Artifact) -> BrandResult<()> {
        let path = self.root.join(&artifact.path);
        std::fs::write(&path, &artifact.bytes).map_err(|e| BrandError::io(&path, e))?;
        tracing::info!(path = %path.display(), kind = ?artifact.kind, "wrote artifact");
        Ok(())
    }
}

/// Keeps artifacts in memory, for tests and previews.
#[derive(Debug, Default)]
pub struct InMemorySink {
    dirs: Vec<PathBuf>,
    artifacts: Vec<Artifact>,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Directories requested so far, deduplicated, in first-request order.
    pub fn dirs(&self) -> &[PathBuf] {
        &self.dirs
    }

    /// Artifacts in emission order.
    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<&Artifact> {
        let path = path.as_ref();
        self.artifacts.iter().find(|a| a.path == path)
    }
}

impl ArtifactSink for InMemorySink {
    fn ensure_dir(&mut self, dir: &Path) -> BrandResult<()> {
        if !self.dirs.iter().any(|d| d == dir) {
            self.dirs.push(dir.to_path_buf());
        }
        Ok(())
    }

    fn write(&mut self, artifact: &Artifact) -> BrandResult<()> {
        match self.artifacts.iter_mut().find(|a| a.path == artifact.path) {
            Some(existing) => *existing = artifact.clone(),
            None => self.artifacts.push(artifact.clone()),
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
