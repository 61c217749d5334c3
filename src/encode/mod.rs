//! Artifact encoding and output sinks.
//!
//! Images are encoded in memory first, then handed to an [`sink::ArtifactSink`] as one write.

/// Output image formats.
pub mod format;
/// Artifact sink trait and built-in sinks.
pub mod sink;
