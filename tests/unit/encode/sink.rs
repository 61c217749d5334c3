use image::{Rgb, RgbImage};

use super::*;

fn scratch(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("unit_sink").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

#[test]
fn image_artifact_records_format_and_size() {
    let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(5, 1, Rgb([1, 2, 3])));
    let a = Artifact::image("branding/ccmadmin/x.gif", &img).unwrap();
    assert_eq!(
        a.kind,
        ArtifactKind::Image {
            format: OutputFormat::Gif,
            width: 5,
            height: 1,
        }
    );
    assert_eq!(&a.bytes[..3], b"GIF");

    let a = Artifact::image("branding/logo.png", &img).unwrap();
    assert!(matches!(
        a.kind,
        ArtifactKind::Image {
            format: OutputFormat::Png,
            ..
        }
    ));
}

#[test]
fn in_memory_sink_overwrites_same_path() {
    let mut sink = InMemorySink::new();
    sink.ensure_dir(Path::new("branding")).unwrap();
    sink.ensure_dir(Path::new("branding")).unwrap();
    sink.write(&Artifact::properties("branding/a.properties", "one"))
        .unwrap();
    sink.write(&Artifact::properties("branding/a.properties", "two"))
        .unwrap();

    assert_eq!(sink.dirs(), &[PathBuf::from("branding")]);
    assert_eq!(sink.artifacts().len(), 1);
    assert_eq!(sink.get("branding/a.properties").unwrap().bytes, b"two");
}

#[test]
fn dir_sink_creates_dirs_and_overwrites() {
    let root = scratch("overwrite");
    let mut sink = DirSink::new(&root);
    sink.ensure_dir(Path::new("branding/ccmadmin")).unwrap();
    sink.ensure_dir(Path::new("branding/ccmadmin")).unwrap();

    sink.write(&Artifact::properties("branding/ccmadmin/p.properties", "first"))
        .unwrap();
    sink.write(&Artifact::properties("branding/ccmadmin/p.properties", "second"))
        .unwrap();

    let text = std::fs::read_to_string(root.join("branding/ccmadmin/p.properties")).unwrap();
    assert_eq!(text, "second");
}

#[test]
fn dir_sink_write_without_dir_reports_path() {
    let root = scratch("missing_dir");
    let mut sink = DirSink::new(&root);
    let err = sink
        .write(&Artifact::properties("nope/p.properties", "x"))
        .unwrap_err();
    assert!(matches!(err, BrandError::Io { .. }));
    assert!(err.to_string().contains("p.properties"));
}
