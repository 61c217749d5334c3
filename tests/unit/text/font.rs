use std::path::PathBuf;

use ab_glyph::Font as _;

use super::*;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("unit_font").join(name);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn default_chain_order() {
    let resolver = FontResolver::new("fonts");
    assert_eq!(
        resolver.strategies(),
        &[
            FontStrategy::FontDir(PathBuf::from("fonts")),
            FontStrategy::LiteralPath,
            FontStrategy::SystemDefault,
            FontStrategy::BuiltIn,
        ]
    );
}

#[test]
fn missing_file_is_a_font_load_error() {
    let err = FontStrategy::FontDir(PathBuf::from("does/not/exist"))
        .load("m6x11.ttf")
        .unwrap_err();
    assert!(matches!(err, BrandError::FontLoad(_)));
    assert!(err.to_string().contains("m6x11.ttf"));
}

#[test]
fn garbage_bytes_are_a_font_load_error() {
    let dir = scratch_dir("garbage");
    std::fs::write(dir.join("broken.ttf"), b"definitely not a font").unwrap();

    let err = FontStrategy::FontDir(dir).load("broken.ttf").unwrap_err();
    assert!(matches!(err, BrandError::FontLoad(_)));
}

#[test]
fn exhausted_chain_resolves_to_none() {
    let dir = scratch_dir("empty");
    let resolver = FontResolver::with_strategies(vec![
        FontStrategy::FontDir(dir),
        FontStrategy::LiteralPath,
    ]);
    assert!(resolver.resolve("no-such-font.ttf").is_none());
}

#[test]
fn builtin_face_always_loads() {
    let loaded = FontStrategy::BuiltIn.load("m6x11.ttf").unwrap();
    assert_eq!(loaded.source, FontSource::BuiltIn);
    assert_eq!(loaded.bytes(), BUILTIN_FONT);
    assert!(loaded.font.glyph_id('A').0 != 0);
}

#[test]
fn builtin_ends_the_chain_when_files_are_missing() {
    let dir = scratch_dir("builtin_fallback");
    let resolver = FontResolver::with_strategies(vec![
        FontStrategy::FontDir(dir),
        FontStrategy::LiteralPath,
        FontStrategy::BuiltIn,
    ]);
    let loaded = resolver.resolve("no-such-font.ttf").unwrap();
    assert_eq!(loaded.source, FontSource::BuiltIn);
}

#[test]
fn empty_chain_resolves_to_none() {
    let resolver = FontResolver::with_strategies(Vec::new());
    assert!(resolver.resolve("m3x6.ttf").is_none());
}

#[test]
fn source_display_names_origin() {
    let file = FontSource::File(PathBuf::from("fonts/m3x6.ttf"));
    assert!(file.to_string().contains("fonts/m3x6.ttf"));
    let sys = FontSource::System {
        post_script_name: "DejaVuSans".to_string(),
    };
    assert!(sys.to_string().contains("DejaVuSans"));
    assert!(FontSource::BuiltIn.to_string().contains(BUILTIN_FONT_NAME));
}
