use image::{Rgb, RgbImage, Rgba, RgbaImage};

use super::*;

#[test]
fn format_follows_extension() {
    assert_eq!(OutputFormat::for_path(Path::new("a/b.gif")), OutputFormat::Gif);
    assert_eq!(OutputFormat::for_path(Path::new("a/b.GIF")), OutputFormat::Gif);
    assert_eq!(OutputFormat::for_path(Path::new("a/b.png")), OutputFormat::Png);
    assert_eq!(OutputFormat::for_path(Path::new("a/b")), OutputFormat::Png);
}

#[test]
fn gif_keeps_solid_color_exactly() {
    let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(2048, 1, Rgb([0x11, 0x22, 0x33])));
    let bytes = OutputFormat::Gif.encode(&img).unwrap();
    assert_eq!(&bytes[..3], b"GIF");

    let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (2048, 1));
    assert!(decoded.pixels().all(|p| p.0 == [0x11, 0x22, 0x33, 255]));
}

#[test]
fn gif_maps_clear_pixels_to_transparency() {
    let mut img = RgbaImage::new(4, 4);
    img.put_pixel(1, 1, Rgba([10, 20, 30, 255]));
    let bytes = OutputFormat::Gif
        .encode(&DynamicImage::ImageRgba8(img))
        .unwrap();

    let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert_eq!(decoded.get_pixel(1, 1).0, [10, 20, 30, 255]);
    assert_eq!(decoded.get_pixel(0, 0).0[3], 0);
    assert_eq!(decoded.get_pixel(3, 3).0[3], 0);
}

#[test]
fn png_preserves_rgba() {
    let mut img = RgbaImage::new(3, 2);
    img.put_pixel(2, 1, Rgba([1, 2, 3, 25]));
    let src = DynamicImage::ImageRgba8(img);
    let bytes = OutputFormat::Png.encode(&src).unwrap();
    let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert_eq!(decoded, src.to_rgba8());
}

#[test]
fn encoding_is_deterministic() {
    let img = DynamicImage::ImageRgba8(RgbaImage::from_fn(32, 8, |x, y| {
        Rgba([(x * 8) as u8, (y * 30) as u8, 90, if x % 3 == 0 { 0 } else { 255 }])
    }));
    for format in [OutputFormat::Gif, OutputFormat::Png] {
        assert_eq!(format.encode(&img).unwrap(), format.encode(&img).unwrap());
    }
}
