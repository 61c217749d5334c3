use super::*;

#[test]
fn solid_background_is_uniform() {
    let c = Rgb8::new(0x11, 0x22, 0x33);
    let img = solid_background(16, 3, c).unwrap();
    assert_eq!(img.dimensions(), (16, 3));
    assert!(img.pixels().all(|p| p.0 == [0x11, 0x22, 0x33]));
}

#[test]
fn transparent_canvas_has_zero_alpha() {
    let img = transparent_canvas(44, 25).unwrap();
    assert_eq!(img.dimensions(), (44, 25));
    assert!(img.pixels().all(|p| p.0[3] == 0));
}

#[test]
fn zero_dimensions_are_rejected() {
    assert!(matches!(
        solid_background(0, 1, Rgb8::BLACK),
        Err(BrandError::InvalidArgument(_))
    ));
    assert!(matches!(
        transparent_canvas(4, 0),
        Err(BrandError::InvalidArgument(_))
    ));
    assert!(matches!(
        gradient_strip(0, Rgb8::BLACK, Rgb8::WHITE, RampDirection::LeftToRight),
        Err(BrandError::InvalidArgument(_))
    ));
}

#[test]
fn width_two_hits_both_endpoints() {
    let img = gradient_strip(2, Rgb8::BLACK, Rgb8::WHITE, RampDirection::LeftToRight).unwrap();
    assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0]);
    assert_eq!(img.get_pixel(1, 0).0, [255, 255, 255]);
}

#[test]
fn width_one_is_start_color() {
    let start = Rgb8::new(1, 2, 3);
    let img = gradient_strip(1, start, Rgb8::WHITE, RampDirection::RightToLeft).unwrap();
    assert_eq!(img.dimensions(), (1, 1));
    assert_eq!(img.get_pixel(0, 0).0, [1, 2, 3]);
}

#[test]
fn right_to_left_mirrors_left_to_right() {
    let start = Rgb8::new(255, 170, 170);
    let end = Rgb8::new(255, 85, 85);
    let ltr = gradient_strip(652, start, end, RampDirection::LeftToRight).unwrap();
    let rtl = gradient_strip(652, start, end, RampDirection::RightToLeft).unwrap();
    for x in 0..652 {
        assert_eq!(ltr.get_pixel(x, 0), rtl.get_pixel(651 - x, 0));
    }
}

#[test]
fn ramp_is_monotonic_per_channel() {
    let start = Rgb8::new(0, 200, 30);
    let end = Rgb8::new(250, 10, 30);
    let img = gradient_strip(100, start, end, RampDirection::LeftToRight).unwrap();
    assert_eq!(img.get_pixel(0, 0).0, start.channels());
    assert_eq!(img.get_pixel(99, 0).0, end.channels());
    for x in 1..100 {
        let a = img.get_pixel(x - 1, 0).0;
        let b = img.get_pixel(x, 0).0;
        assert!(b[0] >= a[0]);
        assert!(b[1] <= a[1]);
        assert_eq!(b[2], 30);
    }
}

#[test]
fn falling_channel_truncates_delta_toward_zero() {
    let img = gradient_strip(652, Rgb8::WHITE, Rgb8::BLACK, RampDirection::LeftToRight).unwrap();
    // -255 * 1 / 651 truncates to 0
    assert_eq!(img.get_pixel(1, 0).0, [255, 255, 255]);
    assert_eq!(img.get_pixel(651, 0).0, [0, 0, 0]);
}
