use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        BrandError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(BrandError::format("x").to_string().contains("format error:"));
    assert!(
        BrandError::font_load("x")
            .to_string()
            .contains("font load error:")
    );
    assert!(
        BrandError::invalid_argument("x")
            .to_string()
            .contains("invalid argument:")
    );
}

#[test]
fn io_names_the_path() {
    let err = BrandError::io("branding/x.gif", std::io::Error::other("disk full"));
    let msg = err.to_string();
    assert!(msg.contains("branding/x.gif"));
    assert!(msg.contains("disk full"));
}
