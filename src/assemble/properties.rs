use crate::assemble::assembler::Palette;

/// Relative path of the logo image referenced by the root properties file.
pub const ROOT_LOGO_REF: &str = "../branding/branding_logo.png";

/// Root `BrandingProperties.properties`: only points at the logo image.
pub fn root_properties() -> String {
    format!("#selfcare logo\nselfcare.companyLogoImage = {ROOT_LOGO_REF}")
}

/// Admin `BrandingProperties.properties`: splash ramp codes and fixed UI colors.
///
/// The splash codes run from the end of the ramp backwards (`end`, `mid2`, `mid1`).
pub fn admin_properties(palette: &Palette) -> String {
    let end = palette.end;
    let mid1 = palette.mid1;
    let mid2 = palette.mid2;
    format!(
        "#splash header hex codes
splash.hex.code.1 = {end}
splash.hex.code.2 = {mid2}
splash.hex.code.3 = {mid1}

#header heading color
header.heading.color = {end}
header.navigation.color = #FFFFFF

# Go button color
header.go.font.color = #000000
header.go.background.color = #FFFFFF
header.go.border.color = #000000

#header links color
header.admin.color = #FFFFFF
header.hover.link.color = #FFFFFF

#splash header color
splash.username.color = #FFFFFF
splash.password.color = #FFFFFF
splash.login.back.ground.color = #FFFFFF
splash.login.text.color = #000000
splash.reset.back.ground.color = #FFFFFF
splash.reset.text.color = #000000

#splash content color
splash.header.color = #FFFFFF
splash.version.color = #FFFFFF"
    )
}

#[cfg(test)]
#[path = "../../tests/unit/assemble/properties.rs"]
mod tests;
