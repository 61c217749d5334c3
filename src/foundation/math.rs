pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y).min(255) as u8
}

/// Integer division rounding toward negative infinity.
pub(crate) fn floor_div(num: i32, den: i32) -> i32 {
    num.div_euclid(den)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
