use super::*;

#[test]
fn mul_div255_identities() {
    assert_eq!(mul_div255_u8(255, 255), 255);
    assert_eq!(mul_div255_u8(0, 255), 0);
    assert_eq!(mul_div255_u8(200, 255), 200);
    assert_eq!(mul_div255_u8(255, 25), 25);
}

#[test]
fn floor_div_rounds_down_for_negatives() {
    assert_eq!(floor_div(7, 2), 3);
    assert_eq!(floor_div(-7, 2), -4);
    assert_eq!(floor_div(-6, 2), -3);
    assert_eq!(floor_div(0, 2), 0);
}
