use super::*;

#[test]
fn fixed6_pads_and_rounds() {
    assert_eq!(fixed6(0.0625), "0.062500");
    assert_eq!(fixed6(-15.9375), "-15.937500");
    assert_eq!(fixed6(1.0 / 3.0), "0.333333");
}

#[test]
fn group_thousands_inserts_separators() {
    assert_eq!(group_thousands(0), "0");
    assert_eq!(group_thousands(999), "999");
    assert_eq!(group_thousands(1000), "1,000");
    assert_eq!(group_thousands(65_536), "65,536");
    assert_eq!(group_thousands(1_048_576), "1,048,576");
}

#[test]
fn megabytes_uses_two_decimals() {
    assert_eq!(megabytes(1.234), "1.23 MB");
}
