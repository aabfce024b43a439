use super::*;

#[test]
fn parses_and_trims_input() {
    assert_eq!(parse_clamped(" 12.5 ", None, None), Some(12.5));
    assert_eq!(parse_clamped("-3", None, None), Some(-3.0));
}

#[test]
fn rejects_non_numeric_input() {
    assert_eq!(parse_clamped("", None, None), None);
    assert_eq!(parse_clamped("abc", None, None), None);
    assert_eq!(parse_clamped("12px", None, None), None);
    assert_eq!(parse_clamped("NaN", None, None), None);
    assert_eq!(parse_clamped("inf", None, None), None);
}

#[test]
fn clamps_to_bounds() {
    assert_eq!(parse_clamped("-5", Some(0.0), None), Some(0.0));
    assert_eq!(parse_clamped("150", None, Some(100.0)), Some(100.0));
    assert_eq!(parse_clamped("50", Some(0.0), Some(100.0)), Some(50.0));
}

#[test]
fn formats_integers_without_fraction() {
    assert_eq!(format_value(4.0), "4");
    assert_eq!(format_value(4.5), "4.5");
    assert_eq!(format_value(-0.0), "-0");
}
