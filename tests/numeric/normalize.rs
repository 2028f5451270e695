use ownership_map_rs::core::numeric::{normalize, normalize_position, normalize_signed};

#[test]
fn us_format_with_both_separators() {
    assert_eq!(normalize("1,234.56", false), 1234.56);
}

#[test]
fn european_format_with_both_separators() {
    assert_eq!(normalize("1.234,56", false), 1234.56);
}

#[test]
fn lone_comma_is_decimal_for_short_fractions() {
    assert_eq!(normalize("6,39", true), 6.39);
    assert_eq!(normalize("0,5", false), 0.5);
}

#[test]
fn lone_comma_is_thousands_for_longer_groups() {
    assert_eq!(normalize("1,234", false), 1234.0);
    assert_eq!(normalize("1,234,567", false), 1_234_567.0);
}

#[test]
fn placeholder_and_empty_cells_are_zero() {
    assert_eq!(normalize("-", false), 0.0);
    assert_eq!(normalize("", false), 0.0);
    assert_eq!(normalize("   ", false), 0.0);
}

#[test]
fn unparseable_input_coerces_to_zero() {
    assert_eq!(normalize("--", false), 0.0);
    assert_eq!(normalize("n/a", false), 0.0);
    assert_eq!(normalize("1.234.567", false), 0.0);
}

#[test]
fn percent_sign_is_stripped() {
    assert_eq!(normalize("45%", true), 45.0);
    assert_eq!(normalize(" 12.5 %", true), 12.5);
}

#[test]
fn percentages_clamp_to_unit_range() {
    assert_eq!(normalize("150%", true), 100.0);
    assert_eq!(normalize("-5", true), 0.0);
    assert_eq!(normalize("100.01", true), 100.0);
}

#[test]
fn non_percentages_keep_sign_and_magnitude() {
    assert_eq!(normalize("-1,234", false), -1234.0);
    assert_eq!(normalize("150", false), 150.0);
}

#[test]
fn positions_floor_at_zero() {
    assert_eq!(normalize_position("-500"), 0);
    assert_eq!(normalize_position("1,000"), 1000);
    assert_eq!(normalize_position("12.7"), 12);
}

#[test]
fn signed_fields_truncate_toward_zero() {
    assert_eq!(normalize_signed("-500"), -500);
    assert_eq!(normalize_signed("-12,5"), -12);
}
