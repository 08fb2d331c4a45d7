//! スタイル値書き換えのユニットテスト

use super::*;

fn apply(content: &str) -> String {
    StyleRules::new().apply(content)
}

#[test]
fn test_font_size_is_wrapped() {
    assert_eq!(
        apply("  fontSize: 16,\n"),
        "  fontSize: getResponsiveFontSize(16),\n"
    );
}

#[test]
fn test_padding_top_is_wrapped() {
    assert_eq!(
        apply("  paddingTop: 8,\n"),
        "  paddingTop: getResponsiveSpacing(8),\n"
    );
}

#[test]
fn test_every_spacing_property_is_wrapped() {
    for prop in SPACING_PROPS {
        let input = format!("  {prop}: 12,\n");
        let expected = format!("  {prop}: getResponsiveSpacing(12),\n");
        assert_eq!(apply(&input), expected, "property {prop}");
    }
}

#[test]
fn test_border_radius_three_tiers() {
    assert_eq!(
        apply("  borderRadius: 10,\n"),
        "  borderRadius: getResponsiveValue(10, 12.0, 14.0),\n"
    );
}

#[test]
fn test_border_radius_power_of_two_base() {
    assert_eq!(
        apply("  borderRadius: 8,\n"),
        "  borderRadius: getResponsiveValue(8, 9.6, 11.2),\n"
    );
}

#[test]
fn test_whitespace_after_colon_is_normalized() {
    assert_eq!(
        apply("fontSize:16,"),
        "fontSize: getResponsiveFontSize(16),"
    );
    assert_eq!(
        apply("fontSize:   24,"),
        "fontSize: getResponsiveFontSize(24),"
    );
}

#[test]
fn test_decimal_values_are_untouched() {
    let input = "  fontSize: 16.5,\n  padding: 7.25,\n";
    assert_eq!(apply(input), input);
}

#[test]
fn test_value_without_trailing_comma_is_untouched() {
    let input = "  fontSize: 16\n";
    assert_eq!(apply(input), input);
}

#[test]
fn test_already_wrapped_values_are_fixed_points() {
    let input = "\
  fontSize: getResponsiveFontSize(16),
  paddingTop: getResponsiveSpacing(8),
  borderRadius: getResponsiveValue(10, 12.0, 14.0),
";
    assert_eq!(apply(input), input);
}

#[test]
fn test_unrelated_properties_are_untouched() {
    let input = "  width: 100,\n  flex: 1,\n  opacity: 0.5,\n";
    assert_eq!(apply(input), input);
}

#[test]
fn test_full_style_block() {
    let input = "\
const styles = StyleSheet.create({
  container: {
    padding: 16,
    paddingHorizontal: 20,
    marginTop: 12,
    gap: 8,
    borderRadius: 10,
    backgroundColor: '#fff',
  },
  title: {
    fontSize: 18,
    marginBottom: 4,
  },
});
";
    let expected = "\
const styles = StyleSheet.create({
  container: {
    padding: getResponsiveSpacing(16),
    paddingHorizontal: getResponsiveSpacing(20),
    marginTop: getResponsiveSpacing(12),
    gap: getResponsiveSpacing(8),
    borderRadius: getResponsiveValue(10, 12.0, 14.0),
    backgroundColor: '#fff',
  },
  title: {
    fontSize: getResponsiveFontSize(18),
    marginBottom: getResponsiveSpacing(4),
  },
});
";
    assert_eq!(apply(input), expected);
}

#[test]
fn test_second_apply_is_fixed_point() {
    let input = "\
  fontSize: 16,
  padding: 12,
  marginLeft: 6,
  gap: 8,
  borderRadius: 10,
";
    let once = apply(input);
    let twice = apply(&once);
    assert_eq!(once, twice);
}
