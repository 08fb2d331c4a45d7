use super::*;
use proptest::prelude::*;

/// 間隔系プロパティのいずれか
fn spacing_prop_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(SPACING_PROPS.to_vec())
}

proptest! {
    /// 2回適用しても結果は1回適用と同じ（冪等性）
    #[test]
    fn prop_apply_is_idempotent(
        prop in spacing_prop_strategy(),
        spacing in 0u32..10_000,
        font in 0u32..512,
        radius in 0u32..512
    ) {
        let input = format!(
            "  {prop}: {spacing},\n  fontSize: {font},\n  borderRadius: {radius},\n"
        );
        let rules = StyleRules::new();
        let once = rules.apply(&input);
        let twice = rules.apply(&once);
        prop_assert_eq!(once, twice);
    }

    /// 裸の整数値はヘルパー呼び出しに包まれる
    #[test]
    fn prop_bare_integers_are_wrapped(
        prop in spacing_prop_strategy(),
        value in 0u32..10_000
    ) {
        let input = format!("  {prop}: {value},\n");
        let output = StyleRules::new().apply(&input);
        prop_assert_eq!(
            output,
            format!("  {prop}: getResponsiveSpacing({value}),\n")
        );
    }

    /// 小数値は書き換え対象外
    #[test]
    fn prop_decimal_values_are_untouched(
        prop in spacing_prop_strategy(),
        whole in 0u32..100,
        frac in 1u32..10
    ) {
        let input = format!("  {prop}: {whole}.{frac},\n");
        let output = StyleRules::new().apply(&input);
        prop_assert_eq!(output, input);
    }
}
