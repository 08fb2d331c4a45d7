//! Numeric style value rewriting.
//!
//! Fixed, ordered list of textual substitutions. Each rule matches a style
//! property key followed by a colon, optional whitespace, a bare unsigned
//! integer and a trailing comma. Values already wrapped in a helper call,
//! decimal values, and values without a trailing comma are left untouched,
//! so the simple rewrites are idempotent across reruns.

use regex::{Captures, Regex};

/// Properties scaled with getResponsiveSpacing, in application order.
const SPACING_PROPS: [&str; 15] = [
    "padding",
    "paddingHorizontal",
    "paddingVertical",
    "paddingTop",
    "paddingBottom",
    "paddingLeft",
    "paddingRight",
    "margin",
    "marginHorizontal",
    "marginVertical",
    "marginTop",
    "marginBottom",
    "marginLeft",
    "marginRight",
    "gap",
];

/// Compiled rewrite rules for one migration run.
pub struct StyleRules {
    font_size: Regex,
    spacing: Vec<(Regex, String)>,
    border_radius: Regex,
}

impl StyleRules {
    pub fn new() -> Self {
        let spacing = SPACING_PROPS
            .iter()
            .map(|prop| {
                (
                    prop_pattern(prop),
                    format!("{prop}: getResponsiveSpacing($1),"),
                )
            })
            .collect();

        Self {
            font_size: prop_pattern("fontSize"),
            spacing,
            border_radius: prop_pattern("borderRadius"),
        }
    }

    /// Apply every rule in order over the whole buffer.
    pub fn apply(&self, content: &str) -> String {
        let mut content = self
            .font_size
            .replace_all(content, "fontSize: getResponsiveFontSize($1),")
            .into_owned();

        for (pattern, replacement) in &self.spacing {
            content = pattern
                .replace_all(&content, replacement.as_str())
                .into_owned();
        }

        // borderRadius gets three tiers: phone, tablet (x1.2), large tablet (x1.4)
        self.border_radius
            .replace_all(&content, |caps: &Captures| {
                let base: f64 = caps[1].parse().unwrap();
                format!(
                    "borderRadius: getResponsiveValue({}, {:?}, {:?}),",
                    &caps[1],
                    base * 1.2,
                    base * 1.4
                )
            })
            .into_owned()
    }
}

impl Default for StyleRules {
    fn default() -> Self {
        Self::new()
    }
}

/// `<prop>:` + optional whitespace + bare integer + trailing comma
fn prop_pattern(prop: &str) -> Regex {
    Regex::new(&format!(r"{prop}:\s*(\d+),")).unwrap()
}

#[cfg(test)]
#[path = "styles_test.rs"]
mod tests;

#[cfg(test)]
#[path = "styles_proptests.rs"]
mod proptests;
