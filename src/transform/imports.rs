//! Responsive helper import detection and insertion.
//!
//! Works on raw file content. The anchor is the `StyleSheet` import from
//! react-native; the responsive import line is inserted right after the
//! leftmost occurrence only.

use regex::{Captures, Regex};

/// Marker substring gating eligibility: the file must use StyleSheet.
const STYLE_MARKER: &str = "StyleSheet";

/// The responsive utils module path, in both quote styles.
const RESPONSIVE_MODULE_SINGLE: &str = "from '../utils/responsive'";
const RESPONSIVE_MODULE_DOUBLE: &str = "from \"../utils/responsive\"";

/// Import line inserted after the anchor.
const RESPONSIVE_IMPORT: &str = "\nimport { getResponsiveFontSize, getResponsiveSpacing, getResponsiveValue, getResponsiveGrid } from '../utils/responsive';";

/// Anchor: the react-native import that brings in StyleSheet.
const ANCHOR_PATTERN: &str =
    r#"import\s+\{[^}]*StyleSheet[^}]*\}\s+from\s+['"]react-native['"];?"#;

/// Result of an insertion attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportInsertion {
    /// Import inserted; carries the new content.
    Inserted(String),
    /// The responsive import is already present (either quote style).
    AlreadyPresent,
    /// No react-native StyleSheet import to anchor on; content unchanged.
    AnchorNotFound,
}

/// Whether the file uses StyleSheet at all.
pub fn has_style_marker(content: &str) -> bool {
    content.contains(STYLE_MARKER)
}

/// Whether the responsive import is already present.
pub fn has_responsive_import(content: &str) -> bool {
    content.contains(RESPONSIVE_MODULE_SINGLE) || content.contains(RESPONSIVE_MODULE_DOUBLE)
}

/// Insert the responsive import line after the leftmost anchor match.
///
/// Later occurrences of the anchor pattern in the same file are not touched.
pub fn insert_responsive_import(content: &str) -> ImportInsertion {
    if has_responsive_import(content) {
        return ImportInsertion::AlreadyPresent;
    }

    let anchor = Regex::new(ANCHOR_PATTERN).unwrap();
    if !anchor.is_match(content) {
        return ImportInsertion::AnchorNotFound;
    }

    let new_content = anchor.replacen(content, 1, |caps: &Captures| {
        format!("{}{}", &caps[0], RESPONSIVE_IMPORT)
    });
    ImportInsertion::Inserted(new_content.into_owned())
}

#[cfg(test)]
#[path = "imports_test.rs"]
mod tests;
