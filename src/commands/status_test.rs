//! status コマンドのユニットテスト

use super::*;

#[test]
fn test_classify_responsive() {
    let content = "\
import { StyleSheet } from 'react-native';
import { getResponsiveSpacing } from '../utils/responsive';
";
    assert_eq!(classify(content), ScreenState::Responsive);
}

#[test]
fn test_classify_pending() {
    let content = "import { StyleSheet } from 'react-native';\n";
    assert_eq!(classify(content), ScreenState::Pending);
}

#[test]
fn test_classify_no_styles() {
    assert_eq!(
        classify("import React from 'react';\n"),
        ScreenState::NoStyles
    );
}

#[test]
fn test_run_over_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("a.js"),
        "import { StyleSheet } from 'react-native';\n",
    )
    .unwrap();
    std::fs::write(dir.path().join("b.js"), "import React from 'react';\n").unwrap();
    // .js 以外は無視される
    std::fs::write(dir.path().join("notes.txt"), "StyleSheet").unwrap();

    let result = run(Args {
        dir: Some(dir.path().to_path_buf()),
    });
    assert!(result.is_ok());
}

#[test]
fn test_run_rejects_missing_directory() {
    let result = run(Args {
        dir: Some(std::path::PathBuf::from("/no/such/dir")),
    });
    assert!(result.is_err());
}
