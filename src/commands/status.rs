//! rsm status コマンド
//!
//! 対象ディレクトリのスクリーンファイルを走査し、移行状況を一覧する。
//! 読み取り専用で、ファイルには一切変更を加えない。

use crate::config::DEFAULT_SCREENS_DIR;
use crate::transform::imports;
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, Parser)]
pub struct Args {
    /// Directory containing the screen files
    #[arg(long)]
    pub dir: Option<PathBuf>,
}

/// スクリーンの移行状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenState {
    /// responsive import 済み
    Responsive,
    /// StyleSheet はあるが未移行
    Pending,
    /// StyleSheet を使っていない
    NoStyles,
}

impl ScreenState {
    pub fn label(&self) -> &'static str {
        match self {
            ScreenState::Responsive => "responsive",
            ScreenState::Pending => "pending",
            ScreenState::NoStyles => "no styles",
        }
    }

    fn color(&self) -> Color {
        match self {
            ScreenState::Responsive => Color::Green,
            ScreenState::Pending => Color::Yellow,
            ScreenState::NoStyles => Color::Grey,
        }
    }
}

/// ファイル内容から移行状態を判定する
pub fn classify(content: &str) -> ScreenState {
    if imports::has_responsive_import(content) {
        ScreenState::Responsive
    } else if imports::has_style_marker(content) {
        ScreenState::Pending
    } else {
        ScreenState::NoStyles
    }
}

pub fn run(args: Args) -> Result<(), String> {
    let dir = args
        .dir
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SCREENS_DIR));
    if !dir.is_dir() {
        return Err(format!("Not a directory: {}", dir.display()));
    }

    let mut rows: Vec<(String, ScreenState)> = Vec::new();
    for entry in WalkDir::new(&dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| e.to_string())?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("js") {
            continue;
        }

        let content = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
        let name = entry.file_name().to_string_lossy().to_string();
        rows.push((name, classify(&content)));
    }

    if rows.is_empty() {
        println!("No screen files found in {}", dir.display());
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["File", "State"]);
    for (name, state) in &rows {
        table.add_row(vec![
            Cell::new(name),
            Cell::new(state.label()).fg(state.color()),
        ]);
    }
    println!("{table}");

    let count_of = |wanted: ScreenState| rows.iter().filter(|(_, s)| *s == wanted).count();
    println!(
        "\n{} responsive, {} pending, {} without styles",
        count_of(ScreenState::Responsive),
        count_of(ScreenState::Pending),
        count_of(ScreenState::NoStyles)
    );

    Ok(())
}

#[cfg(test)]
#[path = "status_test.rs"]
mod tests;
