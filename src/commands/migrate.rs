//! rsm migrate コマンド
//!
//! 対象スクリーンへ responsive import を挿入し、ハードコードされた
//! スタイル値をヘルパー呼び出しへ書き換える。各ファイルは変更前に
//! タイムスタンプ付きでバックアップされる。

use crate::config::MigrateConfig;
use crate::fs::RealFs;
use crate::migrate::{FileReport, MigrateResult, Migrator, Outcome};
use crate::output::MigrateSummary;
use clap::Parser;
use owo_colors::OwoColorize;
use std::path::PathBuf;

#[derive(Debug, Parser)]
pub struct Args {
    /// Directory containing the target screen files
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Target file names (defaults to the built-in screen list)
    #[arg(long = "file", value_name = "NAME")]
    pub file: Vec<String>,
}

pub fn run(args: Args) -> Result<(), String> {
    let mut config = MigrateConfig::default();
    if let Some(dir) = args.dir {
        config = config.with_dir(dir);
    }
    if !args.file.is_empty() {
        config = config.with_files(args.file);
    }

    let migrator = Migrator::new(&RealFs, config);
    let result = process_all(&migrator);

    // 集計を表示
    let summary = MigrateSummary::format(
        result.updated_count(),
        result.skip_count(),
        result.failure_count(),
    );
    println!("\n{} {}", summary.prefix, summary.message);

    // 失敗があれば非0終了
    if result.failure_count() > 0 {
        return Err(format!(
            "{} file(s) failed to migrate",
            result.failure_count()
        ));
    }

    Ok(())
}

/// 宣言順に全ファイルを処理する
fn process_all(migrator: &Migrator) -> MigrateResult {
    println!("Making target screens responsive...");

    let mut result = MigrateResult::default();
    let files = migrator.config().files.clone();

    for name in files {
        println!("\nProcessing: {}", name.cyan());
        let report = migrator.process_file(&name);
        print_report(&report);
        result.record(report);
    }

    result
}

fn print_report(report: &FileReport) {
    match &report.outcome {
        Outcome::Updated => match &report.backup {
            Some(backup) => println!(
                "  {} updated (backup: {})",
                "✓".green(),
                backup.display()
            ),
            None => println!("  {} updated", "✓".green()),
        },
        Outcome::Skipped(reason) => {
            println!("  {} skipped: {}", "•".yellow(), reason.message());
        }
        Outcome::Failed(error) => {
            println!("  {} failed: {}", "✗".red(), error);
        }
    }
}

#[cfg(test)]
#[path = "migrate_test.rs"]
mod tests;
