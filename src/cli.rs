use clap::{Parser, Subcommand};

use crate::commands::{migrate, status};

#[derive(Debug, Parser)]
#[command(name = "rsm")]
#[command(about = "Responsive Style Migrator CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 対象スクリーンをレスポンシブ化
    Migrate(migrate::Args),

    /// スクリーンの移行状況を表示
    Status(status::Args),
}
