use crate::cli::{Cli, Command};

pub fn dispatch(cli: Cli) -> Result<(), String> {
    match cli.command {
        Command::Migrate(args) => migrate::run(args),
        Command::Status(args) => status::run(args),
    }
}

pub mod migrate;
pub mod status;
