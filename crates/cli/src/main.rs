use std::process::ExitCode;

use clap::{ArgAction, Parser};

mod commands;
mod printer;

use arbor_runtime::logging;
use commands::Command;

#[derive(Debug, Parser)]
#[command(
    name = "arbor",
    version,
    about = "List every file, directory and link beneath a path",
    propagate_version = true
)]
pub struct Cli {
    /// Raise the log level; repeat for more detail.
    #[arg(long, short = 'v', action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_with_verbosity(cli.verbose).ok();

    match cli.command {
        Command::Find(args) => commands::find::run(args),
        Command::Expand(args) => commands::expand::run(args),
    }
}
