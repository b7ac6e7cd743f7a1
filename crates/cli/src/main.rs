use std::process::ExitCode;

use clap::Parser;

mod commands;
mod printer;

use commands::ListArgs;
use lister_runtime::{PROGRAM_NAME, logging};

#[derive(Debug, Parser)]
#[command(
    name = PROGRAM_NAME,
    version,
    about = "List directory contents",
    long_about = "List directory contents, in columns or in long format.\n\n\
                  Example:\n  lister -la /tmp\n  lister -r src Cargo.toml"
)]
pub struct Cli {
    #[command(flatten)]
    pub list: ListArgs,
}

fn main() -> ExitCode {
    logging::init().ok();

    let cli = Cli::parse();
    commands::list::run(cli.list)
}
