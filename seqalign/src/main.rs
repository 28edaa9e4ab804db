mod args;
mod multiple;
mod pairwise;
mod table;
mod util;

use args::{Cli, SubCommands};
use multiple::multiple;
use pairwise::{global, local};
use table::table;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    color_backtrace::install();
    env_logger::init();

    match Cli::parse().command {
        SubCommands::Global(args) => global(&args)?,
        SubCommands::Local(args) => local(&args)?,
        SubCommands::Multiple(args) => multiple(&args)?,
        SubCommands::Table(args) => table(&args)?,
    }
    Ok(())
}
