//! Terminal front-end for calcpad.
//!
//! # Responsibility
//! - Parse process arguments and bootstrap core logging.
//! - Hand control to the interactive key loop.

mod cli;
mod repl;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    cli::run(cli::Args::parse())
}
