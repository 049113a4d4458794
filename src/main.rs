//! CLI entry point for the live algorithm demo

use algosim::io::cli::{Cli, CommandRunner, init_logging};
use clap::Parser;

fn main() -> algosim::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = std::io::stdout();
    let mut runner = CommandRunner::new(cli.command, stdout.lock());
    runner.process()
}
