use std::process::ExitCode;

use clap::Parser;
use scadgen_cli::Cli;

fn main() -> ExitCode {
    scadgen_cli::run(Cli::parse())
}
