//! `scadgen` command-line front end.
//!
//! Exit codes: 0 when an artifact was produced (fallback included),
//! 1 on backend or transport failure, 2 on a malformed request or
//! configuration.

pub mod cli;
pub mod commands;
pub mod exit;
pub mod render;

use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use scadgen_core::config::ScadgenConfig;

pub use cli::{AnalyzeArgs, Cli, Command, GenerateArgs};

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "scadgen.toml";

pub fn run(cli: Cli) -> ExitCode {
    match dispatch(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(exit::code_for(&err))
        }
    }
}

fn dispatch(cli: Cli) -> anyhow::Result<()> {
    let mut config = load_config(cli.config.as_deref())?;
    if cli.verbose {
        config.observability.log_level = "debug".to_string();
    }
    if cli.json_logs {
        config.observability.json = true;
    }
    scadgen_observability::init_tracing_with(&config.observability);

    match cli.command {
        Command::Generate(args) => commands::generate::run(&args, config),
        Command::Analyze(args) => commands::analyze::run(&args, &config),
    }
}

/// Explicit path, else `scadgen.toml` if present, else defaults.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<ScadgenConfig> {
    match path {
        Some(path) => ScadgenConfig::load(path)
            .with_context(|| format!("loading config {}", path.display())),
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
            ScadgenConfig::load(Path::new(DEFAULT_CONFIG_FILE))
                .with_context(|| format!("loading config {DEFAULT_CONFIG_FILE}"))
        }
        None => Ok(ScadgenConfig::default()),
    }
}
