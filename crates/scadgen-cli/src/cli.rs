use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use scadgen_core::models::{BackendKind, ManufacturingMethod};

#[derive(Debug, Parser)]
#[command(name = "scadgen")]
#[command(version, about = "Generate parametric OpenSCAD code from a design description")]
pub struct Cli {
    /// TOML configuration file. Defaults to ./scadgen.toml when present.
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level.
    #[arg(long, short = 'v', global = true, default_value_t = false)]
    pub verbose: bool,

    /// Emit log lines as JSON.
    #[arg(long, global = true, default_value_t = false)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate OpenSCAD code for a design request.
    Generate(GenerateArgs),
    /// Report render complexity of an existing .scad file.
    Analyze(AnalyzeArgs),
}

#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Free-text description of the part.
    pub prompt: String,

    /// Manufacturing method: none, printing, cnc, injection-molding.
    #[arg(long, short = 'm', value_parser = parse_method)]
    pub method: Option<ManufacturingMethod>,

    /// Library to use and import; repeatable.
    #[arg(long = "library", short = 'l')]
    pub libraries: Vec<String>,

    /// Write the generated code to this .scad file.
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Render an STL with the openscad binary.
    #[arg(long)]
    pub stl: Option<PathBuf>,

    /// Open the result in the OpenSCAD GUI.
    #[arg(long, default_value_t = false)]
    pub open: bool,

    /// Override the configured backend: openai, anthropic, ollama.
    #[arg(long, value_parser = parse_backend)]
    pub backend: Option<BackendKind>,

    /// Override the configured model variant.
    #[arg(long)]
    pub model: Option<String>,

    /// Override the repair attempt budget.
    #[arg(long)]
    pub max_attempts: Option<u32>,

    /// Print the full artifact as JSON instead of bare code.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Debug, Clone, Args)]
pub struct AnalyzeArgs {
    /// Path to an OpenSCAD file.
    pub path: PathBuf,

    /// Print the report as JSON.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

fn parse_method(value: &str) -> Result<ManufacturingMethod, String> {
    value.parse().map_err(|e: scadgen_core::errors::RequestError| e.to_string())
}

fn parse_backend(value: &str) -> Result<BackendKind, String> {
    value.parse().map_err(|e: scadgen_core::errors::ConfigError| e.to_string())
}
