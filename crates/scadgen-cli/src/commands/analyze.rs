//! `scadgen analyze`

use std::io::Write;

use anyhow::Context;
use scadgen_core::config::ScadgenConfig;
use scadgen_core::models::ComplexityReport;
use scadgen_validation::ComplexityAnalyzer;

use crate::cli::AnalyzeArgs;

pub fn run(args: &AnalyzeArgs, config: &ScadgenConfig) -> anyhow::Result<()> {
    let code = std::fs::read_to_string(&args.path)
        .with_context(|| format!("reading {}", args.path.display()))?;
    let report = ComplexityAnalyzer::new(config.complexity.clone()).analyze(&code);
    let stdout = std::io::stdout();
    write_report(&report, args.json, &mut stdout.lock())
}

pub fn write_report(
    report: &ComplexityReport,
    json: bool,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, report)?;
        writeln!(out)?;
        return Ok(());
    }
    writeln!(out, "modules:       {}", report.modules)?;
    writeln!(out, "primitives:    {}", report.primitives)?;
    writeln!(out, "boolean ops:   {}", report.boolean_ops)?;
    writeln!(out, "score:         {:.1}", report.score)?;
    writeln!(out, "render:        {}", report.bucket.as_str())?;
    if report.suggestions.is_empty() {
        writeln!(out, "suggestions:   none")?;
    } else {
        writeln!(out, "suggestions:")?;
        for suggestion in &report.suggestions {
            writeln!(out, "  - [{}] {}", suggestion.pattern, suggestion.message)?;
        }
    }
    Ok(())
}
