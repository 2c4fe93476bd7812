//! `scadgen generate`

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use scadgen_core::config::ScadgenConfig;
use scadgen_core::models::{DesignRequest, GeneratedArtifact};
use scadgen_core::ScadgenError;
use scadgen_generation::GenerationPipeline;
use tracing::warn;

use crate::cli::GenerateArgs;
use crate::render;

/// Apply command-line overrides on top of file configuration.
pub fn apply_overrides(args: &GenerateArgs, config: &mut ScadgenConfig) {
    if let Some(backend) = args.backend {
        if backend != config.generation.backend {
            // Model, endpoint and key variable in the file belong to the old backend.
            config.generation.variant = None;
            config.generation.endpoint = None;
            config.generation.api_key_env = None;
        }
        config.generation.backend = backend;
    }
    if let Some(model) = &args.model {
        config.generation.variant = Some(model.clone());
    }
    if let Some(max_attempts) = args.max_attempts {
        config.repair.max_attempts = max_attempts;
    }
}

pub fn build_request(args: &GenerateArgs) -> Result<DesignRequest, ScadgenError> {
    Ok(DesignRequest::new(args.prompt.as_str())?
        .with_method(args.method)
        .with_libraries(args.libraries.iter().cloned()))
}

pub fn run(args: &GenerateArgs, mut config: ScadgenConfig) -> anyhow::Result<()> {
    apply_overrides(args, &mut config);
    let request = build_request(args)?;
    let pipeline = GenerationPipeline::from_config(&config)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(&pipeline, &request, args, &mut out)?;
    Ok(())
}

/// Run the pipeline and deliver the artifact: code (or JSON) to `out`, a
/// summary to stderr, then the optional file, STL and GUI outputs.
/// Once the artifact is printed, file and renderer failures are warnings.
pub fn execute(
    pipeline: &GenerationPipeline,
    request: &DesignRequest,
    args: &GenerateArgs,
    out: &mut dyn Write,
) -> anyhow::Result<GeneratedArtifact> {
    let artifact = pipeline.run(request)?;

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &artifact).context("writing artifact JSON")?;
        writeln!(out)?;
    } else {
        out.write_all(artifact.code.as_bytes())?;
        if !artifact.code.ends_with('\n') {
            writeln!(out)?;
        }
    }
    print_summary(&artifact);

    let scad_path = match (&args.output, &args.stl) {
        (Some(path), _) => Some(path.clone()),
        // Rendering needs the source on disk next to the STL.
        (None, Some(stl)) => Some(stl.with_extension("scad")),
        (None, None) if args.open => Some(PathBuf::from("scadgen_output.scad")),
        (None, None) => None,
    };
    // Rendering and opening need the file; a failed write skips both.
    let scad_path = scad_path.filter(|path| match write_scad(path, &artifact.code) {
        Ok(()) => {
            eprintln!("wrote {}", path.display());
            true
        }
        Err(e) => {
            warn!(error = %format!("{e:#}"), "could not write OpenSCAD source");
            false
        }
    });

    if let (Some(stl), Some(scad)) = (&args.stl, &scad_path) {
        match render::export_stl(scad, stl) {
            Ok(()) => eprintln!("rendered {}", stl.display()),
            Err(e) => warn!(error = %format!("{e:#}"), "STL export failed"),
        }
    }
    if args.open {
        if let Some(scad) = &scad_path {
            if let Err(e) = render::open_in_gui(scad) {
                warn!(error = %format!("{e:#}"), "could not open OpenSCAD");
            }
        }
    }
    Ok(artifact)
}

fn write_scad(path: &Path, code: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(path, code).with_context(|| format!("writing {}", path.display()))
}

fn print_summary(artifact: &GeneratedArtifact) {
    let report = &artifact.complexity;
    if artifact.is_fallback() {
        eprintln!(
            "no attempt passed validation after {} tries; emitted fallback template",
            artifact.attempts.len()
        );
    } else {
        eprintln!(
            "accepted attempt {} of {}",
            artifact.attempt_index,
            artifact.attempts.len()
        );
    }
    eprintln!(
        "complexity: {} modules, {} primitives, {} boolean ops, score {:.1} ({})",
        report.modules,
        report.primitives,
        report.boolean_ops,
        report.score,
        report.bucket.as_str()
    );
    for suggestion in &report.suggestions {
        eprintln!("  suggestion [{}]: {}", suggestion.pattern, suggestion.message);
    }
    for event in &artifact.degradations {
        eprintln!("  degraded {}: {} ({})", event.component, event.failure, event.fallback_used);
    }
}
