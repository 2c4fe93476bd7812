//! External OpenSCAD renderer invocations.

use std::path::Path;

use anyhow::Context;
use duct::cmd;
use tracing::info;

/// Renderer binary name, resolved through PATH.
pub const OPENSCAD_BIN: &str = "openscad";

/// Render `scad` to `stl` with `openscad -o`. Blocks until the renderer exits.
pub fn export_stl(scad: &Path, stl: &Path) -> anyhow::Result<()> {
    info!(scad = %scad.display(), stl = %stl.display(), "rendering STL");
    cmd!(OPENSCAD_BIN, "-o", stl, scad)
        .stdout_null()
        .stderr_capture()
        .run()
        .with_context(|| format!("{OPENSCAD_BIN} -o {} failed", stl.display()))?;
    Ok(())
}

/// Launch the OpenSCAD GUI on `scad` without waiting for it.
pub fn open_in_gui(scad: &Path) -> anyhow::Result<()> {
    cmd!(OPENSCAD_BIN, scad)
        .stdout_null()
        .stderr_null()
        .start()
        .with_context(|| format!("could not launch {OPENSCAD_BIN}"))?;
    Ok(())
}
