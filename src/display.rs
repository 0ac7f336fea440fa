//! Shows a rendered graph in an external viewer.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::DisplayConfig;
use crate::graph::{render_svg, DisplayGraph};
use crate::types::{AdjError, AdjResult};

/// Path of the SVG written for this process.
pub fn scratch_path() -> PathBuf {
    std::env::temp_dir().join(format!("adjview_{}.svg", std::process::id()))
}

/// Render `graph` to SVG and write it to `path`.
pub fn write_svg_file(graph: &DisplayGraph, config: &DisplayConfig, path: &Path) -> AdjResult<()> {
    std::fs::write(path, render_svg(graph, config))?;
    Ok(())
}

/// Run `viewer` on `path` and wait for it to exit.
pub fn launch_viewer(viewer: &str, path: &Path) -> AdjResult<()> {
    log::debug!("Launching viewer: {} {}", viewer, path.display());
    let status = Command::new(viewer)
        .arg(path)
        .status()
        .map_err(|e| AdjError::Viewer(format!("Failed to launch {viewer}: {e}")))?;

    if !status.success() {
        return Err(AdjError::Viewer(format!("{viewer} exited with {status}")));
    }
    Ok(())
}

/// Render the graph, open it in the configured viewer and block until the
/// viewer exits. Returns the path of the rendered file.
pub fn show(graph: &DisplayGraph, config: &DisplayConfig) -> AdjResult<PathBuf> {
    let path = scratch_path();
    write_svg_file(graph, config, &path)?;
    launch_viewer(config.viewer_command(), &path)?;
    Ok(path)
}
