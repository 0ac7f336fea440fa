//! CLI command implementations.

use std::io::{BufRead, Write};
use std::path::Path;

use crate::config::DisplayConfig;
use crate::display;
use crate::format::{to_dot, AdjListReader, ReaderOptions};
use crate::graph::{render_svg, DisplayGraph};
use crate::types::{AdjResult, AdjacencyList};

/// What to produce from the parsed graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Dot,
    Json,
    Text,
}

impl OutputFormat {
    /// Parse a format name as given on the command line.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "svg" => Some(Self::Svg),
            "dot" => Some(Self::Dot),
            "json" => Some(Self::Json),
            "text" => Some(Self::Text),
            _ => None,
        }
    }

    /// Name as accepted by [`OutputFormat::from_name`].
    pub fn name(&self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Dot => "dot",
            Self::Json => "json",
            Self::Text => "text",
        }
    }
}

/// Read `n` adjacency lines from `input`.
pub fn cmd_read(input: &mut impl BufRead, n: usize, strict: bool) -> AdjResult<AdjacencyList> {
    AdjListReader::with_options(ReaderOptions { strict }).read(input, n)
}

/// Produce the requested format as a string.
pub fn render(adj: &AdjacencyList, format: OutputFormat, config: &DisplayConfig) -> String {
    match format {
        OutputFormat::Svg => render_svg(&DisplayGraph::from_adjlist(adj), config),
        OutputFormat::Dot => to_dot(&DisplayGraph::from_adjlist(adj)),
        OutputFormat::Json => {
            let mut s = serde_json::to_string(adj).unwrap_or_default();
            s.push('\n');
            s
        }
        OutputFormat::Text => format!("{adj}\n"),
    }
}

/// Open the graph in the viewer and wait for it to close.
pub fn cmd_show(adj: &AdjacencyList, config: &DisplayConfig) -> AdjResult<()> {
    let graph = DisplayGraph::from_adjlist(adj);
    let path = display::show(&graph, config)?;
    log::debug!("Viewer closed; rendered file left at {}", path.display());
    Ok(())
}

/// Write the requested format to a file.
pub fn cmd_export(
    adj: &AdjacencyList,
    format: OutputFormat,
    config: &DisplayConfig,
    path: &Path,
) -> AdjResult<()> {
    std::fs::write(path, render(adj, format, config))?;
    log::info!("Wrote {} output to {}", format.name(), path.display());
    Ok(())
}

/// Write the requested format to `out`.
pub fn cmd_print(
    adj: &AdjacencyList,
    format: OutputFormat,
    config: &DisplayConfig,
    out: &mut impl Write,
) -> AdjResult<()> {
    out.write_all(render(adj, format, config).as_bytes())?;
    out.flush()?;
    Ok(())
}
