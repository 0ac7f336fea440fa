//! Graphviz DOT export.

use std::io::Write;
use std::path::Path;

use petgraph::dot::{Config, Dot};

use crate::graph::DisplayGraph;
use crate::types::AdjResult;

/// Render the graph as a DOT `digraph` with integer node labels.
pub fn to_dot(graph: &DisplayGraph) -> String {
    format!(
        "{:?}",
        Dot::with_config(graph.inner(), &[Config::EdgeNoLabel])
    )
}

/// Write DOT text to any writer.
pub fn write_dot(graph: &DisplayGraph, writer: &mut impl Write) -> AdjResult<()> {
    writer.write_all(to_dot(graph).as_bytes())?;
    Ok(())
}

/// Write DOT text to a file.
pub fn write_dot_file(graph: &DisplayGraph, path: &Path) -> AdjResult<()> {
    let file = std::fs::File::create(path)?;
    let mut writer = std::io::BufWriter::new(file);
    write_dot(graph, &mut writer)?;
    writer.flush()?;
    Ok(())
}
