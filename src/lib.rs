//! adjlist-view — read a directed graph as an adjacency list and render it.
//!
//! Input is line-oriented text, one line per node: `<label>: <int>, <int>, ...`.
//! The parsed [`AdjacencyList`] is turned into a [`DisplayGraph`], laid out
//! hierarchically and rendered to SVG or exported as DOT.

pub mod cli;
pub mod config;
pub mod display;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use config::{load_config, parse_config, Direction, DisplayConfig, NodeShape};
pub use format::{parse_line, read_input_adjlist, to_dot, AdjListReader, ReaderOptions};
pub use graph::{render_svg, DisplayGraph};
pub use types::{AdjError, AdjResult, AdjacencyList, NodeId};
