//! Graph model for display: construction from an adjacency list and layout.

pub mod display_graph;
pub mod render;

pub use display_graph::DisplayGraph;
pub use render::render_svg;
