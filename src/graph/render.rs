//! Hierarchical layout and SVG rendering through `layout-rs`.

use std::collections::HashMap;

use layout::backends::svg::SVGWriter;
use layout::core::base::Orientation;
use layout::core::geometry::Point;
use layout::core::style::StyleAttr;
use layout::std_shapes::shapes::{Arrow, Element, ShapeKind};
use layout::topo::layout::VisualGraph;

use crate::config::{Direction, DisplayConfig, NodeShape};

use super::DisplayGraph;

/// Rendered when there is nothing to lay out.
const EMPTY_SVG: &str =
    "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"0\" height=\"0\" viewBox=\"0 0 0 0\"></svg>\n";

/// Lay out `graph` top-down (or left-right) and return the SVG document.
pub fn render_svg(graph: &DisplayGraph, config: &DisplayConfig) -> String {
    if graph.node_count() == 0 {
        return EMPTY_SVG.to_string();
    }

    let orientation = match config.direction {
        Direction::TopDown => Orientation::TopToBottom,
        Direction::LeftRight => Orientation::LeftToRight,
    };
    let size = Point::new(config.node_size, config.node_size);

    let mut vg = VisualGraph::new(orientation);
    let mut handles = HashMap::with_capacity(graph.node_count());

    for label in graph.nodes() {
        let text = label.to_string();
        let shape = match config.shape {
            NodeShape::Circle => ShapeKind::Circle(text),
            NodeShape::Box => ShapeKind::new_box(&text),
        };
        let element = Element::create(shape, StyleAttr::simple(), orientation, size);
        handles.insert(label, vg.add_node(element));
    }

    for (src, dst) in graph.edges() {
        vg.add_edge(Arrow::simple(""), handles[&src], handles[&dst]);
    }

    let mut svg = SVGWriter::new();
    vg.do_it(false, false, false, &mut svg);
    log::debug!(
        "Laid out {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    svg.finalize()
}
