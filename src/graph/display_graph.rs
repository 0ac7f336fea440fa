//! Directed graph handed to the layout and export backends.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};

use crate::types::{AdjacencyList, NodeId};

/// Simple directed graph built from an [`AdjacencyList`].
///
/// Nodes `0..n` are always present, in order, labelled by their index. A
/// neighbor outside that range gets its own node, appended in order of first
/// reference. Repeated `(source, target)` pairs collapse into one edge.
pub struct DisplayGraph {
    graph: DiGraph<NodeId, ()>,
    /// Label -> petgraph index.
    index: HashMap<NodeId, NodeIndex>,
    /// Number of nodes implied by the adjacency list length.
    declared: usize,
}

impl DisplayGraph {
    /// Build the graph from a populated adjacency list.
    pub fn from_adjlist(adj: &AdjacencyList) -> Self {
        let declared = adj.len();
        let mut graph = DiGraph::with_capacity(declared, adj.edge_count());
        let mut index = HashMap::with_capacity(declared);

        for i in 0..declared {
            let label = i as NodeId;
            index.insert(label, graph.add_node(label));
        }

        for (src, dst) in adj.edges() {
            let from = index[&(src as NodeId)];
            let to = match index.get(&dst) {
                Some(&to) => to,
                None => {
                    log::warn!(
                        "Node {src} references {dst}, outside 0..{declared}; adding it as an extra node"
                    );
                    let to = graph.add_node(dst);
                    index.insert(dst, to);
                    to
                }
            };
            graph.update_edge(from, to, ());
        }

        log::debug!(
            "Display graph: {} nodes ({} declared), {} edges",
            graph.node_count(),
            declared,
            graph.edge_count()
        );

        Self {
            graph,
            index,
            declared,
        }
    }

    /// Number of nodes, extra nodes included.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of distinct edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Number of nodes implied by the adjacency list length.
    pub fn declared_count(&self) -> usize {
        self.declared
    }

    /// Node labels in insertion order.
    pub fn nodes(&self) -> Vec<NodeId> {
        self.graph.node_weights().copied().collect()
    }

    /// Edges as `(source label, target label)` in insertion order.
    pub fn edges(&self) -> Vec<(NodeId, NodeId)> {
        self.graph
            .raw_edges()
            .iter()
            .map(|e| (self.graph[e.source()], self.graph[e.target()]))
            .collect()
    }

    /// Labels referenced by edges but outside `0..declared_count()`.
    pub fn extra_nodes(&self) -> Vec<NodeId> {
        self.nodes().into_iter().skip(self.declared).collect()
    }

    /// True if a node with this label exists.
    pub fn contains(&self, label: NodeId) -> bool {
        self.index.contains_key(&label)
    }

    /// Underlying petgraph graph.
    pub fn inner(&self) -> &DiGraph<NodeId, ()> {
        &self.graph
    }
}
