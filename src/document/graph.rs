//! petgraph-based directed graph wrapper for the flow document.

use std::collections::HashMap;

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};

use super::types::XflowDocument;

/// Directed view of a document's nodes and edges, keyed by node id.
///
/// Edge endpoints that do not resolve to a declared node still become
/// vertices, so degree queries reflect the document's full edge list; the
/// referential pass reports the dangling reference itself.
pub struct FlowGraph {
    pub graph: DiGraph<i32, ()>,
    pub node_indices: HashMap<i32, NodeIndex>,
}

impl FlowGraph {
    pub fn build(doc: &XflowDocument) -> Self {
        let mut graph = DiGraph::new();
        let mut node_indices = HashMap::new();

        for node in &doc.nodes {
            node_indices
                .entry(node.id)
                .or_insert_with(|| graph.add_node(node.id));
        }

        for &(from, to) in &doc.edges {
            let source = *node_indices
                .entry(from)
                .or_insert_with(|| graph.add_node(from));
            let target = *node_indices
                .entry(to)
                .or_insert_with(|| graph.add_node(to));
            graph.add_edge(source, target, ());
        }

        FlowGraph {
            graph,
            node_indices,
        }
    }

    pub fn incoming_count(&self, node_id: i32) -> usize {
        self.degree(node_id, Direction::Incoming)
    }

    pub fn outgoing_count(&self, node_id: i32) -> usize {
        self.degree(node_id, Direction::Outgoing)
    }

    fn degree(&self, node_id: i32, direction: Direction) -> usize {
        let Some(&idx) = self.node_indices.get(&node_id) else {
            return 0;
        };
        self.graph.neighbors_directed(idx, direction).count()
    }
}
