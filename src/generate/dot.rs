//! Graphviz rendering of a flow document.

use crate::document::{BranchValue, FlowEdge, XflowDocument};

/// Render a document as a Graphviz digraph. Branch names and values become
/// edge labels.
pub fn document_to_dot(doc: &XflowDocument) -> String {
    format!(
        "digraph G {{\n{nodes}\n\n{edges}\n}}\n",
        nodes = build_nodes(doc),
        edges = build_edges(doc),
    )
}

fn build_nodes(doc: &XflowDocument) -> String {
    doc.nodes
        .iter()
        .map(|node| format!("  node_{}[label=\"{}\"];", node.id, node.label))
        .collect::<Vec<String>>()
        .join("\n")
}

fn build_edges(doc: &XflowDocument) -> String {
    doc.edges
        .iter()
        .map(|&edge| build_edge(doc, edge))
        .collect::<Vec<String>>()
        .join("\n")
}

fn build_edge(doc: &XflowDocument, edge: FlowEdge) -> String {
    let branches = doc.branches_for(edge);
    if branches.is_empty() {
        return format!("  node_{} -> node_{};", edge.0, edge.1);
    }

    let label = branches
        .iter()
        .map(|branch| format!("{}={}", branch.name, value_label(&branch.value)))
        .collect::<Vec<String>>()
        .join(", ");
    format!("  node_{} -> node_{}[label=\"{}\"];", edge.0, edge.1, label)
}

fn value_label(value: &BranchValue) -> String {
    match value {
        BranchValue::Boolean(b) => b.to_string(),
        BranchValue::Number(n) => n.to_string(),
        BranchValue::String(s) => s.clone(),
    }
}
