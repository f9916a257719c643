//! Cross-referential integrity rules over nodes, edges, branches, and
//! variable scopes.

use std::collections::HashSet;

use crate::document::{FlowEdge, FlowGraph, XflowDocument};
use crate::error::Diagnostic;

/// Run all referential integrity rules. Returns all diagnostics found, in
/// document order; advisory rules run last.
pub fn check(doc: &XflowDocument, graph: &FlowGraph) -> Vec<Diagnostic> {
    let mut diags = Vec::new();

    node_ids_are_unique(doc, &mut diags);
    edge_endpoints_exist(doc, &mut diags);
    edges_are_unique(doc, &mut diags);
    branch_edges_exist(doc, &mut diags);
    branch_names_are_unique_per_edge(doc, &mut diags);
    variable_names_are_unique_per_scope(doc, &mut diags);
    nodes_are_connected(doc, graph, &mut diags);
    output_variables_are_produced(doc, &mut diags);

    diags
}

fn node_ids_are_unique(doc: &XflowDocument, diags: &mut Vec<Diagnostic>) {
    let mut seen = HashSet::new();
    for (index, node) in doc.nodes.iter().enumerate() {
        if !seen.insert(node.id) {
            diags.push(Diagnostic::referential(
                "DUPLICATE_NODE_ID",
                format!("Node id {} is declared more than once", node.id),
                format!("/nodes/{}", index),
            ));
        }
    }
}

fn edge_endpoints_exist(doc: &XflowDocument, diags: &mut Vec<Diagnostic>) {
    let node_ids: HashSet<i32> = doc.nodes.iter().map(|node| node.id).collect();
    for (index, &(from, to)) in doc.edges.iter().enumerate() {
        for endpoint in [from, to] {
            if !node_ids.contains(&endpoint) {
                diags.push(Diagnostic::referential(
                    "UNKNOWN_NODE_REFERENCE",
                    format!(
                        "Edge [{}, {}] references unknown node {}",
                        from, to, endpoint
                    ),
                    format!("/edges/{}", index),
                ));
            }
        }
    }
}

fn edges_are_unique(doc: &XflowDocument, diags: &mut Vec<Diagnostic>) {
    let mut seen = HashSet::new();
    for (index, &edge) in doc.edges.iter().enumerate() {
        if !seen.insert(edge) {
            diags.push(Diagnostic::referential(
                "DUPLICATE_EDGE",
                format!("Edge [{}, {}] is declared more than once", edge.0, edge.1),
                format!("/edges/{}", index),
            ));
        }
    }
}

fn branch_edges_exist(doc: &XflowDocument, diags: &mut Vec<Diagnostic>) {
    let edges: HashSet<FlowEdge> = doc.edges.iter().copied().collect();
    for (index, branch) in doc.branches.iter().enumerate() {
        if !edges.contains(&branch.edge) {
            diags.push(Diagnostic::referential(
                "UNKNOWN_EDGE_REFERENCE",
                format!(
                    "Branch '{}' references edge [{}, {}], which is not declared",
                    branch.name, branch.edge.0, branch.edge.1
                ),
                format!("/branches/{}", index),
            ));
        }
    }
}

fn branch_names_are_unique_per_edge(doc: &XflowDocument, diags: &mut Vec<Diagnostic>) {
    let mut seen: HashSet<(FlowEdge, &str)> = HashSet::new();
    for (index, branch) in doc.branches.iter().enumerate() {
        if !seen.insert((branch.edge, branch.name.as_str())) {
            diags.push(Diagnostic::referential(
                "DUPLICATE_BRANCH_NAME",
                format!(
                    "Branch '{}' on edge [{}, {}] is declared more than once",
                    branch.name, branch.edge.0, branch.edge.1
                ),
                format!("/branches/{}", index),
            ));
        }
    }
}

fn variable_names_are_unique_per_scope(doc: &XflowDocument, diags: &mut Vec<Diagnostic>) {
    let input = doc.variables.input.iter().map(|v| v.name.as_str());
    let output = doc.variables.output.iter().map(|v| v.name.as_str());
    let local = doc.variables.local.iter().map(|v| v.name.as_str());

    unique_names_in_scope("input", input, diags);
    unique_names_in_scope("output", output, diags);
    unique_names_in_scope("local", local, diags);
}

fn unique_names_in_scope<'a>(
    scope: &str,
    names: impl Iterator<Item = &'a str>,
    diags: &mut Vec<Diagnostic>,
) {
    let mut seen = HashSet::new();
    for (index, name) in names.enumerate() {
        if !seen.insert(name) {
            diags.push(Diagnostic::referential(
                "DUPLICATE_VARIABLE_NAME",
                format!(
                    "Variable '{}' is declared more than once in the {} scope",
                    name, scope
                ),
                format!("/variables/{}/{}", scope, index),
            ));
        }
    }
}

// The format designates no entry node, so disconnected structure is flagged
// as an advisory rather than a validity failure.
fn nodes_are_connected(doc: &XflowDocument, graph: &FlowGraph, diags: &mut Vec<Diagnostic>) {
    for (index, node) in doc.nodes.iter().enumerate() {
        if graph.incoming_count(node.id) == 0 && graph.outgoing_count(node.id) == 0 {
            diags.push(
                Diagnostic::referential(
                    "ORPHAN_NODE",
                    format!("Node {} is not connected to any edge", node.id),
                    format!("/nodes/{}", index),
                )
                .warning(),
            );
        }
    }
}

// An output variable is filled from a same-named input or local variable
// when the flow completes; without one it can never be produced.
fn output_variables_are_produced(doc: &XflowDocument, diags: &mut Vec<Diagnostic>) {
    let sources: HashSet<&str> = doc
        .variables
        .input
        .iter()
        .map(|v| v.name.as_str())
        .chain(doc.variables.local.iter().map(|v| v.name.as_str()))
        .collect();

    for (index, var) in doc.variables.output.iter().enumerate() {
        if !sources.contains(var.name.as_str()) {
            diags.push(
                Diagnostic::referential(
                    "UNDEFINED_OUTPUT_VARIABLE",
                    format!(
                        "Output variable '{}' has no input or local definition",
                        var.name
                    ),
                    format!("/variables/output/{}", index),
                )
                .warning(),
            );
        }
    }
}
