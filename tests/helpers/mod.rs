use xflow_validator::document::*;

// =============================================================================
// Document builders
// =============================================================================

/// Minimal valid document: two nodes joined by one edge.
pub fn base_document() -> XflowDocument {
    XflowDocument {
        id: "f1".into(),
        name: "demo".into(),
        version: 1,
        requirements: vec![requirement("core")],
        variables: VariableScope {
            input: vec![],
            output: vec![],
            local: vec![],
        },
        nodes: vec![node(1, "A"), node(2, "B")],
        edges: vec![(1, 2)],
        branches: vec![],
    }
}

pub fn requirement(xtype: &str) -> Requirement {
    Requirement {
        xtype: xtype.into(),
        version: 1,
    }
}

pub fn node(id: i32, label: &str) -> FlowNode {
    FlowNode {
        id,
        nodetype: "flow".into(),
        action: "noop".into(),
        label: label.into(),
        parameters: serde_json::Map::new(),
    }
}

pub fn variable(name: &str, vtype: VariableType, value: &str) -> ScopeVariable {
    ScopeVariable {
        name: name.into(),
        vtype,
        value: value.into(),
    }
}

pub fn output(name: &str, vtype: VariableType) -> ScopeVariableReference {
    ScopeVariableReference {
        name: name.into(),
        vtype,
    }
}

pub fn branch(edge: FlowEdge, name: &str, value: BranchValue) -> FlowBranch {
    FlowBranch {
        edge,
        name: name.into(),
        value,
    }
}
