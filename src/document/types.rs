//! Serde model for the xflow document format.

use serde::{Deserialize, Serialize};

/// Directed connection between two node ids, serialized as `[from, to]`.
pub type FlowEdge = (i32, i32);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XflowDocument {
    pub id: String,
    pub name: String,
    pub version: i32,
    pub requirements: Vec<Requirement>,
    pub variables: VariableScope,
    pub nodes: Vec<FlowNode>,
    pub edges: Vec<FlowEdge>,
    pub branches: Vec<FlowBranch>,
}

impl XflowDocument {
    /// Branches attached to `edge`, matched by value.
    pub fn branches_for(&self, edge: FlowEdge) -> Vec<&FlowBranch> {
        self.branches
            .iter()
            .filter(|branch| branch.edge == edge)
            .collect()
    }
}

/// Named capability the flow depends on, with a minimum compatible version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Requirement {
    pub xtype: String,
    #[serde(default = "default_requirement_version")]
    pub version: i32,
}

fn default_requirement_version() -> i32 {
    1
}

/// The three variable partitions of a flow. Output variables carry no
/// literal value; they are produced by execution, not supplied up front.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableScope {
    pub input: Vec<ScopeVariable>,
    pub output: Vec<ScopeVariableReference>,
    pub local: Vec<ScopeVariable>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableType {
    Boolean,
    Number,
    #[default]
    String,
}

impl std::fmt::Display for VariableType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VariableType::Boolean => write!(f, "boolean"),
            VariableType::Number => write!(f, "number"),
            VariableType::String => write!(f, "string"),
        }
    }
}

/// Variable declaration used by the input and local scopes. `value` always
/// holds the textual representation of the type `vtype` denotes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScopeVariable {
    pub name: String,
    #[serde(default)]
    pub vtype: VariableType,
    #[serde(default)]
    pub value: String,
}

/// Name + type declaration without a value, used by the output scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScopeVariableReference {
    pub name: String,
    #[serde(default)]
    pub vtype: VariableType,
}

/// One unit of work. `nodetype`, `action`, and `parameters` are opaque to
/// validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowNode {
    pub id: i32,
    pub nodetype: String,
    pub action: String,
    pub label: String,
    pub parameters: serde_json::Map<String, serde_json::Value>,
}

/// Conditional outcome attached to an edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowBranch {
    pub edge: FlowEdge,
    pub name: String,
    pub value: BranchValue,
}

/// Literal carried by a branch. Any JSON primitive is permitted; a branch
/// is not bound to a declared variable's type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BranchValue {
    Boolean(bool),
    Number(f64),
    String(String),
}
