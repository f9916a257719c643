//! Type-consistency rules for variable literals.

use std::collections::HashMap;

use crate::document::{ScopeVariable, VariableType, XflowDocument};
use crate::error::Diagnostic;

/// Run all type-consistency rules. Returns all diagnostics found.
pub fn check(doc: &XflowDocument) -> Vec<Diagnostic> {
    let mut diags = Vec::new();

    scope_values_encode_types("input", &doc.variables.input, &mut diags);
    scope_values_encode_types("local", &doc.variables.local, &mut diags);
    output_types_match_sources(doc, &mut diags);

    diags
}

fn scope_values_encode_types(
    scope: &str,
    variables: &[ScopeVariable],
    diags: &mut Vec<Diagnostic>,
) {
    for (index, var) in variables.iter().enumerate() {
        if !value_encodes_type(&var.value, var.vtype) {
            diags.push(Diagnostic::consistency(
                "TYPE_MISMATCH",
                format!(
                    "Variable '{}' holds '{}', which is not a valid {} literal",
                    var.name, var.value, var.vtype
                ),
                format!("/variables/{}/{}", scope, index),
            ));
        }
    }
}

/// A variable's `value` always stores text; the text must encode the
/// declared `vtype`. Booleans are exactly `true`/`false`, case-sensitive;
/// numbers must parse as a finite double with nothing trailing.
fn value_encodes_type(value: &str, vtype: VariableType) -> bool {
    match vtype {
        VariableType::String => true,
        VariableType::Boolean => value == "true" || value == "false",
        VariableType::Number => value.parse::<f64>().is_ok_and(f64::is_finite),
    }
}

fn output_types_match_sources(doc: &XflowDocument, diags: &mut Vec<Diagnostic>) {
    let inputs: HashMap<&str, VariableType> = doc
        .variables
        .input
        .iter()
        .map(|v| (v.name.as_str(), v.vtype))
        .collect();
    let locals: HashMap<&str, VariableType> = doc
        .variables
        .local
        .iter()
        .map(|v| (v.name.as_str(), v.vtype))
        .collect();

    for (index, var) in doc.variables.output.iter().enumerate() {
        for (scope, sources) in [("local", &locals), ("input", &inputs)] {
            if let Some(&source_vtype) = sources.get(var.name.as_str()) {
                if source_vtype != var.vtype {
                    diags.push(
                        Diagnostic::consistency(
                            "OUTPUT_TYPE_MISMATCH",
                            format!(
                                "Output variable '{}' has vtype {} but its {} definition has vtype {}",
                                var.name, var.vtype, scope, source_vtype
                            ),
                            format!("/variables/output/{}", index),
                        )
                        .warning(),
                    );
                }
            }
        }
    }
}
