// Identifier-collision analysis: the names that would clash or shadow if a
// new binding were declared in the scope of a given path.

use crate::domain::error::AnalysisError;
use crate::domain::node::kinds;
use crate::domain::scope::same_scope_nodes_of_kind;
use crate::domain::snapshot::NodePath;
use std::collections::BTreeSet;

/// The distinct identifier names visible in `path`'s scope that a new
/// declaration there would collide with or shadow. Both outcomes forbid
/// reusing the name, so they are reported uniformly.
///
/// Occurrences that are only the property half of a non-computed member
/// access (`obj.prop`) name object properties, not scope bindings, and are
/// dropped. Computed access (`obj[key]`) keeps `key`: that is a real
/// reference to a binding.
pub fn conflicting_names(path: NodePath<'_>) -> Result<BTreeSet<String>, AnalysisError> {
    let mut names = BTreeSet::new();
    for occurrence in same_scope_nodes_of_kind(path, kinds::IDENTIFIER) {
        if is_member_property(occurrence) {
            continue;
        }
        let name = occurrence
            .node()
            .text("name")
            .ok_or_else(|| AnalysisError::malformed(kinds::IDENTIFIER, "name"))?;
        names.insert(name.to_string());
    }
    Ok(names)
}

/// True for the `property` slot of a non-computed member access.
fn is_member_property(path: NodePath<'_>) -> bool {
    let Some(parent) = path.parent() else {
        return false;
    };
    if parent.node().kind != kinds::MEMBER_EXPRESSION {
        return false;
    }
    match path.edge() {
        Some(edge) if edge.field == "property" => !parent.node().flag("computed"),
        _ => false,
    }
}
