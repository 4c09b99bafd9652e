// Structural equivalence: kind-and-field sameness, blind to positions,
// formatting and comments. Useful for determining whether two variables
// have the same definition before rewriting one of them.

use crate::domain::node::{FieldValue, Node};
use crate::domain::snapshot::Subject;
use std::collections::BTreeSet;

/// Compare two subjects structurally. Paths are resolved to their nodes
/// first; `meta` never participates.
pub fn equivalent<'a, 'b>(a: impl Into<Subject<'a>>, b: impl Into<Subject<'b>>) -> bool {
    nodes_equivalent(a.into().node(), b.into().node())
}

/// The one-operand form of [`equivalent`]: captures a reference node once
/// and yields a reusable predicate for the second operand. The captured
/// node is cloned, so the matcher may outlive the snapshot it came from.
#[derive(Debug, Clone)]
pub struct EquivalentTo {
    reference: Node,
}

impl EquivalentTo {
    pub fn new<'a>(reference: impl Into<Subject<'a>>) -> Self {
        EquivalentTo {
            reference: reference.into().node().clone(),
        }
    }

    pub fn check<'a>(&self, candidate: impl Into<Subject<'a>>) -> bool {
        nodes_equivalent(&self.reference, candidate.into().node())
    }

    pub fn reference(&self) -> &Node {
        &self.reference
    }
}

fn nodes_equivalent(a: &Node, b: &Node) -> bool {
    if a.kind != b.kind {
        return false;
    }
    // Union of field names: a field absent on one side only matches an
    // explicit null on the other.
    let names: BTreeSet<&str> = a
        .fields
        .keys()
        .chain(b.fields.keys())
        .map(|k| k.as_str())
        .collect();
    names
        .into_iter()
        .all(|name| values_equivalent(a.fields.get(name), b.fields.get(name)))
}

fn values_equivalent(a: Option<&FieldValue>, b: Option<&FieldValue>) -> bool {
    let a = a.unwrap_or(&FieldValue::Null);
    let b = b.unwrap_or(&FieldValue::Null);
    match (a, b) {
        (FieldValue::Null, FieldValue::Null) => true,
        (FieldValue::Bool(x), FieldValue::Bool(y)) => x == y,
        (FieldValue::Num(x), FieldValue::Num(y)) => x == y,
        (FieldValue::Str(x), FieldValue::Str(y)) => x == y,
        (FieldValue::Node(x), FieldValue::Node(y)) => nodes_equivalent(x, y),
        (FieldValue::List(xs), FieldValue::List(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .zip(ys.iter())
                    .all(|(x, y)| nodes_equivalent(x, y))
        }
        _ => false,
    }
}
