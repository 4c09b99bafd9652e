// Tree Surgeon: scope-aware AST analysis primitives for safe code
// transformations.
//
// A transformation author gets node handles from a Snapshot, then asks the
// semantic questions here ("are these subtrees equivalent?", "what names
// would a new binding collide with?", "does this call's callee match a
// pattern?") before mutating the tree. Mutation itself stays outside this
// crate.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

// Flat namespace: everything is callable right after `use tree_surgeon::*;`
// with no construction or teardown step beyond building a registry.
pub use application::builders;
pub use application::builders::member_chain;
pub use application::{append_comment, not, pretty_print, summarize, CalleeMatch, CalleeMatcher};
pub use domain::collision::conflicting_names;
pub use domain::equiv::{equivalent, EquivalentTo};
pub use domain::error::AnalysisError;
pub use domain::node::{kinds, Comment, FieldValue, Meta, Node, Span};
pub use domain::registry::{KindAssertion, KindPredicate, KindRegistry, KindSpec, ScopeRule};
pub use domain::scope::same_scope_nodes_of_kind;
pub use domain::snapshot::{Edge, NodePath, ScopeId, Snapshot, Subject};
pub use infrastructure::{CanonicalPrinter, EstreeLoader};
pub use ports::{NodePrinter, TreeLoader};
