// Per-query index over one tree: pre-order entries with parent, edge and
// enclosing-scope links. Paths into a snapshot are transient views; they
// borrow the tree and die with the snapshot, so they can never outlive a
// mutation of the underlying nodes.

use crate::domain::error::AnalysisError;
use crate::domain::node::Node;
use crate::domain::registry::{KindRegistry, ScopeRule};
use std::fmt;
use tracing::trace;

/// The field slot (and list index, for ordered fields) a node occupies in
/// its parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub field: String,
    pub index: Option<usize>,
}

/// Identity of one lexical scope within a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(pub(crate) usize);

struct Entry<'t> {
    node: &'t Node,
    parent: Option<usize>,
    edge: Option<Edge>,
    scope: usize,
    /// Exclusive end of this entry's subtree in the pre-order vector.
    end: usize,
}

struct ScopeData {
    root: usize,
    parent: Option<usize>,
}

/// A read-only index over one tree, valid as long as the tree is not
/// mutated. Every traversal-based operation in the crate starts here.
pub struct Snapshot<'t> {
    entries: Vec<Entry<'t>>,
    scopes: Vec<ScopeData>,
}

impl<'t> Snapshot<'t> {
    /// Walk the tree once, checking every node against the registry and
    /// recording parent, edge and enclosing scope per node.
    ///
    /// Fails with `UnknownKind` or `MalformedNode` on a tree that does not
    /// fit the vocabulary; the error carries the offending kind and field.
    pub fn build(root: &'t Node, registry: &KindRegistry) -> Result<Snapshot<'t>, AnalysisError> {
        let mut snap = Snapshot {
            entries: Vec::new(),
            scopes: Vec::new(),
        };
        snap.visit(root, None, None, None, registry)?;
        trace!(
            nodes = snap.entries.len(),
            scopes = snap.scopes.len(),
            "snapshot built"
        );
        Ok(snap)
    }

    fn visit(
        &mut self,
        node: &'t Node,
        parent: Option<usize>,
        edge: Option<Edge>,
        enclosing: Option<usize>,
        registry: &KindRegistry,
    ) -> Result<usize, AnalysisError> {
        registry.validate(node)?;
        let spec = registry.spec(&node.kind)?;

        let idx = self.entries.len();
        self.entries.push(Entry {
            node,
            parent,
            edge,
            scope: 0,
            end: 0,
        });

        // A scope-introducing node itself resolves to the scope it sits in;
        // only its subtree enters the new scope. The tree root falls back to
        // the scope it introduces (or a synthesized one).
        let no_outer: &[String] = &[];
        let (own_scope, inner_scope, outer_fields) = match &spec.scope {
            ScopeRule::Introduces { outer_fields } => {
                let created = self.push_scope(idx, enclosing);
                (enclosing.unwrap_or(created), created, outer_fields.as_slice())
            }
            ScopeRule::None => {
                let own = match enclosing {
                    Some(s) => s,
                    None => self.push_scope(idx, None),
                };
                (own, own, no_outer)
            }
        };
        self.entries[idx].scope = own_scope;

        for (field, value) in &node.fields {
            let child_scope = if outer_fields.contains(field) {
                own_scope
            } else {
                inner_scope
            };
            match value {
                crate::domain::node::FieldValue::Node(child) => {
                    self.visit(
                        child,
                        Some(idx),
                        Some(Edge {
                            field: field.clone(),
                            index: None,
                        }),
                        Some(child_scope),
                        registry,
                    )?;
                }
                crate::domain::node::FieldValue::List(items) => {
                    for (i, item) in items.iter().enumerate() {
                        self.visit(
                            item,
                            Some(idx),
                            Some(Edge {
                                field: field.clone(),
                                index: Some(i),
                            }),
                            Some(child_scope),
                            registry,
                        )?;
                    }
                }
                _ => {}
            }
        }

        self.entries[idx].end = self.entries.len();
        Ok(idx)
    }

    fn push_scope(&mut self, root: usize, parent: Option<usize>) -> usize {
        self.scopes.push(ScopeData { root, parent });
        self.scopes.len() - 1
    }

    /// Path of the tree root.
    pub fn root(&self) -> NodePath<'_> {
        NodePath { snap: self, idx: 0 }
    }

    /// Number of nodes in the snapshot.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All paths, in pre-order.
    pub fn paths(&self) -> impl Iterator<Item = NodePath<'_>> {
        (0..self.entries.len()).map(move |idx| NodePath { snap: self, idx })
    }

    /// All paths whose node is of the given kind, in pre-order.
    pub fn find(&self, kind: &str) -> Vec<NodePath<'_>> {
        self.paths().filter(|p| p.node().kind == kind).collect()
    }

    /// The path whose node is `node` (pointer identity), if it is in this
    /// snapshot.
    pub fn path_of(&self, node: &Node) -> Option<NodePath<'_>> {
        self.paths().find(|p| std::ptr::eq(p.node(), node))
    }

    /// Path of the node that introduced the given scope.
    pub fn scope_root(&self, scope: ScopeId) -> NodePath<'_> {
        NodePath {
            snap: self,
            idx: self.scopes[scope.0].root,
        }
    }

    /// The scope enclosing the given one, if any.
    pub fn scope_parent(&self, scope: ScopeId) -> Option<ScopeId> {
        self.scopes[scope.0].parent.map(ScopeId)
    }

    pub fn scope_count(&self) -> usize {
        self.scopes.len()
    }

    /// Paths of the subtree rooted at `path`, in pre-order, root included.
    pub(crate) fn subtree(&self, path: NodePath<'_>) -> impl Iterator<Item = NodePath<'_>> {
        let end = self.entries[path.idx].end;
        (path.idx..end).map(move |idx| NodePath { snap: self, idx })
    }
}

/// Navigational view of one node: the node plus its position in the tree
/// (parent, edge, enclosing scope). Copyable; invalidated when the snapshot
/// is dropped.
#[derive(Clone, Copy)]
pub struct NodePath<'a> {
    snap: &'a Snapshot<'a>,
    idx: usize,
}

impl<'a> NodePath<'a> {
    pub fn node(self) -> &'a Node {
        self.snap.entries[self.idx].node
    }

    pub fn kind(self) -> &'a str {
        &self.node().kind
    }

    pub fn parent(self) -> Option<NodePath<'a>> {
        self.snap.entries[self.idx]
            .parent
            .map(|idx| NodePath { snap: self.snap, idx })
    }

    pub fn edge(self) -> Option<&'a Edge> {
        self.snap.entries[self.idx].edge.as_ref()
    }

    /// The lexical scope this node resolves to (the nearest enclosing one;
    /// for a scope-introducing node, the scope it sits in, not the one it
    /// creates).
    pub fn scope(self) -> ScopeId {
        ScopeId(self.snap.entries[self.idx].scope)
    }

    pub fn snapshot(self) -> &'a Snapshot<'a> {
        self.snap
    }
}

impl PartialEq for NodePath<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.snap, other.snap) && self.idx == other.idx
    }
}

impl Eq for NodePath<'_> {}

impl fmt::Debug for NodePath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodePath")
            .field("kind", &self.kind())
            .field("idx", &self.idx)
            .finish()
    }
}

/// Either a raw node or a path handle, resolved once via [`Subject::node`].
/// The explicit two-variant split is the boundary between "I have a tree
/// value" and "I have a position in a tree"; no runtime type probing.
#[derive(Clone, Copy, Debug)]
pub enum Subject<'a> {
    Node(&'a Node),
    Path(NodePath<'a>),
}

impl<'a> Subject<'a> {
    /// The underlying node, whichever form the subject arrived in.
    pub fn node(self) -> &'a Node {
        match self {
            Subject::Node(node) => node,
            Subject::Path(path) => path.node(),
        }
    }
}

impl<'a> From<&'a Node> for Subject<'a> {
    fn from(node: &'a Node) -> Self {
        Subject::Node(node)
    }
}

impl<'a> From<NodePath<'a>> for Subject<'a> {
    fn from(path: NodePath<'a>) -> Self {
        Subject::Path(path)
    }
}

impl<'a> From<&NodePath<'a>> for Subject<'a> {
    fn from(path: &NodePath<'a>) -> Self {
        Subject::Path(*path)
    }
}
