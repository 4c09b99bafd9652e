// Node model for Tree Surgeon.
// Tagged, open-vocabulary syntax tree values in the ESTree style.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Kind names of the standard vocabulary. The registry itself accepts any
/// vocabulary; these constants exist so the analyzers, the printer and the
/// builders agree on spelling.
pub mod kinds {
    pub const PROGRAM: &str = "Program";
    pub const IDENTIFIER: &str = "Identifier";
    pub const LITERAL: &str = "Literal";
    pub const MEMBER_EXPRESSION: &str = "MemberExpression";
    pub const CALL_EXPRESSION: &str = "CallExpression";
    pub const EXPRESSION_STATEMENT: &str = "ExpressionStatement";
    pub const VARIABLE_DECLARATION: &str = "VariableDeclaration";
    pub const VARIABLE_DECLARATOR: &str = "VariableDeclarator";
    pub const FUNCTION_DECLARATION: &str = "FunctionDeclaration";
    pub const FUNCTION_EXPRESSION: &str = "FunctionExpression";
    pub const ARROW_FUNCTION_EXPRESSION: &str = "ArrowFunctionExpression";
    pub const BLOCK_STATEMENT: &str = "BlockStatement";
    pub const RETURN_STATEMENT: &str = "ReturnStatement";
    pub const ASSIGNMENT_EXPRESSION: &str = "AssignmentExpression";
    pub const BINARY_EXPRESSION: &str = "BinaryExpression";
    pub const OBJECT_EXPRESSION: &str = "ObjectExpression";
    pub const PROPERTY: &str = "Property";
    pub const ARRAY_EXPRESSION: &str = "ArrayExpression";
    pub const THIS_EXPRESSION: &str = "ThisExpression";
}

/// A single tagged node in a syntax tree.
///
/// The kind tag determines which fields the node carries; the vocabulary of
/// kinds lives in a [`KindRegistry`](crate::domain::registry::KindRegistry),
/// not in the type system, so trees stay open to new kinds. `meta` carries
/// non-semantic data (source span, comments) and never participates in
/// structural comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub kind: String,
    pub fields: BTreeMap<String, FieldValue>,
    #[serde(default, skip_serializing_if = "Meta::is_empty")]
    pub meta: Meta,
}

/// A field slot on a node: a child node, an ordered child list, or a scalar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Num(f64),
    Str(String),
    Node(Box<Node>),
    List(Vec<Node>),
}

/// Non-semantic node metadata: source position and attached comments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<Comment>,
    /// Positional payloads we carry through but do not interpret
    /// (ESTree `loc`, `range`, ...).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Meta {
    pub fn is_empty(&self) -> bool {
        self.span.is_none() && self.comments.is_empty() && self.extra.is_empty()
    }
}

/// Byte offsets of a node in its original source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// A comment attached to a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub text: String,
    /// `/* ... */` when true, `// ...` when false.
    pub block: bool,
}

impl Node {
    /// Create a node with no fields yet.
    pub fn new(kind: impl Into<String>) -> Self {
        Node {
            kind: kind.into(),
            fields: BTreeMap::new(),
            meta: Meta::default(),
        }
    }

    /// Set a field, consuming and returning the node (builder form).
    pub fn with_field(mut self, name: impl Into<String>, value: FieldValue) -> Self {
        self.fields.insert(name.into(), value);
        self
    }

    pub fn set_field(&mut self, name: impl Into<String>, value: FieldValue) {
        self.fields.insert(name.into(), value);
    }

    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// The field as a child node, if it is one.
    pub fn child(&self, name: &str) -> Option<&Node> {
        match self.fields.get(name) {
            Some(FieldValue::Node(n)) => Some(n),
            _ => None,
        }
    }

    /// The field as an ordered child list, if it is one.
    pub fn list(&self, name: &str) -> Option<&[Node]> {
        match self.fields.get(name) {
            Some(FieldValue::List(items)) => Some(items),
            _ => None,
        }
    }

    /// The field as string text, if it is one.
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.fields.get(name) {
            Some(FieldValue::Str(s)) => Some(s),
            _ => None,
        }
    }

    /// True when the field holds boolean `true`. Absent counts as false,
    /// matching ESTree defaults for flags like `computed`.
    pub fn flag(&self, name: &str) -> bool {
        matches!(self.fields.get(name), Some(FieldValue::Bool(true)))
    }
}

impl From<Node> for FieldValue {
    fn from(node: Node) -> Self {
        FieldValue::Node(Box::new(node))
    }
}

impl From<Vec<Node>> for FieldValue {
    fn from(items: Vec<Node>) -> Self {
        FieldValue::List(items)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Str(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Str(s)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Num(n)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}
