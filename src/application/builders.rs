// Construction helpers for the standard vocabulary. Transformation authors
// use these to build reference nodes for equivalence checks and to assemble
// replacement subtrees.

use crate::domain::node::{kinds, FieldValue, Node};

pub fn identifier(name: &str) -> Node {
    Node::new(kinds::IDENTIFIER).with_field("name", name.into())
}

pub fn number(value: f64) -> Node {
    Node::new(kinds::LITERAL).with_field("value", value.into())
}

pub fn string(value: &str) -> Node {
    Node::new(kinds::LITERAL).with_field("value", value.into())
}

pub fn boolean(value: bool) -> Node {
    Node::new(kinds::LITERAL).with_field("value", value.into())
}

pub fn null() -> Node {
    Node::new(kinds::LITERAL).with_field("value", FieldValue::Null)
}

pub fn this_expression() -> Node {
    Node::new(kinds::THIS_EXPRESSION)
}

pub fn member(object: Node, property: Node) -> Node {
    Node::new(kinds::MEMBER_EXPRESSION)
        .with_field("object", object.into())
        .with_field("property", property.into())
        .with_field("computed", false.into())
}

pub fn computed_member(object: Node, property: Node) -> Node {
    Node::new(kinds::MEMBER_EXPRESSION)
        .with_field("object", object.into())
        .with_field("property", property.into())
        .with_field("computed", true.into())
}

pub fn call(callee: Node, arguments: Vec<Node>) -> Node {
    Node::new(kinds::CALL_EXPRESSION)
        .with_field("callee", callee.into())
        .with_field("arguments", arguments.into())
}

pub fn expression_statement(expression: Node) -> Node {
    Node::new(kinds::EXPRESSION_STATEMENT).with_field("expression", expression.into())
}

pub fn assignment(operator: &str, left: Node, right: Node) -> Node {
    Node::new(kinds::ASSIGNMENT_EXPRESSION)
        .with_field("operator", operator.into())
        .with_field("left", left.into())
        .with_field("right", right.into())
}

pub fn binary(operator: &str, left: Node, right: Node) -> Node {
    Node::new(kinds::BINARY_EXPRESSION)
        .with_field("operator", operator.into())
        .with_field("left", left.into())
        .with_field("right", right.into())
}

pub fn variable_declaration(kind: &str, declarations: Vec<Node>) -> Node {
    Node::new(kinds::VARIABLE_DECLARATION)
        .with_field("kind", kind.into())
        .with_field("declarations", declarations.into())
}

pub fn declarator(id: Node, init: Option<Node>) -> Node {
    let init = init.map_or(FieldValue::Null, Into::into);
    Node::new(kinds::VARIABLE_DECLARATOR)
        .with_field("id", id.into())
        .with_field("init", init)
}

pub fn block(body: Vec<Node>) -> Node {
    Node::new(kinds::BLOCK_STATEMENT).with_field("body", body.into())
}

pub fn return_statement(argument: Option<Node>) -> Node {
    let mut node = Node::new(kinds::RETURN_STATEMENT);
    if let Some(argument) = argument {
        node.set_field("argument", argument.into());
    }
    node
}

pub fn arrow_function(params: Vec<Node>, body: Node) -> Node {
    Node::new(kinds::ARROW_FUNCTION_EXPRESSION)
        .with_field("params", params.into())
        .with_field("body", body.into())
}

pub fn function_declaration(name: &str, params: Vec<Node>, body: Node) -> Node {
    Node::new(kinds::FUNCTION_DECLARATION)
        .with_field("id", identifier(name).into())
        .with_field("params", params.into())
        .with_field("body", body.into())
}

pub fn function_expression(name: Option<&str>, params: Vec<Node>, body: Node) -> Node {
    let mut node = Node::new(kinds::FUNCTION_EXPRESSION)
        .with_field("params", params.into())
        .with_field("body", body.into());
    if let Some(name) = name {
        node.set_field("id", identifier(name).into());
    }
    node
}

pub fn object_expression(properties: Vec<Node>) -> Node {
    Node::new(kinds::OBJECT_EXPRESSION).with_field("properties", properties.into())
}

pub fn property(key: Node, value: Node) -> Node {
    Node::new(kinds::PROPERTY)
        .with_field("key", key.into())
        .with_field("value", value.into())
}

pub fn array_expression(elements: Vec<Node>) -> Node {
    Node::new(kinds::ARRAY_EXPRESSION).with_field("elements", elements.into())
}

pub fn program(body: Vec<Node>) -> Node {
    Node::new(kinds::PROGRAM).with_field("body", body.into())
}

/// Build a left-associated member access chain from identifier names, e.g.
/// `["a", "b", "c"]` becomes the tree for `a.b.c`.
///
/// # Panics
///
/// Panics on an empty slice; a chain needs at least one segment.
pub fn member_chain(names: &[&str]) -> Node {
    let Some((first, rest)) = names.split_first() else {
        panic!("member chain needs at least one segment");
    };
    let mut chain = identifier(first);
    for name in rest {
        chain = member(chain, identifier(name));
    }
    chain
}
