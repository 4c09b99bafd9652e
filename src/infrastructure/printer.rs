// Canonical single-line printer for the standard vocabulary. The output is
// stable for a given tree, which is what the callee matcher needs; it makes
// no attempt to reproduce the original formatting.

use crate::domain::error::AnalysisError;
use crate::domain::node::{kinds, FieldValue, Node};
use crate::ports::NodePrinter;

pub struct CanonicalPrinter;

impl NodePrinter for CanonicalPrinter {
    fn print(&self, node: &Node) -> Result<String, AnalysisError> {
        let mut out = String::new();
        write_node(node, &mut out)?;
        Ok(out)
    }
}

fn write_node(node: &Node, out: &mut String) -> Result<(), AnalysisError> {
    match node.kind.as_str() {
        kinds::IDENTIFIER => out.push_str(required_text(node, "name")?),
        kinds::LITERAL => write_literal(node, out)?,
        kinds::THIS_EXPRESSION => out.push_str("this"),
        kinds::MEMBER_EXPRESSION => {
            write_node(required_child(node, "object")?, out)?;
            if node.flag("computed") {
                out.push('[');
                write_node(required_child(node, "property")?, out)?;
                out.push(']');
            } else {
                out.push('.');
                write_node(required_child(node, "property")?, out)?;
            }
        }
        kinds::CALL_EXPRESSION => {
            write_node(required_child(node, "callee")?, out)?;
            out.push('(');
            write_list(required_list(node, "arguments")?, ", ", out)?;
            out.push(')');
        }
        kinds::EXPRESSION_STATEMENT => {
            write_node(required_child(node, "expression")?, out)?;
            out.push(';');
        }
        kinds::ASSIGNMENT_EXPRESSION | kinds::BINARY_EXPRESSION => {
            write_node(required_child(node, "left")?, out)?;
            out.push(' ');
            out.push_str(required_text(node, "operator")?);
            out.push(' ');
            write_node(required_child(node, "right")?, out)?;
        }
        kinds::VARIABLE_DECLARATION => {
            out.push_str(required_text(node, "kind")?);
            out.push(' ');
            write_list(required_list(node, "declarations")?, ", ", out)?;
            out.push(';');
        }
        kinds::VARIABLE_DECLARATOR => {
            write_node(required_child(node, "id")?, out)?;
            if let Some(init) = node.child("init") {
                out.push_str(" = ");
                write_node(init, out)?;
            }
        }
        kinds::ARROW_FUNCTION_EXPRESSION => {
            out.push('(');
            write_list(required_list(node, "params")?, ", ", out)?;
            out.push_str(") => ");
            write_node(required_child(node, "body")?, out)?;
        }
        kinds::FUNCTION_DECLARATION => {
            out.push_str("function ");
            write_node(required_child(node, "id")?, out)?;
            write_function_tail(node, out)?;
        }
        kinds::FUNCTION_EXPRESSION => {
            out.push_str("function");
            if let Some(id) = node.child("id") {
                out.push(' ');
                write_node(id, out)?;
            }
            write_function_tail(node, out)?;
        }
        kinds::BLOCK_STATEMENT => {
            let body = required_list(node, "body")?;
            if body.is_empty() {
                out.push_str("{}");
            } else {
                out.push_str("{ ");
                write_list(body, " ", out)?;
                out.push_str(" }");
            }
        }
        kinds::RETURN_STATEMENT => {
            out.push_str("return");
            if let Some(argument) = node.child("argument") {
                out.push(' ');
                write_node(argument, out)?;
            }
            out.push(';');
        }
        kinds::PROGRAM => write_list(required_list(node, "body")?, "\n", out)?,
        kinds::OBJECT_EXPRESSION => {
            let properties = required_list(node, "properties")?;
            if properties.is_empty() {
                out.push_str("{}");
            } else {
                out.push_str("{ ");
                write_list(properties, ", ", out)?;
                out.push_str(" }");
            }
        }
        kinds::PROPERTY => {
            if node.flag("computed") {
                out.push('[');
                write_node(required_child(node, "key")?, out)?;
                out.push(']');
            } else {
                write_node(required_child(node, "key")?, out)?;
            }
            out.push_str(": ");
            write_node(required_child(node, "value")?, out)?;
        }
        kinds::ARRAY_EXPRESSION => {
            out.push('[');
            write_list(required_list(node, "elements")?, ", ", out)?;
            out.push(']');
        }
        other => return Err(AnalysisError::unknown_kind(other)),
    }
    Ok(())
}

fn write_function_tail(node: &Node, out: &mut String) -> Result<(), AnalysisError> {
    out.push('(');
    write_list(required_list(node, "params")?, ", ", out)?;
    out.push_str(") ");
    write_node(required_child(node, "body")?, out)
}

fn write_literal(node: &Node, out: &mut String) -> Result<(), AnalysisError> {
    match node.field("value") {
        Some(FieldValue::Str(s)) => {
            // JSON string escaping doubles as canonical quoting.
            out.push_str(&serde_json::Value::String(s.clone()).to_string());
        }
        Some(FieldValue::Num(n)) => {
            if n.fract() == 0.0 && n.abs() < 1e15 {
                out.push_str(&format!("{}", *n as i64));
            } else {
                out.push_str(&format!("{}", n));
            }
        }
        Some(FieldValue::Bool(b)) => out.push_str(if *b { "true" } else { "false" }),
        Some(FieldValue::Null) | None => out.push_str("null"),
        Some(_) => return Err(AnalysisError::malformed(kinds::LITERAL, "value")),
    }
    Ok(())
}

fn write_list(items: &[Node], separator: &str, out: &mut String) -> Result<(), AnalysisError> {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        write_node(item, out)?;
    }
    Ok(())
}

fn required_child<'n>(node: &'n Node, field: &str) -> Result<&'n Node, AnalysisError> {
    node.child(field)
        .ok_or_else(|| AnalysisError::malformed(&node.kind, field))
}

fn required_list<'n>(node: &'n Node, field: &str) -> Result<&'n [Node], AnalysisError> {
    node.list(field)
        .ok_or_else(|| AnalysisError::malformed(&node.kind, field))
}

fn required_text<'n>(node: &'n Node, field: &str) -> Result<&'n str, AnalysisError> {
    node.text(field)
        .ok_or_else(|| AnalysisError::malformed(&node.kind, field))
}
