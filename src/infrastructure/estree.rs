// ESTree adapter: the standard kind vocabulary plus a loader that turns an
// ESTree-style JSON document into domain nodes (and back).

use crate::domain::node::{kinds, Comment, FieldValue, Node, Span};
use crate::domain::registry::KindSpec;
use crate::ports::TreeLoader;
use anyhow::{bail, Context, Result};
use serde_json::{Map, Value};
use std::path::Path;

/// The standard ESTree-subset vocabulary: one descriptor per kind, with the
/// scope-introducing kinds marked. A function declaration's name binds in
/// the scope the function is declared in, so `id` stays outside.
pub fn vocabulary() -> Vec<KindSpec> {
    vec![
        KindSpec::new(kinds::PROGRAM, &["body"], &[]).scoped(&[]),
        KindSpec::new(kinds::IDENTIFIER, &["name"], &[]),
        KindSpec::new(kinds::LITERAL, &["value"], &["raw"]),
        KindSpec::new(kinds::MEMBER_EXPRESSION, &["object", "property"], &["computed"]),
        KindSpec::new(kinds::CALL_EXPRESSION, &["callee", "arguments"], &["optional"]),
        KindSpec::new(kinds::EXPRESSION_STATEMENT, &["expression"], &[]),
        KindSpec::new(kinds::VARIABLE_DECLARATION, &["declarations", "kind"], &[]),
        KindSpec::new(kinds::VARIABLE_DECLARATOR, &["id"], &["init"]),
        KindSpec::new(kinds::FUNCTION_DECLARATION, &["id", "params", "body"], &["async", "generator"])
            .scoped(&["id"]),
        KindSpec::new(kinds::FUNCTION_EXPRESSION, &["params", "body"], &["id", "async", "generator"])
            .scoped(&[]),
        KindSpec::new(kinds::ARROW_FUNCTION_EXPRESSION, &["params", "body"], &["async", "expression"])
            .scoped(&[]),
        KindSpec::new(kinds::BLOCK_STATEMENT, &["body"], &[]),
        KindSpec::new(kinds::RETURN_STATEMENT, &[], &["argument"]),
        KindSpec::new(kinds::ASSIGNMENT_EXPRESSION, &["operator", "left", "right"], &[]),
        KindSpec::new(kinds::BINARY_EXPRESSION, &["operator", "left", "right"], &[]),
        KindSpec::new(kinds::OBJECT_EXPRESSION, &["properties"], &[]),
        KindSpec::new(kinds::PROPERTY, &["key", "value"], &["computed", "kind", "shorthand"]),
        KindSpec::new(kinds::ARRAY_EXPRESSION, &["elements"], &[]),
        KindSpec::new(kinds::THIS_EXPRESSION, &[], &[]),
    ]
}

/// Loads trees serialized as ESTree-style JSON: `type` is the kind tag,
/// `start`/`end`/`loc`/`range` are positions, `comments` are comments, and
/// every other key is a semantic field.
pub struct EstreeLoader;

impl TreeLoader for EstreeLoader {
    fn load(&self, source: &str) -> Result<Node> {
        let value: Value =
            serde_json::from_str(source).context("tree document is not valid JSON")?;
        node_from_value(&value)
    }
}

impl EstreeLoader {
    pub fn load_file(&self, path: &Path) -> Result<Node> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read tree document {}", path.display()))?;
        self.load(&source)
    }
}

fn node_from_value(value: &Value) -> Result<Node> {
    let Some(object) = value.as_object() else {
        bail!("expected a node object, got {}", json_kind(value));
    };
    let Some(kind) = object.get("type").and_then(Value::as_str) else {
        bail!("node object has no string `type` tag");
    };

    let mut node = Node::new(kind);
    for (key, val) in object {
        match key.as_str() {
            "type" => {}
            "start" | "end" => {
                let offset = val
                    .as_u64()
                    .with_context(|| format!("`{}` of a {} node is not an offset", key, kind))?
                    as usize;
                let span = node.meta.span.get_or_insert(Span { start: 0, end: 0 });
                if key == "start" {
                    span.start = offset;
                } else {
                    span.end = offset;
                }
            }
            "loc" | "range" | "leadingComments" | "trailingComments" => {
                node.meta.extra.insert(key.clone(), val.clone());
            }
            "comments" => {
                node.meta.comments = comments_from_value(val)
                    .with_context(|| format!("bad comments on a {} node", kind))?;
            }
            _ => {
                let field = field_from_value(val)
                    .with_context(|| format!("bad field `{}` on a {} node", key, kind))?;
                node.set_field(key.clone(), field);
            }
        }
    }
    Ok(node)
}

fn field_from_value(value: &Value) -> Result<FieldValue> {
    Ok(match value {
        Value::Null => FieldValue::Null,
        Value::Bool(b) => FieldValue::Bool(*b),
        Value::Number(n) => FieldValue::Num(
            n.as_f64()
                .context("numeric field does not fit a 64-bit float")?,
        ),
        Value::String(s) => FieldValue::Str(s.clone()),
        Value::Object(_) => FieldValue::Node(Box::new(node_from_value(value)?)),
        Value::Array(items) => {
            let nodes = items
                .iter()
                .map(node_from_value)
                .collect::<Result<Vec<_>>>()
                .context("list fields must hold node objects")?;
            FieldValue::List(nodes)
        }
    })
}

fn comments_from_value(value: &Value) -> Result<Vec<Comment>> {
    let Some(items) = value.as_array() else {
        bail!("`comments` is not an array");
    };
    items
        .iter()
        .map(|item| {
            let text = item
                .get("value")
                .and_then(Value::as_str)
                .context("comment has no string `value`")?;
            let block = item.get("type").and_then(Value::as_str) == Some("Block");
            Ok(Comment {
                text: text.to_string(),
                block,
            })
        })
        .collect()
}

/// Serialize a node back to the ESTree-style JSON shape `load` accepts.
pub fn to_json(node: &Node) -> Value {
    let mut object = Map::new();
    object.insert("type".to_string(), Value::String(node.kind.clone()));
    if let Some(span) = node.meta.span {
        object.insert("start".to_string(), Value::from(span.start));
        object.insert("end".to_string(), Value::from(span.end));
    }
    for (key, val) in &node.meta.extra {
        object.insert(key.clone(), val.clone());
    }
    if !node.meta.comments.is_empty() {
        let comments = node
            .meta
            .comments
            .iter()
            .map(|c| {
                let mut comment = Map::new();
                let kind = if c.block { "Block" } else { "Line" };
                comment.insert("type".to_string(), Value::String(kind.to_string()));
                comment.insert("value".to_string(), Value::String(c.text.clone()));
                Value::Object(comment)
            })
            .collect();
        object.insert("comments".to_string(), Value::Array(comments));
    }
    for (key, val) in &node.fields {
        object.insert(key.clone(), field_to_json(val));
    }
    Value::Object(object)
}

fn field_to_json(value: &FieldValue) -> Value {
    match value {
        FieldValue::Null => Value::Null,
        FieldValue::Bool(b) => Value::Bool(*b),
        FieldValue::Num(n) => serde_json::Number::from_f64(*n).map_or(Value::Null, Value::Number),
        FieldValue::Str(s) => Value::String(s.clone()),
        FieldValue::Node(n) => to_json(n),
        FieldValue::List(items) => Value::Array(items.iter().map(to_json).collect()),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_maps_type_and_positions() {
        let loader = EstreeLoader;
        let node = loader
            .load(r#"{"type": "Identifier", "name": "x", "start": 4, "end": 5}"#)
            .unwrap();

        assert_eq!(node.kind, "Identifier");
        assert_eq!(node.text("name"), Some("x"));
        assert_eq!(node.meta.span, Some(Span { start: 4, end: 5 }));
    }

    #[test]
    fn test_load_nested_nodes_and_lists() {
        let loader = EstreeLoader;
        let node = loader
            .load(
                r#"{
                    "type": "CallExpression",
                    "callee": {"type": "Identifier", "name": "f"},
                    "arguments": [{"type": "Literal", "value": null}]
                }"#,
            )
            .unwrap();

        assert_eq!(node.child("callee").unwrap().text("name"), Some("f"));
        let args = node.list("arguments").unwrap();
        assert_eq!(args.len(), 1);
        assert_eq!(args[0].field("value"), Some(&FieldValue::Null));
    }

    #[test]
    fn test_load_rejects_untagged_objects() {
        let loader = EstreeLoader;
        assert!(loader.load(r#"{"name": "x"}"#).is_err());
        assert!(loader.load("[1, 2]").is_err());
    }

    #[test]
    fn test_comments_become_meta() {
        let loader = EstreeLoader;
        let node = loader
            .load(
                r#"{
                    "type": "Identifier",
                    "name": "x",
                    "comments": [{"type": "Line", "value": " renamed"}]
                }"#,
            )
            .unwrap();

        assert_eq!(node.meta.comments.len(), 1);
        assert_eq!(node.meta.comments[0].text, " renamed");
        assert!(!node.meta.comments[0].block);
        // Comments are metadata, not fields.
        assert!(node.field("comments").is_none());
    }

    #[test]
    fn test_json_round_trip() {
        let loader = EstreeLoader;
        let source = r#"{
            "type": "MemberExpression",
            "object": {"type": "Identifier", "name": "assert", "start": 0, "end": 6},
            "property": {"type": "Identifier", "name": "equal"},
            "computed": false
        }"#;
        let node = loader.load(source).unwrap();
        let back = node_from_value(&to_json(&node)).unwrap();
        assert_eq!(node, back);
    }
}
