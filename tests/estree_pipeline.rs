// Full pipeline over serialized trees: ESTree JSON in, analysis out.

use std::io::Write;
use tree_surgeon::infrastructure::estree;
use tree_surgeon::{
    conflicting_names, not, KindRegistry, Snapshot, TreeLoader,
};

// () => { let x; f(x); } as an ESTree-style document.
const ARROW_DOC: &str = r#"{
    "type": "Program",
    "body": [{
        "type": "ExpressionStatement",
        "expression": {
            "type": "ArrowFunctionExpression",
            "params": [],
            "body": {
                "type": "BlockStatement",
                "body": [
                    {
                        "type": "VariableDeclaration",
                        "kind": "let",
                        "declarations": [{
                            "type": "VariableDeclarator",
                            "id": {"type": "Identifier", "name": "x", "start": 11, "end": 12},
                            "init": null
                        }]
                    },
                    {
                        "type": "ExpressionStatement",
                        "expression": {
                            "type": "CallExpression",
                            "callee": {"type": "Identifier", "name": "f"},
                            "arguments": [{"type": "Identifier", "name": "x"}]
                        }
                    }
                ]
            }
        }
    }]
}"#;

#[test]
fn loaded_documents_feed_the_analyzers_directly() {
    let tree = tree_surgeon::EstreeLoader.load(ARROW_DOC).unwrap();
    let registry = KindRegistry::new(estree::vocabulary());
    let snap = Snapshot::build(&tree, &registry).unwrap();

    let x_decl = snap.find("Identifier")[0];
    assert_eq!(x_decl.node().text("name"), Some("x"));

    let names = conflicting_names(x_decl).unwrap();
    let listed: Vec<_> = names.iter().map(|s| s.as_str()).collect();
    assert_eq!(listed, vec!["f", "x"]);
}

#[test]
fn positions_survive_loading_but_not_analysis() {
    let tree = tree_surgeon::EstreeLoader.load(ARROW_DOC).unwrap();
    let registry = KindRegistry::new(estree::vocabulary());
    let snap = Snapshot::build(&tree, &registry).unwrap();

    let x_decl = snap.find("Identifier")[0];
    let span = x_decl.node().meta.span.unwrap();
    assert_eq!((span.start, span.end), (11, 12));

    // Same name, no position: still structurally equivalent.
    let bare = tree_surgeon::builders::identifier("x");
    assert!(tree_surgeon::equivalent(x_decl, &bare));
}

#[test]
fn registry_predicates_compose_with_queries() {
    let tree = tree_surgeon::EstreeLoader.load(ARROW_DOC).unwrap();
    let registry = KindRegistry::new(estree::vocabulary());
    let snap = Snapshot::build(&tree, &registry).unwrap();

    let is_declarator_id = |p: &tree_surgeon::NodePath<'_>| {
        p.edge().map(|e| e.field == "id").unwrap_or(false)
    };
    let references: Vec<_> = snap
        .find("Identifier")
        .into_iter()
        .filter(|p| not(is_declarator_id)(p))
        .filter_map(|p| p.node().text("name").map(str::to_string))
        .collect();
    assert_eq!(references, vec!["x", "f"]);
}

#[test]
fn documents_round_trip_through_json() {
    let loader = tree_surgeon::EstreeLoader;
    let tree = loader.load(ARROW_DOC).unwrap();
    let rendered = estree::to_json(&tree).to_string();
    let reloaded = loader.load(&rendered).unwrap();
    assert_eq!(tree, reloaded);
}

#[test]
fn trees_load_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("arrow.json");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(ARROW_DOC.as_bytes()).unwrap();

    let tree = tree_surgeon::EstreeLoader.load_file(&path).unwrap();
    assert_eq!(tree.kind, "Program");

    let missing = tree_surgeon::EstreeLoader.load_file(&dir.path().join("absent.json"));
    assert!(missing.is_err());
}
