// Scope membership: which nodes of a kind live in exactly the same lexical
// scope as a given path.

use crate::domain::snapshot::NodePath;

/// All nodes of `kind` that resolve to the same scope as `path`.
///
/// The walk covers every descendant of the scope's root, so it sees nodes
/// that are textually inside nested functions too; the scope filter then
/// drops everything that belongs to a nested (or outer) scope. Result order
/// is the snapshot's pre-order; deterministic for a given tree.
pub fn same_scope_nodes_of_kind<'a>(path: NodePath<'a>, kind: &str) -> Vec<NodePath<'a>> {
    let scope = path.scope();
    let snap = path.snapshot();
    let root = snap.scope_root(scope);
    snap.subtree(root)
        .filter(|p| p.node().kind == kind && p.scope() == scope)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::builders::*;
    use crate::domain::node::kinds;
    use crate::domain::registry::KindRegistry;
    use crate::domain::snapshot::Snapshot;
    use crate::infrastructure::estree;

    // () => { let x; function g() { let y; } f(x); }
    fn sample_program() -> crate::domain::node::Node {
        program(vec![expression_statement(arrow_function(
            vec![],
            block(vec![
                variable_declaration("let", vec![declarator(identifier("x"), None)]),
                function_declaration(
                    "g",
                    vec![],
                    block(vec![variable_declaration(
                        "let",
                        vec![declarator(identifier("y"), None)],
                    )]),
                ),
                expression_statement(call(identifier("f"), vec![identifier("x")])),
            ]),
        ))])
    }

    fn names<'a>(paths: &[NodePath<'a>]) -> Vec<&'a str> {
        paths.iter().filter_map(|p| p.node().text("name")).collect()
    }

    #[test]
    fn test_nested_scope_members_are_excluded() {
        let registry = KindRegistry::new(estree::vocabulary());
        let tree = sample_program();
        let snap = Snapshot::build(&tree, &registry).unwrap();

        // Start from the `x` reference inside `f(x)`.
        let x_ref = *snap
            .find(kinds::IDENTIFIER)
            .iter()
            .filter(|p| p.node().text("name") == Some("x"))
            .nth(1)
            .unwrap();

        let in_scope = same_scope_nodes_of_kind(x_ref, kinds::IDENTIFIER);
        let found = names(&in_scope);
        assert!(found.contains(&"x"));
        assert!(found.contains(&"f"));
        assert!(found.contains(&"g"));
        assert!(!found.contains(&"y"));
    }

    #[test]
    fn test_result_follows_preorder_and_is_deterministic() {
        let registry = KindRegistry::new(estree::vocabulary());
        let tree = sample_program();
        let snap = Snapshot::build(&tree, &registry).unwrap();

        let x_decl = snap.find(kinds::IDENTIFIER)[0];
        let first = names(&same_scope_nodes_of_kind(x_decl, kinds::IDENTIFIER));
        let second = names(&same_scope_nodes_of_kind(x_decl, kinds::IDENTIFIER));
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }

    #[test]
    fn test_parameters_resolve_to_their_function_scope() {
        let registry = KindRegistry::new(estree::vocabulary());
        // (a) => { use(a); }
        let tree = program(vec![expression_statement(arrow_function(
            vec![identifier("a")],
            block(vec![expression_statement(call(
                identifier("use"),
                vec![identifier("a")],
            ))]),
        ))]);
        let snap = Snapshot::build(&tree, &registry).unwrap();

        // Params are traversed after the body (field order), so the
        // parameter occurrence of `a` is the last identifier.
        let param = *snap.find(kinds::IDENTIFIER).last().unwrap();
        assert_eq!(param.edge().unwrap().field, "params");
        let in_scope = names(&same_scope_nodes_of_kind(param, kinds::IDENTIFIER));
        assert!(in_scope.contains(&"a"));
        assert!(in_scope.contains(&"use"));
    }
}
