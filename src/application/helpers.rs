// Small conveniences around the core: predicate negation, comment
// attachment, and printing shortcuts.

use crate::domain::error::AnalysisError;
use crate::domain::node::{Comment, Node};
use crate::domain::snapshot::Subject;
use crate::ports::NodePrinter;
use tracing::info;

/// Negate a predicate, keeping it composable with filter chains:
/// `paths.retain(not(|p| is_ident.check(p)))`.
pub fn not<T: ?Sized>(pred: impl Fn(&T) -> bool) -> impl Fn(&T) -> bool {
    move |value| !pred(value)
}

/// Attach a line comment to a node's metadata, creating the comment list on
/// first use. Comments are non-semantic: equivalence ignores them.
pub fn append_comment(node: &mut Node, text: &str) {
    node.meta.comments.push(Comment {
        text: text.to_string(),
        block: false,
    });
}

/// Canonical one-line rendering of a subject, for messages and logs.
pub fn summarize<'a>(
    subject: impl Into<Subject<'a>>,
    printer: &dyn NodePrinter,
) -> Result<String, AnalysisError> {
    printer.print(subject.into().node())
}

/// Log a subject's canonical rendering at info level.
pub fn pretty_print<'a>(
    subject: impl Into<Subject<'a>>,
    printer: &dyn NodePrinter,
) -> Result<(), AnalysisError> {
    let summary = summarize(subject, printer)?;
    info!(%summary, "node");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::builders::*;
    use crate::infrastructure::CanonicalPrinter;

    #[test]
    fn test_not_inverts_a_predicate() {
        let is_even = |n: &i32| n % 2 == 0;
        let is_odd = not(is_even);
        assert!(is_odd(&3));
        assert!(!is_odd(&4));
    }

    #[test]
    fn test_append_comment_creates_then_extends() {
        let mut node = identifier("x");
        assert!(node.meta.comments.is_empty());

        append_comment(&mut node, " first");
        append_comment(&mut node, " second");
        assert_eq!(node.meta.comments.len(), 2);
        assert_eq!(node.meta.comments[0].text, " first");
        assert!(!node.meta.comments[1].block);
    }

    #[test]
    fn test_comments_do_not_change_equivalence() {
        let plain = identifier("x");
        let mut commented = identifier("x");
        append_comment(&mut commented, " note");
        assert!(crate::domain::equiv::equivalent(&plain, &commented));
    }

    #[test]
    fn test_summarize_prints_canonically() {
        let node = call(member_chain(&["a", "b", "c"]), vec![]);
        assert_eq!(
            summarize(&node, &CanonicalPrinter).unwrap(),
            "a.b.c()"
        );
    }
}
