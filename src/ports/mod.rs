// Ports to the external collaborators the toolkit leans on: something that
// produces trees and something that turns nodes back into text.

use crate::domain::error::AnalysisError;
use crate::domain::node::Node;

/// Deserializes a tree from some serialized form (the crate does not parse
/// source text itself).
pub trait TreeLoader {
    fn load(&self, source: &str) -> anyhow::Result<Node>;
}

/// Renders a node to canonical single-line text. Canonical means stable for
/// a given tree, not faithful to the original formatting.
pub trait NodePrinter {
    fn print(&self, node: &Node) -> Result<String, AnalysisError>;
}
