// Application layer: what a transformation author calls. Wires the domain
// primitives to the printer port and carries the small helpers.

pub mod builders;
pub mod callee;
pub mod helpers;

pub use callee::{CalleeMatch, CalleeMatcher};
pub use helpers::{append_comment, not, pretty_print, summarize};
