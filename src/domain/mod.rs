// Core analysis domain: node model, kind registry, snapshots, and the
// scope/equivalence/collision primitives. Pure and synchronous; no I/O.

pub mod collision;
pub mod equiv;
pub mod error;
pub mod node;
pub mod registry;
pub mod scope;
pub mod snapshot;
