// Infrastructure adapters for Tree Surgeon: the ESTree JSON loader and the
// canonical printer behind the ports.

pub mod estree;
pub mod printer;

pub use estree::EstreeLoader;
pub use printer::CanonicalPrinter;
