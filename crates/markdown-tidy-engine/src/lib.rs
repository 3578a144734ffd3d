pub mod format;
pub mod io;
pub mod parsing;
pub mod tree;
pub mod treeviz;

// Re-export the pipeline surface for easier usage
pub use format::format;
pub use parsing::parse;
pub use tree::{Document, Node, NodeKind};
