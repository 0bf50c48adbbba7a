//! Virtual file system for webshell.
//!
//! The whole tree lives in memory and is owned by a single session. Paths
//! are handled as segment vectors: [`path::resolve`] turns typed text into
//! an absolute segment sequence without touching the tree, and
//! [`FilesystemTree::lookup`] walks that sequence to a node.

mod node;
pub mod path;
mod tree;

pub use node::{Directory, NodeKind, VirtualNode};
pub use path::PathSegments;
pub use tree::FilesystemTree;
