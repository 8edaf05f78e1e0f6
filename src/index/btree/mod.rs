//! In-memory B-tree.
//!
//! Supports insertion, lookup and ordered range walks. Nodes are split
//! pre-emptively on the way down, so an insert never has to walk back up.
//! Deletion is not supported.
//!
//! # Components
//! - [`BTree`] - The tree, owning its root
//! - [`BTreeNode`] - A node holding sorted items and child links

mod node;
mod tree;

pub use node::BTreeNode;
pub use tree::BTree;
