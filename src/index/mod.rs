//! Index structures the cursor walks.
//!
//! - [`Node`] / [`Tree`] - The read-only view a cursor needs of a tree
//! - [`btree`] - An in-memory B-tree implementing that view

pub mod btree;
mod node;

pub use node::{Node, Tree};
