//! btree-cursor - A resumable, pooled in-order cursor over B-trees.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                          btree-cursor                           │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                 Cursor Layer (cursor/)                   │   │
//! │  │   TreeIter: (node, index) + PathStack of parent frames   │   │
//! │  │      next / next_within / skip_less / item / close       │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │              ↑ path stacks borrowed / returned                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │        IterPool (free list of path stack buffers)        │   │
//! │  │              Mutex<Vec<buffer>> + PoolStats              │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓ reads                            │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │               Index Layer (index/)                       │   │
//! │  │     Node / Tree traits  ←──  BTree + BTreeNode           │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Configuration and error types
//! - [`cursor`] - The iterator, its pool and statistics
//! - [`index`] - The node interface and an in-memory B-tree
//!
//! # Quick Start
//! ```
//! use btree_cursor::index::btree::BTree;
//!
//! let mut tree = BTree::new(4).unwrap();
//! for i in 0..100 {
//!     tree.replace_or_insert(i);
//! }
//!
//! let mut iter = btree_cursor::acquire(&tree).unwrap();
//! iter.skip_less(&50);
//!
//! let mut expected = 50;
//! while iter.next(&100) {
//!     assert_eq!(*iter.item(), expected);
//!     expected += 1;
//! }
//! assert_eq!(expected, 100);
//! iter.close();
//! ```

pub mod common;
pub mod cursor;
pub mod index;

// Re-export commonly used items at crate root for convenience
pub use common::config::PoolConfig;
pub use common::{Error, Result};

pub use cursor::{acquire, Bounded, IterPool, PoolStats, PoolStatsSnapshot, TreeIter};
pub use index::btree::{BTree, BTreeNode};
pub use index::{Node, Tree};
