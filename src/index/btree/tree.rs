//! The B-tree itself.

use std::ops::Bound;

use crate::common::config::MIN_DEGREE;
use crate::common::{Error, Result};
use crate::cursor::{self, TreeIter};
use crate::index::btree::BTreeNode;
use crate::index::Tree;

/// An ordered set backed by a B-tree.
///
/// A tree of degree `d` holds at most `2d - 1` items per node.
///
/// # Example
/// ```
/// use btree_cursor::index::btree::BTree;
///
/// let mut tree = BTree::new(4).unwrap();
/// for i in 0..100 {
///     tree.replace_or_insert(i);
/// }
///
/// let mut iter = tree.iter().unwrap();
/// iter.skip_less(&50);
/// assert!(iter.next(&100));
/// assert_eq!(*iter.item(), 50);
/// ```
#[derive(Debug, Clone)]
pub struct BTree<T> {
    root: Option<BTreeNode<T>>,
    degree: usize,
    len: usize,
}

impl<T: Ord> BTree<T> {
    /// Create an empty tree of the given degree.
    ///
    /// # Errors
    /// - `Error::InvalidDegree` if `degree` is below [`MIN_DEGREE`]
    pub fn new(degree: usize) -> Result<Self> {
        if degree < MIN_DEGREE {
            return Err(Error::InvalidDegree(degree));
        }

        Ok(Self {
            root: None,
            degree,
            len: 0,
        })
    }

    /// The degree this tree was created with.
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Number of items in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if the tree holds no items.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    fn max_items(&self) -> usize {
        self.degree * 2 - 1
    }

    /// Insert `item`, returning the equal item it replaced, if any.
    pub fn replace_or_insert(&mut self, item: T) -> Option<T> {
        let max_items = self.max_items();

        let root = match self.root.take() {
            None => {
                self.root = Some(BTreeNode::leaf(item, max_items));
                self.len = 1;
                return None;
            }
            Some(mut root) if root.len() >= max_items => {
                let (separator, right) = root.split(max_items / 2);
                BTreeNode::internal(root, separator, right, max_items)
            }
            Some(root) => root,
        };

        let root = self.root.insert(root);
        let replaced = root.insert(item, max_items);
        if replaced.is_none() {
            self.len += 1;
        }
        replaced
    }

    /// Look up the item equal to `key`.
    pub fn get(&self, key: &T) -> Option<&T> {
        self.root.as_ref().and_then(|root| root.get(key))
    }

    /// Call `f` on every item within `(from, to)` in ascending order.
    ///
    /// Stops early when `f` returns false.
    pub fn ascend_range<F>(&self, from: Bound<&T>, to: Bound<&T>, mut f: F)
    where
        F: FnMut(&T) -> bool,
    {
        if let Some(root) = &self.root {
            root.ascend(from, to, &mut f);
        }
    }

    /// Acquire a cursor from the process-wide pool.
    ///
    /// Returns `None` if the tree is empty.
    pub fn iter(&self) -> Option<TreeIter<'_, BTreeNode<T>>> {
        cursor::acquire(self)
    }
}

impl<T: Ord> Tree for BTree<T> {
    type Node = BTreeNode<T>;

    fn root(&self) -> Option<&BTreeNode<T>> {
        self.root.as_ref()
    }
}
