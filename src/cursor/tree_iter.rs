//! Resumable in-order iterator over a B-tree.
//!
//! [`TreeIter`] replays a recursive in-order walk (left subtree, item, next
//! subtree, ...) with an explicit path stack, so the walk can stop after
//! any item and pick up again on the next call.
//!
//! # Position encoding
//! The iterator sits at `(node, index)`. For an internal node, `index` names
//! the child still to be visited; for a leaf it names the next item to emit.
//! Each frame on the path stack is a parent's `(node, index)` saved when
//! descending into `child(index)`. Popping that frame means the child has
//! been fully visited, so `items()[index]` (if any) is next in order.

use std::fmt;
use std::ops::Bound;

use tracing::trace;

use crate::cursor::frame::PathStack;
use crate::cursor::{Bounded, IterPool};
use crate::index::Node;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Acquired, nothing consumed yet.
    Fresh,
    /// Positioned by `skip_less`.
    Sought,
    /// The last `next` returned true.
    Yielded,
    /// The last `next` returned false.
    Stopped,
}

/// An in-order cursor over the items of a tree, bounded per call.
///
/// Acquired from an [`IterPool`], and returned to it when dropped or closed.
///
/// # Contract
/// - [`skip_less`](Self::skip_less) only before the first `next`
/// - [`item`](Self::item) only after a `next` that returned true
///
/// Breaking either panics.
///
/// The tree must not change while the iterator is alive. A `TreeIter` is
/// not meant to be shared between threads while walking.
///
/// # Example
/// ```
/// use btree_cursor::cursor;
/// use btree_cursor::index::btree::BTree;
///
/// let mut tree = BTree::new(2).unwrap();
/// for i in 0..10 {
///     tree.replace_or_insert(i);
/// }
///
/// let mut iter = cursor::acquire(&tree).unwrap();
/// iter.skip_less(&3);
///
/// let mut seen = vec![];
/// while iter.next(&6) {
///     seen.push(*iter.item());
/// }
/// assert_eq!(seen, vec![3, 4, 5]);
///
/// // The bound only stops this call; a wider one continues from 6.
/// assert!(iter.next(&10));
/// assert_eq!(*iter.item(), 6);
/// ```
pub struct TreeIter<'a, N: Node> {
    /// Pool receiving the path stack on drop.
    pool: &'a IterPool,

    /// Frames from the root down to the parent of `node`.
    path: PathStack<'a, N>,

    /// Node being visited, `None` once the walk is exhausted.
    node: Option<&'a N>,

    /// Resume index within `node`.
    index: usize,

    /// Last item returned by a successful `next`.
    last: Option<&'a N::Item>,

    /// Item scanned past by a `next` whose bound rejected it.
    pending: Option<&'a N::Item>,

    phase: Phase,
}

impl<'a, N: Node> TreeIter<'a, N> {
    /// Called by `IterPool::acquire()`.
    pub(crate) fn new(pool: &'a IterPool, root: &'a N, path: PathStack<'a, N>) -> Self {
        Self {
            pool,
            path,
            node: Some(root),
            index: 0,
            last: None,
            pending: None,
            phase: Phase::Fresh,
        }
    }

    /// Advance to the next item if it is strictly less than `upper`.
    ///
    /// Returns false when the walk is exhausted or the next item is not
    /// below `upper`. In the latter case that item is held back and offered
    /// again to the next call, so a later, wider bound resumes exactly where
    /// this one stopped.
    pub fn next(&mut self, upper: &N::Item) -> bool {
        self.next_within(Bound::Excluded(upper))
    }

    /// Advance to the next item, with no upper limit.
    pub fn next_unbounded(&mut self) -> bool {
        self.next_within(Bound::Unbounded)
    }

    /// Advance to the next item if it lies within `upper`.
    ///
    /// `Excluded(b)` behaves like [`next`](Self::next), `Included(b)` also
    /// accepts an item equal to `b`, and `Unbounded` accepts everything.
    pub fn next_within(&mut self, upper: Bound<&N::Item>) -> bool {
        let candidate = match self.pending.take() {
            Some(item) => Some(item),
            None => self.advance(),
        };

        match candidate {
            Some(item) if is_below(item, upper) => {
                self.last = Some(item);
                self.phase = Phase::Yielded;
                true
            }
            Some(item) => {
                self.pending = Some(item);
                self.phase = Phase::Stopped;
                false
            }
            None => {
                self.phase = Phase::Stopped;
                false
            }
        }
    }

    /// Position the iterator so the next `next` yields the first item not
    /// less than `threshold`.
    ///
    /// Skipped items are never produced. If every item is less than
    /// `threshold`, the iterator ends up exhausted.
    ///
    /// # Panics
    /// Panics unless called right after acquisition, before any `next` and
    /// before any other `skip_less`.
    pub fn skip_less(&mut self, threshold: &N::Item) {
        assert!(
            self.phase == Phase::Fresh,
            "skip_less must be called before the first next"
        );
        self.phase = Phase::Sought;

        let Some(mut node) = self.node else {
            return;
        };

        loop {
            // `child(k)` precedes `items()[k]` and may still hold items at or
            // above the threshold, so the walk continues into it.
            self.index = node.items().partition_point(|item| item < threshold);
            if node.is_leaf() {
                break;
            }
            node = self.descend(node);
        }

        trace!(depth = self.path.depth(), index = self.index, "seek positioned");
    }

    /// The item produced by the last successful `next`.
    ///
    /// # Panics
    /// Panics if no `next` has been called yet, or the last one returned
    /// false.
    pub fn item(&self) -> &'a N::Item {
        match self.current() {
            Some(item) => item,
            None => panic!("item() requires a preceding next() that returned true"),
        }
    }

    /// Like [`item`](Self::item), but returns `None` instead of panicking.
    pub fn current(&self) -> Option<&'a N::Item> {
        match self.phase {
            Phase::Yielded => self.last,
            _ => None,
        }
    }

    /// Adapt this cursor into a std [`Iterator`] stopping at `upper`.
    ///
    /// # Example
    /// ```
    /// use std::ops::Bound;
    ///
    /// use btree_cursor::index::btree::BTree;
    ///
    /// let mut tree = BTree::new(3).unwrap();
    /// for i in 0..20 {
    ///     tree.replace_or_insert(i);
    /// }
    ///
    /// let mut iter = tree.iter().unwrap();
    /// let head: Vec<_> = iter.bounded(Bound::Included(&4)).copied().collect();
    /// assert_eq!(head, vec![0, 1, 2, 3, 4]);
    ///
    /// let rest = iter.bounded(Bound::Unbounded).count();
    /// assert_eq!(rest, 15);
    /// ```
    pub fn bounded<'i>(&'i mut self, upper: Bound<&'i N::Item>) -> Bounded<'i, 'a, N> {
        Bounded::new(self, upper)
    }

    /// Current length of the path stack.
    pub fn depth(&self) -> usize {
        self.path.depth()
    }

    /// Release the iterator to its pool.
    ///
    /// Equivalent to dropping it.
    pub fn close(self) {
        drop(self)
    }

    #[cfg(test)]
    pub(crate) fn path_capacity(&self) -> usize {
        self.path.capacity()
    }

    /// Produce the next item in order, ignoring bounds.
    fn advance(&mut self) -> Option<&'a N::Item> {
        let mut node = self.node?;

        // Items are only emitted once their left subtree is done, so an
        // internal position always means "go down to the leftmost leaf".
        while !node.is_leaf() {
            node = self.descend(node);
        }

        loop {
            if let Some(item) = node.items().get(self.index) {
                self.index += 1;
                return Some(item);
            }
            node = self.ascend()?;
        }
    }

    /// Save the current position and move into `node.child(index)`.
    fn descend(&mut self, node: &'a N) -> &'a N {
        let child = node.child(self.index);
        self.path.push(node, self.index);
        trace!(depth = self.path.depth(), index = self.index, "descend");

        self.node = Some(child);
        self.index = 0;
        child
    }

    /// Return to the parent frame, or mark the walk exhausted at the root.
    fn ascend(&mut self) -> Option<&'a N> {
        match self.path.pop() {
            Some(frame) => {
                trace!(depth = self.path.depth(), index = frame.index, "ascend");
                self.node = Some(frame.node);
                self.index = frame.index;
                Some(frame.node)
            }
            None => {
                trace!("walk exhausted");
                self.node = None;
                self.index = 0;
                None
            }
        }
    }
}

impl<N: Node> Drop for TreeIter<'_, N> {
    fn drop(&mut self) {
        self.node = None;
        self.last = None;
        self.pending = None;

        let path = std::mem::take(&mut self.path);
        self.pool.release(path.into_buffer());
    }
}

impl<N: Node> fmt::Debug for TreeIter<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeIter")
            .field("path", &self.path)
            .field("exhausted", &self.node.is_none())
            .field("index", &self.index)
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}

#[inline]
fn is_below<T: Ord>(item: &T, upper: Bound<&T>) -> bool {
    match upper {
        Bound::Included(upper) => item <= upper,
        Bound::Excluded(upper) => item < upper,
        Bound::Unbounded => true,
    }
}
