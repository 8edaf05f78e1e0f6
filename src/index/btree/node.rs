//! B-tree node with insert and split logic.

use std::cmp::Ordering;
use std::mem;
use std::ops::Bound;

use crate::index::Node;

/// A single B-tree node.
///
/// Leaves have no children. An internal node with `n` items owns `n + 1`
/// children, with `children[k]` holding the items that sort between
/// `items[k - 1]` and `items[k]`.
#[derive(Debug, Clone)]
pub struct BTreeNode<T> {
    items: Vec<T>,
    children: Vec<BTreeNode<T>>,
}

impl<T: Ord> BTreeNode<T> {
    /// Create a leaf holding a single item.
    pub(crate) fn leaf(item: T, max_items: usize) -> Self {
        let mut items = Vec::with_capacity(max_items);
        items.push(item);
        Self {
            items,
            children: Vec::new(),
        }
    }

    /// Create an internal node from a separator and its two children.
    pub(crate) fn internal(left: Self, item: T, right: Self, max_items: usize) -> Self {
        let mut items = Vec::with_capacity(max_items);
        items.push(item);
        let mut children = Vec::with_capacity(max_items + 1);
        children.push(left);
        children.push(right);
        Self { items, children }
    }

    /// Number of items held directly by this node.
    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    /// Binary search for `item`: `Ok(i)` on a hit, `Err(i)` for the insert slot.
    fn find(&self, item: &T) -> std::result::Result<usize, usize> {
        self.items.binary_search(item)
    }

    /// Split this node around `items[i]`.
    ///
    /// Keeps `items[..i]` here and returns the separator together with a new
    /// node holding `items[i + 1..]` (and the matching children).
    pub(crate) fn split(&mut self, i: usize) -> (T, Self) {
        let items = self.items.split_off(i + 1);
        let children = if self.children.is_empty() {
            Vec::new()
        } else {
            self.children.split_off(i + 1)
        };

        // `items[i]` is now the last element.
        let separator = self
            .items
            .pop()
            .unwrap_or_else(|| unreachable!("split index {i} out of range"));

        (separator, Self { items, children })
    }

    /// Split `children[i]` if it is full. Returns true if a split happened.
    fn maybe_split_child(&mut self, i: usize, max_items: usize) -> bool {
        if self.children[i].len() < max_items {
            return false;
        }

        let (separator, right) = self.children[i].split(max_items / 2);
        self.items.insert(i, separator);
        self.children.insert(i + 1, right);
        true
    }

    /// Insert `item` into the subtree rooted here, replacing an equal item.
    ///
    /// The caller guarantees this node is not full.
    pub(crate) fn insert(&mut self, item: T, max_items: usize) -> Option<T> {
        let mut i = match self.find(&item) {
            Ok(i) => return Some(mem::replace(&mut self.items[i], item)),
            Err(i) => i,
        };

        if self.children.is_empty() {
            self.items.insert(i, item);
            return None;
        }

        if self.maybe_split_child(i, max_items) {
            // The separator just pulled up may be the item itself, or move
            // the insert point one child to the right.
            match item.cmp(&self.items[i]) {
                Ordering::Less => {}
                Ordering::Greater => i += 1,
                Ordering::Equal => return Some(mem::replace(&mut self.items[i], item)),
            }
        }

        self.children[i].insert(item, max_items)
    }

    /// Look up an item equal to `key`.
    pub(crate) fn get(&self, key: &T) -> Option<&T> {
        let mut node = self;
        loop {
            match node.find(key) {
                Ok(i) => return Some(&node.items[i]),
                Err(_) if node.children.is_empty() => return None,
                Err(i) => node = &node.children[i],
            }
        }
    }

    /// Recursive in-order walk of the items inside `(from, to)`.
    ///
    /// Returns false once `f` asks to stop or an item reaches `to`.
    pub(crate) fn ascend<F>(&self, from: Bound<&T>, to: Bound<&T>, f: &mut F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        let start = match from {
            Bound::Included(from) => self.items.partition_point(|item| item < from),
            Bound::Excluded(from) => self.items.partition_point(|item| item <= from),
            Bound::Unbounded => 0,
        };

        for i in start..self.items.len() {
            if !self.children.is_empty() && !self.children[i].ascend(from, to, f) {
                return false;
            }

            let item = &self.items[i];
            let below = match to {
                Bound::Included(to) => item <= to,
                Bound::Excluded(to) => item < to,
                Bound::Unbounded => true,
            };
            if !below || !f(item) {
                return false;
            }
        }

        match self.children.last() {
            Some(last) => last.ascend(from, to, f),
            None => true,
        }
    }
}

impl<T: Ord> Node for BTreeNode<T> {
    type Item = T;

    #[inline]
    fn items(&self) -> &[T] {
        &self.items
    }

    #[inline]
    fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    #[inline]
    fn child(&self, index: usize) -> &Self {
        &self.children[index]
    }
}

#[cfg(test)]
impl<T: Ord + std::fmt::Debug> BTreeNode<T> {
    /// Assert the B-tree shape below this node, returning the leaf depth.
    pub(crate) fn check_invariants(
        &self,
        lower: Option<&T>,
        upper: Option<&T>,
        max_items: usize,
    ) -> usize {
        assert!(self.items.len() <= max_items, "node over capacity");
        assert!(
            self.items.windows(2).all(|w| w[0] < w[1]),
            "items not strictly ascending: {:?}",
            self.items
        );
        if let (Some(lower), Some(first)) = (lower, self.items.first()) {
            assert!(lower < first);
        }
        if let (Some(upper), Some(last)) = (upper, self.items.last()) {
            assert!(last < upper);
        }

        if self.children.is_empty() {
            return 1;
        }

        assert_eq!(self.children.len(), self.items.len() + 1);
        let depths: Vec<usize> = self
            .children
            .iter()
            .enumerate()
            .map(|(k, child)| {
                let lo = if k == 0 { lower } else { Some(&self.items[k - 1]) };
                let hi = self.items.get(k).or(upper);
                child.check_invariants(lo, hi, max_items)
            })
            .collect();
        assert!(depths.windows(2).all(|w| w[0] == w[1]), "unbalanced");
        depths[0] + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(items: Vec<u32>) -> BTreeNode<u32> {
        BTreeNode {
            items,
            children: Vec::new(),
        }
    }

    #[test]
    fn test_split_leaf() {
        let mut node = leaf(vec![1, 2, 3, 4, 5]);
        let (separator, right) = node.split(2);

        assert_eq!(separator, 3);
        assert_eq!(node.items(), &[1, 2]);
        assert_eq!(right.items(), &[4, 5]);
        assert!(right.is_leaf());
    }

    #[test]
    fn test_split_internal_moves_children() {
        let mut node = BTreeNode {
            items: vec![10, 20, 30],
            children: vec![leaf(vec![5]), leaf(vec![15]), leaf(vec![25]), leaf(vec![35])],
        };
        let (separator, right) = node.split(1);

        assert_eq!(separator, 20);
        assert_eq!(node.items(), &[10]);
        assert_eq!(node.children.len(), 2);
        assert_eq!(right.items(), &[30]);
        assert_eq!(right.child(0).items(), &[25]);
        assert_eq!(right.child(1).items(), &[35]);
    }

    #[test]
    fn test_insert_replaces_equal() {
        let mut node = leaf(vec![1, 3]);
        assert_eq!(node.insert(2, 3), None);
        assert_eq!(node.insert(3, 3), Some(3));
        assert_eq!(node.items(), &[1, 2, 3]);
    }

    #[test]
    fn test_ascend_stops_at_bound() {
        let node = BTreeNode {
            items: vec![10, 20],
            children: vec![leaf(vec![1, 5]), leaf(vec![15]), leaf(vec![25, 30])],
        };

        let mut seen = vec![];
        node.ascend(Bound::Included(&5), Bound::Excluded(&25), &mut |v| {
            seen.push(*v);
            true
        });
        assert_eq!(seen, vec![5, 10, 15, 20]);

        let mut seen = vec![];
        node.ascend(Bound::Excluded(&10), Bound::Unbounded, &mut |v| {
            seen.push(*v);
            true
        });
        assert_eq!(seen, vec![15, 20, 25, 30]);
    }
}
