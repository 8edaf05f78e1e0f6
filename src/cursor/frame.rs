//! Cursor frames and the path stack.
//!
//! A [`Frame`] is a suspended ancestor position: the node, and the index of
//! the item whose left subtree is being visited (or `items().len()` once the
//! rightmost child is entered). The [`PathStack`] holds every frame from the
//! root down to the parent of the node currently being visited.

use std::fmt;

/// Lifetime-free storage for a path stack's allocation.
///
/// Same size and alignment as a [`Frame`], so a cleared `Vec<Frame>` can be
/// turned into a `Vec<Slot>` and back without reallocating.
pub(crate) type Slot = [usize; 2];

/// Re-type an emptied vector, keeping its allocation where the layouts match.
///
/// `filter_map` over a vector's own `IntoIter` is collected in place by std,
/// so no element is ever produced and the buffer is handed over as-is.
fn recycle<S, D>(mut buf: Vec<S>) -> Vec<D> {
    buf.clear();
    buf.into_iter().filter_map(|_| None).collect()
}

/// A suspended position in an ancestor node.
pub(crate) struct Frame<'a, N> {
    pub(crate) node: &'a N,
    pub(crate) index: usize,
}

impl<N> Clone for Frame<'_, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N> Copy for Frame<'_, N> {}

/// Growable stack of [`Frame`]s, last element = parent of the current node.
pub(crate) struct PathStack<'a, N> {
    frames: Vec<Frame<'a, N>>,
}

impl<'a, N> PathStack<'a, N> {
    /// Build an empty stack on top of a pooled buffer.
    ///
    /// The stack is guaranteed at least `min_capacity` frames of room.
    pub(crate) fn from_buffer(buf: Vec<Slot>, min_capacity: usize) -> Self {
        let mut frames: Vec<Frame<'a, N>> = recycle(buf);
        if frames.capacity() < min_capacity {
            frames.reserve_exact(min_capacity);
        }
        Self { frames }
    }

    /// Give the allocation back, emptied, for pooling.
    pub(crate) fn into_buffer(self) -> Vec<Slot> {
        recycle(self.frames)
    }

    #[inline]
    pub(crate) fn push(&mut self, node: &'a N, index: usize) {
        self.frames.push(Frame { node, index });
    }

    #[inline]
    pub(crate) fn pop(&mut self) -> Option<Frame<'a, N>> {
        self.frames.pop()
    }

    #[inline]
    pub(crate) fn depth(&self) -> usize {
        self.frames.len()
    }

    #[cfg(test)]
    pub(crate) fn capacity(&self) -> usize {
        self.frames.capacity()
    }
}

impl<N> Default for PathStack<'_, N> {
    fn default() -> Self {
        Self { frames: Vec::new() }
    }
}

impl<N> fmt::Debug for PathStack<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.frames.iter().map(|frame| frame.index))
            .finish()
    }
}
