//! [`Iterator`] adapter over a [`TreeIter`].

use std::iter::FusedIterator;
use std::ops::Bound;

use crate::cursor::TreeIter;
use crate::index::Node;

/// Yields items from a [`TreeIter`] until one falls outside `upper`.
///
/// Created by [`TreeIter::bounded`]. The underlying cursor keeps its position
/// afterwards, including the item that stopped this adapter.
#[derive(Debug)]
pub struct Bounded<'i, 'a, N: Node> {
    iter: &'i mut TreeIter<'a, N>,
    upper: Bound<&'i N::Item>,
    done: bool,
}

impl<'i, 'a, N: Node> Bounded<'i, 'a, N> {
    pub(crate) fn new(iter: &'i mut TreeIter<'a, N>, upper: Bound<&'i N::Item>) -> Self {
        Self {
            iter,
            upper,
            done: false,
        }
    }
}

impl<'a, N: Node> Iterator for Bounded<'_, 'a, N> {
    type Item = &'a N::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        if self.iter.next_within(self.upper) {
            return self.iter.current();
        }

        self.done = true;
        None
    }
}

impl<N: Node> FusedIterator for Bounded<'_, '_, N> {}
