//! Read-only node access consumed by the cursor.

/// A node of an ordered multiway search tree.
///
/// # Invariants
/// Implementations must uphold the B-tree shape, which the cursor relies on
/// but never checks:
/// - `items()` is sorted strictly ascending
/// - a leaf has no children; an internal node with `n` items has exactly
///   `n + 1` children, reachable through `child(0..=n)`
/// - `child(k)` holds exactly the items strictly between `items()[k - 1]`
///   and `items()[k]`
///
/// The tree must not be mutated while a cursor borrows it. The borrow checker
/// enforces this for plain references; implementations with interior
/// mutability have to uphold it themselves.
pub trait Node {
    /// The ordered element type.
    type Item: Ord;

    /// The node's items, sorted ascending.
    fn items(&self) -> &[Self::Item];

    /// True if the node has no children.
    fn is_leaf(&self) -> bool;

    /// The child at `index`.
    ///
    /// # Panics
    /// May panic if the node is a leaf or `index > items().len()`.
    fn child(&self, index: usize) -> &Self;
}

/// A tree exposing its root node.
pub trait Tree {
    /// The node type of this tree.
    type Node: Node;

    /// The root node, or `None` for an empty tree.
    fn root(&self) -> Option<&Self::Node>;
}
