//! Tree Iterator Tests
//!
//! Fixed scenarios over a tree of 0..100 built with a small degree, covering
//! bounded walks and seeks at every position.

use btree_cursor::{acquire, BTree};

const N: i64 = 100;

fn create_tree(degree: usize) -> BTree<i64> {
    let mut tree = BTree::new(degree).unwrap();
    for i in 0..N {
        tree.replace_or_insert(i);
    }
    tree
}

// ============================================================================
// Bounded walks
// ============================================================================

/// Every item is produced once, in order, and the bound stops the walk.
#[test]
fn test_next_full_range() {
    let tree = create_tree(4);
    let mut iter = acquire(&tree).unwrap();

    for i in 0..N {
        assert!(iter.next(&N), "next should return true ({i})");
        assert_eq!(*iter.item(), i);
    }

    assert!(!iter.next(&N), "next should return false at the end");
}

/// `next(&99)` excludes 99 itself.
#[test]
fn test_next_bound_is_exclusive() {
    let tree = create_tree(4);
    let mut iter = acquire(&tree).unwrap();

    for i in 0..N - 1 {
        assert!(iter.next(&99));
        assert_eq!(*iter.item(), i);
    }
    assert!(!iter.next(&99));

    // Widening the bound picks 99 back up.
    assert!(iter.next(&N));
    assert_eq!(*iter.item(), 99);
}

/// For every bound, the last item produced is the one just below it.
#[test]
fn test_next_stops_below_each_bound() {
    let tree = create_tree(4);

    for i in 0..N {
        let mut iter = acquire(&tree).unwrap();
        let mut last = None;
        while iter.next(&(i + 1)) {
            last = Some(*iter.item());
        }
        assert_eq!(last, Some(i), "should return the last value below {}", i + 1);
    }
}

/// A bound at or below the first item yields nothing.
#[test]
fn test_next_bound_below_first_item() {
    let tree = create_tree(4);
    let mut iter = acquire(&tree).unwrap();

    assert!(!iter.next(&0));
    assert!(!iter.next(&-5));
    assert!(iter.next(&1));
    assert_eq!(*iter.item(), 0);
}

/// Once exhausted, the iterator stays exhausted.
#[test]
fn test_exhaustion_is_idempotent() {
    let tree = create_tree(3);
    let mut iter = acquire(&tree).unwrap();

    while iter.next_unbounded() {}

    assert!(!iter.next_unbounded());
    assert!(!iter.next(&N));
    assert!(!iter.next(&0));
}

// ============================================================================
// Seeks
// ============================================================================

fn check_skip_less(tree: &BTree<i64>, value: i64) {
    let mut iter = acquire(tree).unwrap();
    iter.skip_less(&value);

    let has_next = iter.next(&N);
    assert_eq!(has_next, value < N, "next should be true iff {value} < {N}");
    if has_next {
        assert_eq!(
            *iter.item(),
            value.max(0),
            "skip_less should stop on the searched element"
        );
    }
}

/// Seek to every threshold from before the first to past the last item.
#[test]
fn test_skip_less_every_threshold() {
    let tree = create_tree(4);
    for value in -1..=N {
        check_skip_less(&tree, value);
    }
}

#[test]
fn test_skip_less_then_walk_to_end() {
    let tree = create_tree(4);
    let mut iter = acquire(&tree).unwrap();
    iter.skip_less(&50);

    for i in 50..N {
        assert!(iter.next(&N));
        assert_eq!(*iter.item(), i);
    }
    assert!(!iter.next(&N));
}

/// Thresholds between stored items land on the next larger one.
#[test]
fn test_skip_less_between_items() {
    let mut tree = BTree::new(2).unwrap();
    for i in 0..N {
        tree.replace_or_insert(i * 10);
    }

    for threshold in [1, 95, 401, 989] {
        let mut iter = acquire(&tree).unwrap();
        iter.skip_less(&threshold);
        assert!(iter.next_unbounded());
        assert_eq!(*iter.item(), (threshold / 10 + 1) * 10);
    }
}

// ============================================================================
// Degrees and empty trees
// ============================================================================

/// The walk is the same for every node size.
#[test]
fn test_degrees_agree() {
    for degree in 2..=8 {
        let tree = create_tree(degree);
        let mut iter = acquire(&tree).unwrap();

        let mut seen = vec![];
        while iter.next_unbounded() {
            seen.push(*iter.item());
        }
        assert_eq!(seen, (0..N).collect::<Vec<_>>(), "degree {degree}");
    }
}

#[test]
fn test_empty_tree_has_no_iterator() {
    let tree = BTree::<i64>::new(4).unwrap();
    assert!(acquire(&tree).is_none());
    assert!(tree.iter().is_none());
}

/// Items are borrowed from the tree, so non-Copy items work too.
#[test]
fn test_string_items() {
    let mut tree = BTree::new(2).unwrap();
    for word in ["pear", "apple", "fig", "kiwi", "banana", "cherry"] {
        tree.replace_or_insert(word.to_string());
    }

    let mut iter = tree.iter().unwrap();
    iter.skip_less(&"c".to_string());

    let mut seen = vec![];
    while iter.next(&"l".to_string()) {
        seen.push(iter.item().as_str());
    }
    assert_eq!(seen, vec!["cherry", "fig", "kiwi"]);
}
