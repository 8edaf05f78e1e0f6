//! Iterator pool statistics tracking.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Statistics tracked by an [`IterPool`](super::IterPool).
///
/// All fields are atomic so concurrent acquire/release calls can count
/// without taking the free list lock. `Ordering::Relaxed` is enough: the
/// counters are independent and only need atomicity.
///
/// # Example
/// ```
/// use btree_cursor::cursor::PoolStats;
/// use std::sync::atomic::Ordering;
///
/// let stats = PoolStats::new();
/// stats.reused.fetch_add(1, Ordering::Relaxed);
/// assert_eq!(stats.reused.load(Ordering::Relaxed), 1);
/// ```
#[derive(Debug)]
pub struct PoolStats {
    /// Number of iterators handed out.
    pub acquired: AtomicU64,

    /// Acquisitions that had to allocate a new path stack.
    pub created: AtomicU64,

    /// Acquisitions served from the free list.
    pub reused: AtomicU64,

    /// Path stacks returned to the free list.
    pub released: AtomicU64,

    /// Path stacks dropped because the free list was full.
    pub discarded: AtomicU64,

    /// Acquire calls refused because the tree was empty.
    pub empty_tree: AtomicU64,
}

impl PoolStats {
    /// Create a new stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self {
            acquired: AtomicU64::new(0),
            created: AtomicU64::new(0),
            reused: AtomicU64::new(0),
            released: AtomicU64::new(0),
            discarded: AtomicU64::new(0),
            empty_tree: AtomicU64::new(0),
        }
    }

    /// Fraction of acquisitions served from the free list (0.0 to 1.0).
    pub fn reuse_rate(&self) -> f64 {
        self.snapshot().reuse_rate()
    }

    /// Get a non-atomic copy for display/logging.
    pub fn snapshot(&self) -> PoolStatsSnapshot {
        PoolStatsSnapshot {
            acquired: self.acquired.load(Ordering::Relaxed),
            created: self.created.load(Ordering::Relaxed),
            reused: self.reused.load(Ordering::Relaxed),
            released: self.released.load(Ordering::Relaxed),
            discarded: self.discarded.load(Ordering::Relaxed),
            empty_tree: self.empty_tree.load(Ordering::Relaxed),
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&self) {
        self.acquired.store(0, Ordering::Relaxed);
        self.created.store(0, Ordering::Relaxed);
        self.reused.store(0, Ordering::Relaxed);
        self.released.store(0, Ordering::Relaxed);
        self.discarded.store(0, Ordering::Relaxed);
        self.empty_tree.store(0, Ordering::Relaxed);
    }
}

impl Default for PoolStats {
    fn default() -> Self {
        Self::new()
    }
}

/// A point-in-time snapshot of [`PoolStats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PoolStatsSnapshot {
    pub acquired: u64,
    pub created: u64,
    pub reused: u64,
    pub released: u64,
    pub discarded: u64,
    pub empty_tree: u64,
}

impl PoolStatsSnapshot {
    /// Fraction of acquisitions served from the free list (0.0 to 1.0).
    pub fn reuse_rate(&self) -> f64 {
        let total = self.created + self.reused;
        if total == 0 {
            0.0
        } else {
            self.reused as f64 / total as f64
        }
    }
}

impl fmt::Display for PoolStatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PoolStats {{ acquired: {}, created: {}, reused: {}, discarded: {}, reuse_rate: {:.2}% }}",
            self.acquired,
            self.created,
            self.reused,
            self.discarded,
            self.reuse_rate() * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = PoolStats::new();
        assert_eq!(stats.snapshot(), PoolStatsSnapshot::default());
        assert_eq!(stats.reuse_rate(), 0.0);
    }

    #[test]
    fn test_reuse_rate() {
        let stats = PoolStats::new();
        stats.created.fetch_add(1, Ordering::Relaxed);
        stats.reused.fetch_add(3, Ordering::Relaxed);

        assert_eq!(stats.reuse_rate(), 0.75);
    }

    #[test]
    fn test_stats_reset() {
        let stats = PoolStats::new();
        stats.acquired.fetch_add(10, Ordering::Relaxed);
        stats.discarded.fetch_add(2, Ordering::Relaxed);

        stats.reset();

        assert_eq!(stats.snapshot(), PoolStatsSnapshot::default());
    }

    #[test]
    fn test_stats_display() {
        let stats = PoolStats::new();
        stats.acquired.fetch_add(4, Ordering::Relaxed);
        stats.created.fetch_add(1, Ordering::Relaxed);
        stats.reused.fetch_add(3, Ordering::Relaxed);

        let display = format!("{}", stats.snapshot());

        assert!(display.contains("acquired: 4"));
        assert!(display.contains("reused: 3"));
        assert!(display.contains("75.00%"));
    }
}
