//! Instance pool for tree iterators.
//!
//! The only allocation an iterator owns is its path stack, so that is what
//! gets pooled: acquiring pops a cleared buffer off the free list, dropping
//! the iterator clears the buffer and pushes it back.

use std::sync::atomic::Ordering;
use std::sync::OnceLock;

use parking_lot::Mutex;
use tracing::debug;

use crate::common::config::PoolConfig;
use crate::common::Result;
use crate::cursor::frame::{PathStack, Slot};
use crate::cursor::{PoolStats, TreeIter};
use crate::index::Tree;

/// A concurrency-safe free list of iterator path stacks.
///
/// # Thread Safety
/// - `free_list`: `Mutex`, held only to push or pop one buffer
/// - `stats`: No lock, atomic counters
///
/// Any number of threads may acquire and release concurrently. Each
/// [`TreeIter`] handed out is confined to the thread using it.
///
/// # Usage
/// ```
/// use btree_cursor::cursor::IterPool;
/// use btree_cursor::index::btree::BTree;
///
/// let pool = IterPool::default();
/// let mut tree = BTree::new(2).unwrap();
/// tree.replace_or_insert(7);
///
/// let mut iter = pool.acquire(&tree).unwrap();
/// assert!(iter.next(&10));
/// assert_eq!(*iter.item(), 7);
/// iter.close();
///
/// assert_eq!(pool.idle_count(), 1);
/// ```
#[derive(Debug)]
pub struct IterPool {
    /// Stack of idle buffers (LIFO, the most recently used is warmest).
    free_list: Mutex<Vec<Vec<Slot>>>,

    config: PoolConfig,

    stats: PoolStats,
}

impl IterPool {
    /// Create a pool with the given configuration.
    ///
    /// # Errors
    /// - `Error::InvalidConfig` if the configuration fails validation
    pub fn new(config: PoolConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            free_list: Mutex::new(Vec::with_capacity(config.max_idle)),
            config,
            stats: PoolStats::new(),
        })
    }

    /// The process-wide pool used by [`acquire`].
    pub fn global() -> &'static IterPool {
        static GLOBAL: OnceLock<IterPool> = OnceLock::new();
        GLOBAL.get_or_init(IterPool::default)
    }

    /// Acquire an iterator positioned before the first item of `tree`.
    ///
    /// Returns `None` if the tree is empty. The iterator returns its path
    /// stack to this pool when dropped or closed.
    pub fn acquire<'a, T>(&'a self, tree: &'a T) -> Option<TreeIter<'a, T::Node>>
    where
        T: Tree + ?Sized,
    {
        let Some(root) = tree.root() else {
            self.stats.empty_tree.fetch_add(1, Ordering::Relaxed);
            debug!("acquire on empty tree");
            return None;
        };

        let path = PathStack::from_buffer(self.take_buffer(), self.config.path_capacity);
        Some(TreeIter::new(self, root, path))
    }

    /// Pop an idle buffer, or allocate a new one.
    fn take_buffer(&self) -> Vec<Slot> {
        self.stats.acquired.fetch_add(1, Ordering::Relaxed);

        let idle = self.free_list.lock().pop();
        match idle {
            Some(buf) => {
                self.stats.reused.fetch_add(1, Ordering::Relaxed);
                buf
            }
            None => {
                self.stats.created.fetch_add(1, Ordering::Relaxed);
                Vec::with_capacity(self.config.path_capacity)
            }
        }
    }

    /// Return a cleared buffer. Called by `TreeIter` on drop.
    pub(crate) fn release(&self, buf: Vec<Slot>) {
        debug_assert!(buf.is_empty());

        let mut free_list = self.free_list.lock();
        if free_list.len() >= self.config.max_idle {
            drop(free_list);
            self.stats.discarded.fetch_add(1, Ordering::Relaxed);
            debug!(capacity = buf.capacity(), "free list full, dropping path stack");
            return;
        }

        free_list.push(buf);
        drop(free_list);
        self.stats.released.fetch_add(1, Ordering::Relaxed);
    }

    /// Number of buffers currently on the free list.
    pub fn idle_count(&self) -> usize {
        self.free_list.lock().len()
    }

    /// The configuration this pool was built with.
    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Get pool statistics.
    pub fn stats(&self) -> &PoolStats {
        &self.stats
    }
}

impl Default for IterPool {
    fn default() -> Self {
        Self {
            free_list: Mutex::new(Vec::new()),
            config: PoolConfig::default(),
            stats: PoolStats::new(),
        }
    }
}

/// Acquire an iterator over `tree` from the process-wide pool.
///
/// Returns `None` if the tree is empty.
pub fn acquire<T>(tree: &T) -> Option<TreeIter<'_, T::Node>>
where
    T: Tree + ?Sized,
{
    IterPool::global().acquire(tree)
}
