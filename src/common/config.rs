//! Configuration for btree-cursor.

use crate::common::{Error, Result};

/// Initial capacity of a freshly created path stack.
///
/// A B-tree of degree 16 holding a billion items is about 8 levels deep, so
/// 16 frames covers every realistic tree without the stack reallocating.
pub const DEFAULT_PATH_CAPACITY: usize = 16;

/// Maximum number of idle path buffers an [`IterPool`] keeps.
///
/// Buffers released beyond this are dropped.
///
/// [`IterPool`]: crate::cursor::IterPool
pub const DEFAULT_MAX_IDLE: usize = 64;

/// Smallest degree a [`BTree`](crate::index::btree::BTree) accepts.
///
/// Degree `d` allows at most `2d - 1` items per node.
pub const MIN_DEGREE: usize = 2;

/// Tuning knobs for an [`IterPool`](crate::cursor::IterPool).
///
/// # Example
/// ```
/// use btree_cursor::common::config::PoolConfig;
///
/// let config = PoolConfig::default().with_max_idle(8);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.path_capacity, 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConfig {
    /// Capacity a new path stack is created with.
    pub path_capacity: usize,

    /// Upper bound on idle buffers held by the free list.
    pub max_idle: usize,
}

impl PoolConfig {
    /// Set the initial path stack capacity.
    pub fn with_path_capacity(mut self, path_capacity: usize) -> Self {
        self.path_capacity = path_capacity;
        self
    }

    /// Set the idle buffer limit. Zero disables pooling.
    pub fn with_max_idle(mut self, max_idle: usize) -> Self {
        self.max_idle = max_idle;
        self
    }

    /// Check the configuration is usable.
    ///
    /// # Errors
    /// - `Error::InvalidConfig` if `path_capacity` is 0
    pub fn validate(&self) -> Result<()> {
        if self.path_capacity == 0 {
            return Err(Error::InvalidConfig("path_capacity must be > 0"));
        }
        Ok(())
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            path_capacity: DEFAULT_PATH_CAPACITY,
            max_idle: DEFAULT_MAX_IDLE,
        }
    }
}
