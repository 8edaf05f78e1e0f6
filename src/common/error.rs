//! Error types for btree-cursor.
//!
//! Only construction-time problems are reported as values. Misusing an
//! iterator (reading an item outside its valid window, seeking mid-walk) is a
//! contract violation and panics instead.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All recoverable errors in btree-cursor.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A B-tree was requested with a degree below [`MIN_DEGREE`].
    ///
    /// [`MIN_DEGREE`]: crate::common::config::MIN_DEGREE
    #[error("invalid B-tree degree {0}: must be at least 2")]
    InvalidDegree(usize),

    /// A [`PoolConfig`](crate::common::config::PoolConfig) failed validation.
    #[error("invalid pool configuration: {0}")]
    InvalidConfig(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDegree(1);
        assert_eq!(
            format!("{}", err),
            "invalid B-tree degree 1: must be at least 2"
        );

        let err = Error::InvalidConfig("path_capacity must be > 0");
        assert_eq!(
            format!("{}", err),
            "invalid pool configuration: path_capacity must be > 0"
        );
    }

    #[test]
    fn test_result_type_alias() {
        fn might_fail() -> Result<u32> {
            Err(Error::InvalidDegree(0))
        }

        assert_eq!(might_fail(), Err(Error::InvalidDegree(0)));
    }
}
