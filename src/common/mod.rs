//! Common types shared across btree-cursor.
//!
//! - Configuration constants and [`PoolConfig`](config::PoolConfig)
//! - Error types

pub mod config;
pub mod error;

pub use error::{Error, Result};
