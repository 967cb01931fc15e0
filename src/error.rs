//! Error types for cache construction.
//!
//! Lookups and removals never fail: a missing key is reported as `None`.
//! The only fallible path is building a cache from an untrusted, signed
//! capacity value.

use thiserror::Error;

/// Errors produced while validating a cache configuration.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheError {
    /// The requested capacity was below zero.
    #[error("capacity must be non-negative, got {0}")]
    NegativeCapacity(i64),

    /// The requested capacity does not fit in `usize` on this target.
    #[error("capacity {0} does not fit in usize")]
    CapacityOverflow(i64),
}

/// Convenience result type for fallible cache construction.
pub type Result<T> = core::result::Result<T, CacheError>;
