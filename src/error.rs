//! Error types for fallible insertion.

use std::collections::TryReserveError;
use thiserror::Error;

/// Result type alias for map operations that can fail.
pub type Result<T> = std::result::Result<T, Error>;

/// Faults raised while growing the table.
///
/// A missing key is never an error; `get` and `put` report it as `None`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The table is already at its maximum capacity and is full enough to need growing.
    #[error("capacity overflow: cannot grow a table of {capacity} buckets")]
    CapacityOverflow { capacity: usize },

    /// The allocator refused the buckets for the grown table.
    #[error("failed to allocate {capacity} buckets: {source}")]
    AllocFailed {
        capacity: usize,
        #[source]
        source: TryReserveError,
    },
}
