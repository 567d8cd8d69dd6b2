//! Error types for twothree.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in twothree.
///
/// A lookup that finds nothing is not an error: `get` returns `None`.
/// Structural corruption is reported separately by
/// [`TwoThreeTree::validate`](crate::index::two_three::TwoThreeTree::validate).
#[derive(Debug, Error)]
pub enum Error {
    /// An insert was attempted without a key.
    ///
    /// The tree is left untouched.
    #[error("cannot store an entry without a key")]
    InvalidKey,

    /// An insert was attempted with a key that is already stored.
    ///
    /// The existing value is kept; the new one is dropped.
    #[error("key already exists")]
    KeyExists,

    /// I/O error while reading a catalog file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
