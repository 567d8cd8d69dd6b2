//! Shared test utilities.
//!
//! # Usage
//!
//! ```rust,ignore
//! mod common;
//!
//! #[test]
//! fn my_test() {
//!     common::init_tracing();
//!     // ...
//! }
//! ```
//!
//! Set `RUST_LOG` (e.g. `twothree=trace`) to see split and load events.

#![allow(dead_code)]

use std::sync::Once;

use tracing_subscriber::EnvFilter;
use twothree::TwoThreeTree;

static INIT: Once = Once::new();

/// Install a test-friendly subscriber once per test binary.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// Insertion order that walks every split path, including repeated root growth.
pub const REFERENCE_KEYS: [u32; 41] = [
    1, 40, 14, 34, 15, 6, 7, 35, 8, 9, 22, 32, 23, 36, 24, 10, 27, 28, 37, 29, 30, 11, 12, 33, 13,
    31, 5, 21, 16, 17, 38, 18, 19, 20, 2, 3, 39, 4, 25, 26, 0,
];

/// Build a tree from `keys`, checking every invariant after each insert.
pub fn build_checked(keys: &[u32]) -> TwoThreeTree<u32, String> {
    let mut tree = TwoThreeTree::new();
    for &key in keys {
        tree.insert(key, format!("value-{}", key)).unwrap();
        tree.validate().unwrap();
    }
    tree
}
