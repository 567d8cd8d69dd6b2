//! twothree - An arena-backed 2-3 search tree and an enemy catalog built on it.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            twothree                             │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Catalog Layer (catalog/)                    │   │
//! │  │   CSV rows → Enemy records → summaries + name search     │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓  insert / get / traverse        │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Index Layer (index/)                        │   │
//! │  │   TwoThreeTree: arena of nodes, split-on-insert,         │   │
//! │  │   in-order iteration, stats, invariant validation        │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Common (common/)                            │   │
//! │  │         Error + Result, NodeId, config constants         │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (NodeId, Error, config)
//! - [`index`] - Index structures (2-3 tree)
//! - [`catalog`] - Enemy records loaded from CSV into the tree
//!
//! # Quick Start
//! ```
//! use twothree::TwoThreeTree;
//!
//! let mut tree = TwoThreeTree::new();
//! for key in [5, 1, 4, 2, 3] {
//!     tree.insert(key, key * 100).unwrap();
//! }
//!
//! assert_eq!(tree.get(&4), Some(&400));
//! assert_eq!(tree.traverse(), vec![&100, &200, &300, &400, &500]);
//! assert!(tree.validate().is_ok());
//! ```
//!
//! # Logging
//! The crate emits [`tracing`] events (splits at `trace`, root growth and
//! rejected inserts at `debug`, catalog loading at `info`/`warn`) and never
//! installs a subscriber itself.

pub mod catalog;
pub mod common;
pub mod index;

// Re-export commonly used items at crate root for convenience
pub use common::{Error, NodeId, Result};

pub use catalog::{Enemy, EnemyCatalog, LoadReport};
pub use index::two_three::{Entry, InvariantViolation, StatsSnapshot, TreeStats, TwoThreeTree};
