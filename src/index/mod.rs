//! Index structures.
//!
//! Currently implements:
//! - [`two_three`] - In-memory 2-3 search tree with insert, lookup and
//!   ordered traversal

pub mod two_three;
