//! Tree statistics tracking.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Statistics tracked by a [`TwoThreeTree`](super::TwoThreeTree).
///
/// All fields are atomic so lookups can be counted through `&self`.
///
/// Counters are independent of each other and of the tree's contents, so
/// every update and read uses `Ordering::Relaxed`. A snapshot taken while
/// another thread reads the tree may mix counts from slightly different
/// moments.
///
/// # Example
/// ```
/// use twothree::TreeStats;
/// use std::sync::atomic::Ordering;
///
/// let stats = TreeStats::new();
/// stats.lookup_hits.fetch_add(1, Ordering::Relaxed);
/// assert_eq!(stats.lookup_hits.load(Ordering::Relaxed), 1);
/// ```
#[derive(Debug)]
pub struct TreeStats {
    /// Number of `get` calls that found their key.
    pub lookup_hits: AtomicU64,

    /// Number of `get` calls that did not.
    pub lookup_misses: AtomicU64,

    /// Number of entries stored.
    pub inserts: AtomicU64,

    /// Number of inserts refused because the key was already stored.
    pub duplicate_keys: AtomicU64,

    /// Number of inserts refused because no key was given.
    pub invalid_keys: AtomicU64,

    /// Number of four-nodes split at leaf level.
    pub leaf_splits: AtomicU64,

    /// Number of four-nodes split above leaf level.
    pub internal_splits: AtomicU64,

    /// Number of times a split created a new root.
    pub root_splits: AtomicU64,
}

impl TreeStats {
    /// Create a new stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self {
            lookup_hits: AtomicU64::new(0),
            lookup_misses: AtomicU64::new(0),
            inserts: AtomicU64::new(0),
            duplicate_keys: AtomicU64::new(0),
            invalid_keys: AtomicU64::new(0),
            leaf_splits: AtomicU64::new(0),
            internal_splits: AtomicU64::new(0),
            root_splits: AtomicU64::new(0),
        }
    }

    /// Fraction of lookups that found their key (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        self.snapshot().hit_rate()
    }

    /// Get a snapshot of current statistics.
    ///
    /// This returns a non-atomic copy for display/logging.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            lookup_hits: self.lookup_hits.load(Ordering::Relaxed),
            lookup_misses: self.lookup_misses.load(Ordering::Relaxed),
            inserts: self.inserts.load(Ordering::Relaxed),
            duplicate_keys: self.duplicate_keys.load(Ordering::Relaxed),
            invalid_keys: self.invalid_keys.load(Ordering::Relaxed),
            leaf_splits: self.leaf_splits.load(Ordering::Relaxed),
            internal_splits: self.internal_splits.load(Ordering::Relaxed),
            root_splits: self.root_splits.load(Ordering::Relaxed),
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&self) {
        self.lookup_hits.store(0, Ordering::Relaxed);
        self.lookup_misses.store(0, Ordering::Relaxed);
        self.inserts.store(0, Ordering::Relaxed);
        self.duplicate_keys.store(0, Ordering::Relaxed);
        self.invalid_keys.store(0, Ordering::Relaxed);
        self.leaf_splits.store(0, Ordering::Relaxed);
        self.internal_splits.store(0, Ordering::Relaxed);
        self.root_splits.store(0, Ordering::Relaxed);
    }
}

impl Default for TreeStats {
    fn default() -> Self {
        Self::new()
    }
}

/// A point-in-time snapshot of tree statistics.
///
/// Unlike `TreeStats`, this is not atomic and can be safely
/// printed, compared, etc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatsSnapshot {
    pub lookup_hits: u64,
    pub lookup_misses: u64,
    pub inserts: u64,
    pub duplicate_keys: u64,
    pub invalid_keys: u64,
    pub leaf_splits: u64,
    pub internal_splits: u64,
    pub root_splits: u64,
}

impl StatsSnapshot {
    /// Fraction of lookups that found their key (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.lookup_hits + self.lookup_misses;
        if total == 0 {
            0.0
        } else {
            self.lookup_hits as f64 / total as f64
        }
    }

    /// Total number of four-node splits.
    pub fn splits(&self) -> u64 {
        self.leaf_splits + self.internal_splits
    }
}

impl fmt::Display for StatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ inserts: {}, rejected: {}, splits: {}, root_splits: {}, hit_rate: {:.2}% }}",
            self.inserts,
            self.duplicate_keys + self.invalid_keys,
            self.splits(),
            self.root_splits,
            self.hit_rate() * 100.0
        )
    }
}
