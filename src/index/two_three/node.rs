//! Node - one slot in the tree's arena.
//!
//! A [`Node`] is either a 2-node (one entry) or a 3-node (two entries), and
//! either a leaf (no children) or internal (`entries + 1` children). The shape
//! is always read off the lengths of `entries` and `children`.

use std::borrow::Borrow;

use arrayvec::ArrayVec;

use super::Entry;
use crate::common::config::{MAX_CHILDREN, MAX_ENTRIES};
use crate::common::NodeId;

/// Outcome of looking for a key inside a single node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Probe {
    /// The key is stored in this node at the given entry index.
    Found(usize),
    /// The key can only be in this child's subtree.
    Descend(NodeId),
    /// This is a leaf and the key is not in it.
    Missing,
}

/// A node in the 2-3 tree.
///
/// `parent` is a handle into the same arena, never an owner. It is `None`
/// for the root and for released slots waiting on the free list.
#[derive(Debug)]
pub(crate) struct Node<K, V> {
    pub(crate) entries: ArrayVec<Entry<K, V>, MAX_ENTRIES>,
    pub(crate) children: ArrayVec<NodeId, MAX_CHILDREN>,
    pub(crate) parent: Option<NodeId>,
}

impl<K, V> Node<K, V> {
    /// Create a parentless leaf holding one entry.
    pub(crate) fn leaf(entry: Entry<K, V>) -> Self {
        let mut entries = ArrayVec::new();
        entries.push(entry);
        Self {
            entries,
            children: ArrayVec::new(),
            parent: None,
        }
    }

    /// Create a parentless 2-node over the given children (empty for a leaf).
    pub(crate) fn two_node(entry: Entry<K, V>, children: ArrayVec<NodeId, MAX_CHILDREN>) -> Self {
        debug_assert!(children.is_empty() || children.len() == 2);
        let mut node = Self::leaf(entry);
        node.children = children;
        node
    }

    #[inline]
    pub(crate) fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// A 2-node holds a single entry and can absorb one more.
    #[inline]
    pub(crate) fn is_two_node(&self) -> bool {
        self.entries.len() == 1
    }

    /// Child slot whose subtree covers `key`.
    ///
    /// Counts the entries ordered strictly below `key`: 0 means the left
    /// child, 1 the middle child, 2 the right child of a 3-node.
    pub(crate) fn slot_for<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.entries
            .partition_point(|entry| Borrow::<Q>::borrow(entry.key()) < key)
    }

    pub(crate) fn probe<Q>(&self, key: &Q) -> Probe
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let slot = self.slot_for(key);
        match self.entries.get(slot) {
            Some(entry) if Borrow::<Q>::borrow(entry.key()) == key => Probe::Found(slot),
            _ if self.is_leaf() => Probe::Missing,
            _ => Probe::Descend(self.children[slot]),
        }
    }

    /// Add an entry to a 2-node in key order, turning it into a 3-node.
    pub(crate) fn absorb(&mut self, entry: Entry<K, V>)
    where
        K: Ord,
    {
        debug_assert!(self.is_two_node(), "absorb called on a full node");
        let slot = self.slot_for(entry.key());
        self.entries.insert(slot, entry);
    }

    /// Slot in `children` that holds `child`.
    ///
    /// # Panics
    /// Panics if `child` is not attached here, which means the parent links
    /// are corrupt.
    pub(crate) fn slot_of(&self, child: NodeId) -> usize {
        match self.children.iter().position(|&c| c == child) {
            Some(slot) => slot,
            None => panic!("{child} is not a child of the node it names as parent"),
        }
    }

    /// Move the entries and children out, leaving an empty husk.
    ///
    /// `parent` is left untouched so the caller can still walk upward.
    pub(crate) fn take_contents(
        &mut self,
    ) -> (
        ArrayVec<Entry<K, V>, MAX_ENTRIES>,
        ArrayVec<NodeId, MAX_CHILDREN>,
    ) {
        (
            std::mem::take(&mut self.entries),
            std::mem::take(&mut self.children),
        )
    }
}
