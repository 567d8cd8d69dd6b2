//! 2-3 search tree.
//!
//! A [`TwoThreeTree`] keeps every leaf at the same depth by growing from the
//! top: a full leaf splits, its middle entry moves into the parent, and if the
//! parent is full too the split repeats one level up, possibly creating a new
//! root.
//!
//! # Layout
//! ```text
//!            nodes: Vec<Node>                    free_list
//!  ┌────────┬────────┬────────┬────────┐      ┌──────────┐
//!  │ Node0  │ Node1  │ Node2  │ Node3  │ ...  │ Node2    │ (released by a split)
//!  └────────┴────────┴────────┴────────┘      └──────────┘
//!       ▲  parent: Option<NodeId>
//!       │  children: [NodeId; 0 | 2 | 3]
//!     root
//! ```
//!
//! Nodes refer to each other by [`NodeId`] only. Parent links are plain
//! handles used to walk upward while a split propagates; ownership stays with
//! the arena.

mod entry;
mod iter;
mod node;
mod split;
mod stats;
mod validate;

pub use entry::Entry;
pub use iter::{Iter, Keys, Values};
pub use stats::{StatsSnapshot, TreeStats};
pub use validate::InvariantViolation;

use std::borrow::Borrow;
use std::fmt;
use std::sync::atomic::Ordering;

use arrayvec::ArrayVec;
use tracing::{debug, trace};

use crate::common::{Error, NodeId, Result};
use node::{Node, Probe};
use split::{FourNode, Split};

/// An ordered map backed by a 2-3 tree.
///
/// Keys are unique; inserting an existing key is refused rather than
/// overwriting. There is no removal.
///
/// # Example
/// ```
/// use twothree::{Error, TwoThreeTree};
///
/// let mut tree = TwoThreeTree::new();
/// tree.insert(2, "two").unwrap();
/// tree.insert(1, "one").unwrap();
///
/// assert_eq!(tree.get(&1), Some(&"one"));
/// assert!(matches!(tree.insert(1, "uno"), Err(Error::KeyExists)));
/// assert_eq!(tree.traverse(), vec![&"one", &"two"]);
/// ```
pub struct TwoThreeTree<K, V> {
    /// Node arena. Indices are `NodeId`.
    nodes: Vec<Node<K, V>>,

    /// Slots released by splits, reused before the arena grows.
    free_list: Vec<NodeId>,

    /// Root node, or None while the tree is empty.
    root: Option<NodeId>,

    /// Number of stored entries.
    len: usize,

    /// Depth of every leaf (0 when empty).
    height: usize,

    stats: TreeStats,
}

impl<K, V> TwoThreeTree<K, V> {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free_list: Vec::new(),
            root: None,
            len: 0,
            height: 0,
            stats: TreeStats::new(),
        }
    }

    /// Number of stored entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of levels; every leaf sits at this depth.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of nodes currently in use (released slots excluded).
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len() - self.free_list.len()
    }

    #[inline]
    pub fn stats(&self) -> &TreeStats {
        &self.stats
    }

    /// Iterate over `(key, value)` pairs in ascending key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self)
    }

    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    /// Collect every value in ascending key order.
    ///
    /// This is the eager counterpart of [`values`](Self::values): the whole
    /// listing is built by a recursive in-order walk before returning.
    pub fn traverse(&self) -> Vec<&V> {
        let mut out = Vec::with_capacity(self.len);
        if let Some(root) = self.root {
            self.traverse_from(root, &mut out);
        }
        out
    }

    fn traverse_from<'a>(&'a self, id: NodeId, out: &mut Vec<&'a V>) {
        let node = self.node(id);
        if node.is_leaf() {
            out.extend(node.entries.iter().map(Entry::value));
            return;
        }
        for (slot, entry) in node.entries.iter().enumerate() {
            self.traverse_from(node.children[slot], out);
            out.push(entry.value());
        }
        self.traverse_from(node.children[node.entries.len()], out);
    }

    // ========================================================================
    // Arena management
    // ========================================================================

    #[inline]
    fn node(&self, id: NodeId) -> &Node<K, V> {
        &self.nodes[id.0]
    }

    #[inline]
    fn node_mut(&mut self, id: NodeId) -> &mut Node<K, V> {
        &mut self.nodes[id.0]
    }

    /// Store a node, reusing a released slot when one is available.
    fn allocate(&mut self, node: Node<K, V>) -> NodeId {
        match self.free_list.pop() {
            Some(id) => {
                self.nodes[id.0] = node;
                id
            }
            None => {
                self.nodes.push(node);
                NodeId::new(self.nodes.len() - 1)
            }
        }
    }

    /// Return an emptied node's slot to the free list.
    fn release(&mut self, id: NodeId) {
        let node = self.node_mut(id);
        debug_assert!(node.entries.is_empty() && node.children.is_empty());
        node.parent = None;
        self.free_list.push(id);
    }

    /// Point every child of `parent` back at it.
    fn adopt_children(&mut self, parent: NodeId) {
        for slot in 0..self.node(parent).children.len() {
            let child = self.node(parent).children[slot];
            self.node_mut(child).parent = Some(parent);
        }
    }
}

impl<K: Ord, V> TwoThreeTree<K, V> {
    // ========================================================================
    // Lookup
    // ========================================================================

    /// Look up the value stored under `key`.
    ///
    /// Returns `None` if the key is not stored.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let found = self.get_entry(key).map(Entry::value);
        let counter = if found.is_some() {
            &self.stats.lookup_hits
        } else {
            &self.stats.lookup_misses
        };
        counter.fetch_add(1, Ordering::Relaxed);
        found
    }

    /// Look up the whole entry stored under `key`.
    pub fn get_entry<Q>(&self, key: &Q) -> Option<&Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key)
            .map(|(id, index)| &self.node(id).entries[index])
    }

    /// Mutable access to the value stored under `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let (id, index) = self.find(key)?;
        Some(self.node_mut(id).entries[index].value_mut())
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(key).is_some()
    }

    /// Descend from the root to the node and entry index holding `key`.
    fn find<Q>(&self, key: &Q) -> Option<(NodeId, usize)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root?;
        loop {
            match self.node(current).probe(key) {
                Probe::Found(index) => return Some((current, index)),
                Probe::Descend(child) => current = child,
                Probe::Missing => return None,
            }
        }
    }

    // ========================================================================
    // Insertion
    // ========================================================================

    /// Insert a new entry.
    ///
    /// # Errors
    /// - `Error::KeyExists` if `key` is already stored; the stored value is
    ///   kept and the tree is unchanged.
    pub fn insert(&mut self, key: K, value: V) -> Result<()> {
        self.try_insert(Some(key), value)
    }

    /// Insert a new entry whose key may be missing.
    ///
    /// This is the entry point for producers that derive keys from data that
    /// can be absent, such as a blank CSV field.
    ///
    /// # Errors
    /// - `Error::InvalidKey` if `key` is `None`; the tree is unchanged.
    /// - `Error::KeyExists` if `key` is already stored; the tree is unchanged.
    pub fn try_insert(&mut self, key: Option<K>, value: V) -> Result<()> {
        let Some(key) = key else {
            self.stats.invalid_keys.fetch_add(1, Ordering::Relaxed);
            debug!("rejected insert without a key");
            return Err(Error::InvalidKey);
        };

        if self.contains_key(&key) {
            self.stats.duplicate_keys.fetch_add(1, Ordering::Relaxed);
            debug!(len = self.len, "rejected insert of an existing key");
            return Err(Error::KeyExists);
        }

        let entry = Entry::new(key, value);
        match self.root {
            None => {
                let root = self.allocate(Node::leaf(entry));
                self.root = Some(root);
                self.height = 1;
                trace!(node = %root, "planted root leaf");
            }
            Some(root) => {
                let leaf = self.find_leaf(root, entry.key());
                if self.node(leaf).is_two_node() {
                    self.node_mut(leaf).absorb(entry);
                    trace!(node = %leaf, "leaf absorbed entry");
                } else {
                    let (stored, _) = self.node_mut(leaf).take_contents();
                    let four = FourNode::from_leaf(stored, entry);
                    self.split_upward(leaf, four);
                }
            }
        }

        self.len += 1;
        self.stats.inserts.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    /// Follow the search path for `key` down to a leaf.
    fn find_leaf(&self, root: NodeId, key: &K) -> NodeId {
        let mut current = root;
        while !self.node(current).is_leaf() {
            let node = self.node(current);
            current = node.children[node.slot_for(key)];
        }
        current
    }

    /// Split `overflowing` and push the middle entry upward until some node
    /// has room for it or a new root is created.
    ///
    /// `overflowing` has already been emptied into `four`; its slot is
    /// released once its replacement halves are attached.
    fn split_upward(&mut self, mut overflowing: NodeId, mut four: FourNode<K, V>) {
        loop {
            let parent = self.node(overflowing).parent;
            let Split {
                left,
                promoted,
                right,
            } = four.split();

            let counter = if left.is_leaf() {
                &self.stats.leaf_splits
            } else {
                &self.stats.internal_splits
            };
            counter.fetch_add(1, Ordering::Relaxed);

            let left = self.allocate(left);
            self.adopt_children(left);
            let right = self.allocate(right);
            self.adopt_children(right);
            trace!(node = %overflowing, %left, %right, "split four-node");

            let Some(parent) = parent else {
                self.release(overflowing);
                self.grow_root(left, promoted, right);
                return;
            };

            let slot = self.node(parent).slot_of(overflowing);
            self.release(overflowing);

            if self.node(parent).is_two_node() {
                let node = self.node_mut(parent);
                node.entries.insert(slot, promoted);
                node.children[slot] = left;
                node.children.insert(slot + 1, right);
                self.adopt_children(parent);
                trace!(node = %parent, "parent absorbed promoted entry");
                return;
            }

            let (stored, children) = self.node_mut(parent).take_contents();
            four = FourNode::from_internal(stored, children, slot, promoted, left, right);
            overflowing = parent;
        }
    }

    /// Put a new root above the two halves of a split root.
    fn grow_root(&mut self, left: NodeId, promoted: Entry<K, V>, right: NodeId) {
        let mut children = ArrayVec::new();
        children.push(left);
        children.push(right);

        let root = self.allocate(Node::two_node(promoted, children));
        self.adopt_children(root);
        self.root = Some(root);
        self.height += 1;
        self.stats.root_splits.fetch_add(1, Ordering::Relaxed);
        debug!(node = %root, height = self.height, "tree grew a new root");
    }
}

impl<K, V> Default for TwoThreeTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for TwoThreeTree<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Builds a tree from pairs; later duplicates of a key are dropped.
impl<K: Ord, V> FromIterator<(K, V)> for TwoThreeTree<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

/// Inserts each pair; pairs whose key is already stored are dropped.
impl<K: Ord, V> Extend<(K, V)> for TwoThreeTree<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            // KeyExists is the only possible error and means "keep the first".
            let _ = self.insert(key, value);
        }
    }
}
