//! Four-node formation and splitting.
//!
//! A four-node is what an overflowing 3-node would look like if it could hold
//! one more entry: three entries and, for internal nodes, four children. It
//! only ever lives on the stack for the duration of one insert and is split
//! right away into two 2-nodes plus the middle entry, which moves up a level.

use arrayvec::ArrayVec;

use super::node::Node;
use super::Entry;
use crate::common::config::{FOUR_NODE_CHILDREN, FOUR_NODE_ENTRIES, MAX_CHILDREN, MAX_ENTRIES};
use crate::common::NodeId;

/// Transient overflow shape: three ordered entries, zero or four children.
#[derive(Debug)]
pub(crate) struct FourNode<K, V> {
    entries: ArrayVec<Entry<K, V>, FOUR_NODE_ENTRIES>,
    children: ArrayVec<NodeId, FOUR_NODE_CHILDREN>,
}

/// Result of splitting a four-node.
///
/// Both halves are parentless 2-nodes; the caller attaches them.
#[derive(Debug)]
pub(crate) struct Split<K, V> {
    pub(crate) left: Node<K, V>,
    pub(crate) promoted: Entry<K, V>,
    pub(crate) right: Node<K, V>,
}

impl<K: Ord, V> FourNode<K, V> {
    /// Overflow of a full leaf: its two entries plus the one being inserted.
    pub(crate) fn from_leaf(stored: ArrayVec<Entry<K, V>, MAX_ENTRIES>, entry: Entry<K, V>) -> Self {
        let mut entries: ArrayVec<_, FOUR_NODE_ENTRIES> = stored.into_iter().collect();
        entries.push(entry);
        entries.sort_by(|a, b| a.key().cmp(b.key()));

        Self {
            entries,
            children: ArrayVec::new(),
        }
    }

    /// Overflow of a full internal node receiving a promoted entry.
    ///
    /// `slot` is the position of the child that split; `left` and `right`
    /// take over that slot and the one after it.
    pub(crate) fn from_internal(
        stored: ArrayVec<Entry<K, V>, MAX_ENTRIES>,
        children: ArrayVec<NodeId, MAX_CHILDREN>,
        slot: usize,
        promoted: Entry<K, V>,
        left: NodeId,
        right: NodeId,
    ) -> Self {
        debug_assert_eq!(children.len(), MAX_CHILDREN);

        let mut entries: ArrayVec<_, FOUR_NODE_ENTRIES> = stored.into_iter().collect();
        entries.insert(slot, promoted);
        debug_assert!(entries.windows(2).all(|pair| pair[0].key() < pair[1].key()));

        let mut slots: ArrayVec<_, FOUR_NODE_CHILDREN> = children.into_iter().collect();
        slots[slot] = left;
        slots.insert(slot + 1, right);

        Self {
            entries,
            children: slots,
        }
    }
}

impl<K, V> FourNode<K, V> {
    /// Split into `lo` (with the first two children), `mid` and `hi` (with
    /// the last two children).
    pub(crate) fn split(self) -> Split<K, V> {
        let mut entries = self.entries.into_iter();
        let mut children = self.children.into_iter();

        // A four-node always carries exactly three entries.
        let (Some(lo), Some(mid), Some(hi)) = (entries.next(), entries.next(), entries.next()) else {
            unreachable!("four-node without three entries");
        };

        let left_children: ArrayVec<NodeId, MAX_CHILDREN> = children.by_ref().take(2).collect();
        let right_children: ArrayVec<NodeId, MAX_CHILDREN> = children.collect();

        Split {
            left: Node::two_node(lo, left_children),
            promoted: mid,
            right: Node::two_node(hi, right_children),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored(keys: &[i32]) -> ArrayVec<Entry<i32, i32>, MAX_ENTRIES> {
        keys.iter().map(|&k| Entry::new(k, k * 10)).collect()
    }

    fn keys(node: &Node<i32, i32>) -> Vec<i32> {
        node.entries.iter().map(|e| *e.key()).collect()
    }

    #[test]
    fn test_leaf_overflow_sorts_entries() {
        for new_key in [1, 15, 30] {
            let four = FourNode::from_leaf(stored(&[10, 20]), Entry::new(new_key, 0));
            let split = four.split();

            let triple = [
                *split.left.entries[0].key(),
                *split.promoted.key(),
                *split.right.entries[0].key(),
            ];
            assert!(triple[0] < triple[1] && triple[1] < triple[2]);
            assert!(triple.contains(&new_key));

            assert!(split.left.is_leaf());
            assert!(split.right.is_leaf());
        }
    }

    #[test]
    fn test_leaf_split_middle_is_promoted() {
        let split = FourNode::from_leaf(stored(&[10, 30]), Entry::new(20, 200)).split();

        assert_eq!(keys(&split.left), vec![10]);
        assert_eq!(*split.promoted.key(), 20);
        assert_eq!(*split.promoted.value(), 200);
        assert_eq!(keys(&split.right), vec![30]);
    }

    #[test]
    fn test_internal_split_distributes_children() {
        let children: ArrayVec<NodeId, MAX_CHILDREN> =
            [NodeId::new(1), NodeId::new(2), NodeId::new(3)].into_iter().collect();

        // Child in slot 1 (between 10 and 30) split around 20 into nodes 8 and 9.
        let four = FourNode::from_internal(
            stored(&[10, 30]),
            children,
            1,
            Entry::new(20, 200),
            NodeId::new(8),
            NodeId::new(9),
        );
        let split = four.split();

        assert_eq!(keys(&split.left), vec![10]);
        assert_eq!(*split.promoted.key(), 20);
        assert_eq!(keys(&split.right), vec![30]);
        assert_eq!(split.left.children.as_slice(), &[NodeId::new(1), NodeId::new(8)]);
        assert_eq!(split.right.children.as_slice(), &[NodeId::new(9), NodeId::new(3)]);
        assert_eq!(split.left.parent, None);
        assert_eq!(split.right.parent, None);
    }

    #[test]
    fn test_internal_split_from_left_edge() {
        let children: ArrayVec<NodeId, MAX_CHILDREN> =
            [NodeId::new(1), NodeId::new(2), NodeId::new(3)].into_iter().collect();

        let split = FourNode::from_internal(
            stored(&[10, 30]),
            children,
            0,
            Entry::new(5, 50),
            NodeId::new(8),
            NodeId::new(9),
        )
        .split();

        assert_eq!(keys(&split.left), vec![5]);
        assert_eq!(*split.promoted.key(), 10);
        assert_eq!(keys(&split.right), vec![30]);
        assert_eq!(split.left.children.as_slice(), &[NodeId::new(8), NodeId::new(9)]);
        assert_eq!(split.right.children.as_slice(), &[NodeId::new(2), NodeId::new(3)]);
    }
}
