//! Structural invariant checks.
//!
//! [`TwoThreeTree::validate`] walks every reachable node and reports the first
//! broken invariant it finds. A failure is always a bug in the tree, never a
//! consequence of caller input.

use std::collections::HashSet;

use thiserror::Error;

use super::TwoThreeTree;
use crate::common::NodeId;

/// A broken structural invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("{node} holds {count} entries, expected 1 or 2")]
    EntryCount { node: NodeId, count: usize },

    #[error("{node} holds {entries} entries but {children} children")]
    ChildCount {
        node: NodeId,
        entries: usize,
        children: usize,
    },

    #[error("{node} has entries out of order or a key outside its subtree range")]
    Unordered { node: NodeId },

    #[error("{node} links to parent {found:?}, expected {expected:?}")]
    ParentLink {
        node: NodeId,
        expected: Option<NodeId>,
        found: Option<NodeId>,
    },

    #[error("leaf {node} sits at depth {depth}, other leaves at depth {expected}")]
    UnevenLeaves {
        node: NodeId,
        depth: usize,
        expected: usize,
    },

    #[error("{node} is reachable but sits on the free list")]
    Released { node: NodeId },

    #[error("{node} is reachable from more than one parent")]
    Shared { node: NodeId },

    #[error("tree reports {reported} {what}, found {found}")]
    Count {
        what: &'static str,
        reported: usize,
        found: usize,
    },
}

/// Running totals gathered by the recursive walk.
#[derive(Default)]
struct Walk {
    entries: usize,
    nodes: usize,
    leaf_depth: Option<usize>,
    seen: HashSet<NodeId>,
}

impl<K: Ord, V> TwoThreeTree<K, V> {
    /// Check every structural invariant of the tree.
    ///
    /// Verifies node shapes, key ordering within and across nodes, equal leaf
    /// depth, parent links, and that the cached length, height and live node
    /// count agree with what is actually reachable.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        let released: HashSet<NodeId> = self.free_list.iter().copied().collect();
        let mut walk = Walk::default();

        if let Some(root) = self.root {
            self.validate_node(root, None, None, None, 1, &released, &mut walk)?;
        }

        let height = walk.leaf_depth.unwrap_or(0);
        let counts = [
            ("entries", self.len, walk.entries),
            ("height", self.height, height),
            ("live nodes", self.node_count(), walk.nodes),
        ];
        for (what, reported, found) in counts {
            if reported != found {
                return Err(InvariantViolation::Count {
                    what,
                    reported,
                    found,
                });
            }
        }
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    fn validate_node(
        &self,
        id: NodeId,
        parent: Option<NodeId>,
        lower: Option<&K>,
        upper: Option<&K>,
        depth: usize,
        released: &HashSet<NodeId>,
        walk: &mut Walk,
    ) -> Result<(), InvariantViolation> {
        if released.contains(&id) {
            return Err(InvariantViolation::Released { node: id });
        }
        if !walk.seen.insert(id) {
            return Err(InvariantViolation::Shared { node: id });
        }

        let node = self.node(id);
        if node.parent != parent {
            return Err(InvariantViolation::ParentLink {
                node: id,
                expected: parent,
                found: node.parent,
            });
        }

        let count = node.entries.len();
        if count == 0 {
            return Err(InvariantViolation::EntryCount { node: id, count });
        }
        if !node.is_leaf() && node.children.len() != count + 1 {
            return Err(InvariantViolation::ChildCount {
                node: id,
                entries: count,
                children: node.children.len(),
            });
        }

        let keys: Vec<&K> = node.entries.iter().map(|entry| entry.key()).collect();
        let in_order = keys.windows(2).all(|pair| pair[0] < pair[1]);
        let above_lower = lower.map_or(true, |bound| bound < keys[0]);
        let below_upper = upper.map_or(true, |bound| keys[count - 1] < bound);
        if !(in_order && above_lower && below_upper) {
            return Err(InvariantViolation::Unordered { node: id });
        }

        walk.entries += count;
        walk.nodes += 1;

        if node.is_leaf() {
            return match walk.leaf_depth {
                Some(expected) if expected != depth => Err(InvariantViolation::UnevenLeaves {
                    node: id,
                    depth,
                    expected,
                }),
                _ => {
                    walk.leaf_depth = Some(depth);
                    Ok(())
                }
            };
        }

        for (slot, &child) in node.children.iter().enumerate() {
            let child_lower = if slot == 0 { lower } else { Some(keys[slot - 1]) };
            let child_upper = keys.get(slot).copied().or(upper);
            self.validate_node(child, Some(id), child_lower, child_upper, depth + 1, released, walk)?;
        }
        Ok(())
    }
}
