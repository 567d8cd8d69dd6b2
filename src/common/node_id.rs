//! Node handle type.

use std::fmt;

/// Identifies a node slot in a tree's arena.
///
/// Wraps the node's index in the arena `Vec`. Child lists and parent links
/// hold these copyable handles rather than references.
///
/// A `NodeId` is only meaningful for the tree that handed it out, and a
/// released slot may later be handed out again for a different node.
///
/// # Example
/// ```
/// use twothree::NodeId;
///
/// let node_id = NodeId::new(5);
/// assert_eq!(node_id.0, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

impl NodeId {
    /// Create a new NodeId.
    #[inline]
    pub fn new(id: usize) -> Self {
        NodeId(id)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({})", self.0)
    }
}
