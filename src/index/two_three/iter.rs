//! Lazy in-order iteration.

use std::iter::FusedIterator;

use super::TwoThreeTree;
use crate::common::NodeId;

/// In-order iterator over a tree's entries, ascending by key.
///
/// Walks the arena with an explicit stack of `(node, step)` frames. For an
/// internal node with `n` entries, even steps `0, 2, .., 2n` descend into
/// children and odd steps yield entries; a leaf just yields its entries.
///
/// Created by [`TwoThreeTree::iter`]. Calling `iter` again restarts from the
/// smallest key.
pub struct Iter<'a, K, V> {
    tree: &'a TwoThreeTree<K, V>,
    stack: Vec<(NodeId, usize)>,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(tree: &'a TwoThreeTree<K, V>) -> Self {
        let mut stack = Vec::with_capacity(tree.height());
        if let Some(root) = tree.root {
            stack.push((root, 0));
        }
        Self {
            tree,
            stack,
            remaining: tree.len(),
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        loop {
            let frame = self.stack.last_mut()?;
            let (id, step) = *frame;
            let node = tree.node(id);

            if node.is_leaf() {
                if let Some(entry) = node.entries.get(step) {
                    frame.1 += 1;
                    self.remaining -= 1;
                    return Some((entry.key(), entry.value()));
                }
                self.stack.pop();
                continue;
            }

            if step > 2 * node.entries.len() {
                self.stack.pop();
                continue;
            }

            frame.1 += 1;
            if step % 2 == 0 {
                self.stack.push((node.children[step / 2], 0));
            } else {
                let entry = &node.entries[step / 2];
                self.remaining -= 1;
                return Some((entry.key(), entry.value()));
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// Iterator over a tree's keys, ascending. Created by [`TwoThreeTree::keys`].
pub struct Keys<'a, K, V> {
    pub(crate) inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

/// Iterator over a tree's values, in key order. Created by [`TwoThreeTree::values`].
pub struct Values<'a, K, V> {
    pub(crate) inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}

impl<K, V> FusedIterator for Values<'_, K, V> {}

impl<'a, K, V> IntoIterator for &'a TwoThreeTree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
