//! Key/value payload stored in tree nodes.

/// One key/value pair held by a [`TwoThreeTree`](super::TwoThreeTree).
///
/// The key is fixed once the entry is built; the value can be read or swapped.
/// Entries compare only through their keys, and the tree is what guarantees
/// key uniqueness.
///
/// # Example
/// ```
/// use twothree::Entry;
///
/// let mut entry = Entry::new(7, "seven");
/// assert_eq!(*entry.key(), 7);
/// assert_eq!(entry.set_value("SEVEN"), "seven");
/// assert_eq!(*entry.value(), "SEVEN");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<K, V> {
    key: K,
    value: V,
}

impl<K, V> Entry<K, V> {
    /// Create a new entry.
    #[inline]
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    #[inline]
    pub fn value(&self) -> &V {
        &self.value
    }

    #[inline]
    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Replace the value, returning the previous one.
    pub fn set_value(&mut self, value: V) -> V {
        std::mem::replace(&mut self.value, value)
    }

    /// Split the entry back into its key and value.
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}
