//! 2-3 Tree Tests
//!
//! Scenario tests driving the tree through its public API only.

mod common;

use common::{build_checked, init_tracing, REFERENCE_KEYS};
use twothree::{Error, TwoThreeTree};

// ============================================================================
// Reference sequence
// ============================================================================

/// The reference insertion order traverses back to 0..=40.
#[test]
fn test_reference_sequence_traverses_in_order() {
    init_tracing();
    let tree = build_checked(&REFERENCE_KEYS);

    let expected: Vec<String> = (0..=40).map(|k| format!("value-{}", k)).collect();
    let actual: Vec<String> = tree.traverse().into_iter().cloned().collect();
    assert_eq!(actual, expected);
    assert_eq!(tree.len(), 41);
}

#[test]
fn test_reference_sequence_lookups() {
    let tree = build_checked(&REFERENCE_KEYS);

    for key in 0..=40 {
        assert_eq!(tree.get(&key), Some(&format!("value-{}", key)));
    }
    assert_eq!(tree.get(&41), None);
    assert_eq!(tree.get(&1000), None);
}

#[test]
fn test_reference_sequence_grows_several_levels() {
    let tree = build_checked(&REFERENCE_KEYS);
    let snapshot = tree.stats().snapshot();

    // 41 entries need at least 4 levels of 3-nodes and at most 5 of 2-nodes.
    assert!((4..=5).contains(&tree.height()), "height {}", tree.height());
    assert_eq!(snapshot.root_splits as usize, tree.height() - 1);
    assert!(snapshot.leaf_splits > 0);
    assert!(snapshot.internal_splits > 0);
    assert_eq!(snapshot.inserts, 41);
}

#[test]
fn test_reference_sequence_with_duplicates() {
    let mut tree = build_checked(&REFERENCE_KEYS);
    let before: Vec<String> = tree.traverse().into_iter().cloned().collect();

    for &key in REFERENCE_KEYS.iter().rev() {
        let result = tree.insert(key, "overwritten".to_string());
        assert!(matches!(result, Err(Error::KeyExists)));
    }

    let after: Vec<String> = tree.traverse().into_iter().cloned().collect();
    assert_eq!(before, after);
    assert_eq!(tree.len(), 41);
    assert_eq!(tree.stats().snapshot().duplicate_keys, 41);
    tree.validate().unwrap();
}

// ============================================================================
// Insertion orders
// ============================================================================

#[test]
fn test_ascending_inserts() {
    let keys: Vec<u32> = (0..500).collect();
    let tree = build_checked(&keys);

    let traversed: Vec<u32> = tree.keys().copied().collect();
    assert_eq!(traversed, keys);
}

#[test]
fn test_descending_inserts() {
    let keys: Vec<u32> = (0..500).rev().collect();
    let tree = build_checked(&keys);

    let traversed: Vec<u32> = tree.keys().copied().collect();
    assert_eq!(traversed, (0..500).collect::<Vec<_>>());
}

#[test]
fn test_interleaved_inserts() {
    // Alternate from both ends towards the middle.
    let mut keys = Vec::new();
    let (mut low, mut high) = (0u32, 299u32);
    while low <= high {
        keys.push(low);
        if low != high {
            keys.push(high);
        }
        low += 1;
        high -= 1;
    }

    let tree = build_checked(&keys);
    assert_eq!(tree.len(), 300);
    assert_eq!(tree.keys().copied().collect::<Vec<_>>(), (0..300).collect::<Vec<_>>());
}

#[test]
fn test_height_stays_logarithmic() {
    let keys: Vec<u32> = (0..3_000).collect();
    let tree: TwoThreeTree<u32, ()> = keys.iter().map(|&k| (k, ())).collect();

    // A 2-3 tree of height h holds at least 2^h - 1 entries.
    let bound = (tree.len() as f64 + 1.0).log2().floor() as usize;
    assert!(tree.height() <= bound, "height {} > {}", tree.height(), bound);
    tree.validate().unwrap();
}

// ============================================================================
// Rejections
// ============================================================================

#[test]
fn test_missing_key_leaves_tree_unchanged() {
    let mut tree = build_checked(&[3, 1, 2]);

    let result = tree.try_insert(None, "nothing".to_string());
    assert!(matches!(result, Err(Error::InvalidKey)));
    assert_eq!(tree.traverse().len(), 3);
    tree.validate().unwrap();
}

#[test]
fn test_try_insert_with_key() {
    let mut tree: TwoThreeTree<String, u8> = TwoThreeTree::new();
    tree.try_insert(Some("k".to_string()), 1).unwrap();
    assert_eq!(tree.get("k"), Some(&1));
}

#[test]
fn test_empty_tree_lookups() {
    let tree: TwoThreeTree<String, u8> = TwoThreeTree::new();
    assert_eq!(tree.get("anything"), None);
    assert_eq!(tree.get(""), None);
    assert!(!tree.contains_key("anything"));
    assert_eq!(tree.iter().next(), None);
}

// ============================================================================
// Value access
// ============================================================================

#[test]
fn test_values_can_be_replaced_in_place() {
    let mut tree = build_checked(&REFERENCE_KEYS);

    for key in (0..=40).step_by(5) {
        *tree.get_mut(&key).unwrap() = format!("updated-{}", key);
    }

    assert_eq!(tree.get(&10).map(String::as_str), Some("updated-10"));
    assert_eq!(tree.get(&11).map(String::as_str), Some("value-11"));
    tree.validate().unwrap();
}
