//! Configuration constants for twothree.

/// Maximum number of entries a persisted node may hold (a 3-node).
pub const MAX_ENTRIES: usize = 2;

/// Maximum number of children a persisted node may hold.
///
/// Always one more than [`MAX_ENTRIES`]: an internal node with `n` entries
/// has exactly `n + 1` children.
pub const MAX_CHILDREN: usize = MAX_ENTRIES + 1;

/// Number of entries in the transient four-node formed during a split.
pub const FOUR_NODE_ENTRIES: usize = MAX_ENTRIES + 1;

/// Number of child slots in the transient four-node.
pub const FOUR_NODE_CHILDREN: usize = MAX_CHILDREN + 1;

// ============================================================================
// CATALOG CSV LAYOUT
// ============================================================================

/// Header row expected at the top of a catalog file.
///
/// The header is skipped, not validated, so files with slightly different
/// column titles still load as long as the column order matches.
pub const CATALOG_HEADER: &str = "Enemy,Area,Type,Weaknesses,Resistances,Immunities,HP,Souls";

/// Minimum number of fields in a catalog row. Shorter rows are skipped.
pub const CATALOG_COLUMNS: usize = 8;

/// Separates the fields of a catalog row.
pub const FIELD_DELIMITER: char = ',';

/// Separates the items of a list field (weaknesses, resistances, immunities).
pub const LIST_DELIMITER: char = ';';

/// Joins an enemy's name and area into its catalog key.
pub const KEY_SEPARATOR: &str = " - ";

// ============================================================================
// RECORD DEFAULTS
// ============================================================================

/// Type given to enemies built without one.
pub const DEFAULT_ENEMY_TYPE: &str = "Generic Enemy";

/// Placeholder for HP and souls when the value is not known.
pub const UNKNOWN_STAT: &str = "Unknown";
