//! Enemy record stored in the catalog.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

use crate::common::config::{DEFAULT_ENEMY_TYPE, KEY_SEPARATOR, UNKNOWN_STAT};

/// One enemy and what is known about fighting it.
///
/// HP and souls are kept as free text because source data mixes exact
/// numbers, ranges and "Unknown".
///
/// Equality and ordering go through [`Enemy::key`] only, so two records for
/// the same name and area are equal even when their stats differ.
#[derive(Debug, Clone)]
pub struct Enemy {
    name: String,
    area: String,
    kind: String,
    weaknesses: BTreeSet<String>,
    resistances: BTreeSet<String>,
    immunities: BTreeSet<String>,
    hp: String,
    souls: String,
    drops: BTreeSet<String>,
}

/// Build the catalog key for an enemy name and area.
///
/// Keys are upper-cased so lookups ignore case. Returns `None` for a blank
/// name, which the tree rejects as an invalid key.
///
/// # Example
/// ```
/// use twothree::catalog::enemy_key;
///
/// assert_eq!(enemy_key("Hollow Soldier", "High Wall"), Some("HOLLOW SOLDIER - HIGH WALL".to_string()));
/// assert_eq!(enemy_key("  ", "High Wall"), None);
/// ```
pub fn enemy_key(name: &str, area: &str) -> Option<String> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some(format!("{}{}{}", name, KEY_SEPARATOR, area.trim()).to_uppercase())
}

impl Enemy {
    /// Create an enemy with only a name and area; everything else defaults.
    pub fn new(name: impl Into<String>, area: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            area: area.into(),
            kind: DEFAULT_ENEMY_TYPE.to_string(),
            weaknesses: BTreeSet::new(),
            resistances: BTreeSet::new(),
            immunities: BTreeSet::new(),
            hp: UNKNOWN_STAT.to_string(),
            souls: UNKNOWN_STAT.to_string(),
            drops: BTreeSet::new(),
        }
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn with_weaknesses<I, S>(mut self, weaknesses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.weaknesses.extend(weaknesses.into_iter().map(Into::into));
        self
    }

    pub fn with_resistances<I, S>(mut self, resistances: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.resistances.extend(resistances.into_iter().map(Into::into));
        self
    }

    pub fn with_immunities<I, S>(mut self, immunities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.immunities.extend(immunities.into_iter().map(Into::into));
        self
    }

    pub fn with_hp(mut self, hp: impl Into<String>) -> Self {
        self.hp = hp.into();
        self
    }

    pub fn with_souls(mut self, souls: impl Into<String>) -> Self {
        self.souls = souls.into();
        self
    }

    pub fn with_drops<I, S>(mut self, drops: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.drops.extend(drops.into_iter().map(Into::into));
        self
    }

    /// Catalog key, `"<NAME> - <AREA>"` upper-cased. See [`enemy_key`].
    pub fn key(&self) -> Option<String> {
        enemy_key(&self.name, &self.area)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn area(&self) -> &str {
        &self.area
    }

    /// Broad category (e.g. Hollow, Abyssal, Boss).
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn weaknesses(&self) -> &BTreeSet<String> {
        &self.weaknesses
    }

    pub fn resistances(&self) -> &BTreeSet<String> {
        &self.resistances
    }

    pub fn immunities(&self) -> &BTreeSet<String> {
        &self.immunities
    }

    pub fn hp(&self) -> &str {
        &self.hp
    }

    pub fn souls(&self) -> &str {
        &self.souls
    }

    pub fn drops(&self) -> &BTreeSet<String> {
        &self.drops
    }

    /// Record an item this enemy drops.
    pub fn add_drop(&mut self, item: impl Into<String>) {
        self.drops.insert(item.into());
    }

    /// True if this enemy is called `name`, ignoring case.
    pub fn is_same_enemy(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// True if this enemy's category is `kind`, ignoring case.
    pub fn is_type(&self, kind: &str) -> bool {
        self.kind.eq_ignore_ascii_case(kind)
    }
}

impl fmt::Display for Enemy {
    /// Writes the catalog key, or nothing for a nameless record.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key().as_deref().unwrap_or_default())
    }
}

impl PartialEq for Enemy {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Enemy {}

impl PartialOrd for Enemy {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Enemy {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}
