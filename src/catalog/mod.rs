//! Enemy catalog built on the 2-3 tree.
//!
//! The catalog loads enemy rows from a CSV file into a
//! [`TwoThreeTree`] keyed by `"<NAME> - <AREA>"`, and keeps a few summary
//! collections (known areas, weakness/resistance/immunity tags) alongside it
//! so callers can build filters without walking the whole tree.
//!
//! # Components
//! - [`Enemy`] - One record
//! - [`EnemyCatalog`] - The tree plus summaries, loading and search
//! - [`parse_row`] - Row-level parsing

mod enemy;
mod parser;

pub use enemy::{enemy_key, Enemy};
pub use parser::{parse_row, split_list, RowError};

use std::collections::BTreeSet;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::common::{Error, Result};
use crate::index::two_three::TwoThreeTree;

/// Outcome of loading a catalog file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadReport {
    /// Rows stored in the tree.
    pub inserted: usize,

    /// Rows whose key was already stored.
    pub duplicates: usize,

    /// Rows that were malformed or had no name.
    pub skipped: usize,
}

impl fmt::Display for LoadReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Load {{ inserted: {}, duplicates: {}, skipped: {} }}",
            self.inserted, self.duplicates, self.skipped
        )
    }
}

/// Enemies indexed by name and area, with derived summaries.
///
/// # Usage
/// ```
/// use twothree::catalog::EnemyCatalog;
///
/// let csv = "Enemy,Area,Type,Weaknesses,Resistances,Immunities,HP,Souls\n\
///            Mimic,Archives,Mimic,Fire,,,1000,2000\n";
///
/// let mut catalog = EnemyCatalog::new();
/// let report = catalog.load_reader(csv.as_bytes()).unwrap();
/// assert_eq!(report.inserted, 1);
///
/// let found = catalog.search("mimic");
/// assert_eq!(found[0].souls(), "2000");
/// ```
#[derive(Debug, Default)]
pub struct EnemyCatalog {
    tree: TwoThreeTree<String, Enemy>,

    /// Distinct areas in the order they were first seen.
    areas: Vec<String>,

    weaknesses: BTreeSet<String>,
    resistances: BTreeSet<String>,
    immunities: BTreeSet<String>,
}

impl EnemyCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Loading
    // ========================================================================

    /// Load every row of a catalog file.
    ///
    /// # Errors
    /// - `Error::Io` if the file cannot be opened or read
    pub fn load_csv(&mut self, path: impl AsRef<Path>) -> Result<LoadReport> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let report = self.load_reader(BufReader::new(file))?;
        info!(path = %path.display(), %report, "loaded enemy catalog");
        Ok(report)
    }

    /// Load rows from any buffered reader.
    ///
    /// The first line is the header and is skipped. Malformed rows, rows
    /// without a name and rows repeating a stored key are skipped and counted
    /// in the report; they never stop the load.
    ///
    /// # Errors
    /// - `Error::Io` if reading fails
    pub fn load_reader<R: BufRead>(&mut self, reader: R) -> Result<LoadReport> {
        let mut report = LoadReport::default();

        for (index, line) in reader.lines().enumerate().skip(1) {
            let line = line?;
            let line_number = index + 1;

            let enemy = match parse_row(&line) {
                Ok(enemy) => enemy,
                Err(err) => {
                    warn!(line = line_number, error = %err, "skipping malformed catalog row");
                    report.skipped += 1;
                    continue;
                }
            };

            match self.add(enemy) {
                Ok(()) => report.inserted += 1,
                Err(Error::KeyExists) => {
                    debug!(line = line_number, "skipping repeated enemy");
                    report.duplicates += 1;
                }
                Err(Error::InvalidKey) => {
                    warn!(line = line_number, "skipping catalog row without a name");
                    report.skipped += 1;
                }
                Err(err) => return Err(err),
            }
        }

        Ok(report)
    }

    /// Add one enemy and fold its area and tags into the summaries.
    ///
    /// A refused enemy leaves the summaries untouched, so a repeated row
    /// contributes no new area or tags even if its lists differ.
    ///
    /// # Errors
    /// - `Error::InvalidKey` if the enemy has a blank name
    /// - `Error::KeyExists` if an enemy with the same name and area is stored
    pub fn add(&mut self, enemy: Enemy) -> Result<()> {
        let area = enemy.area().to_string();
        let weaknesses = enemy.weaknesses().clone();
        let resistances = enemy.resistances().clone();
        let immunities = enemy.immunities().clone();

        self.tree.try_insert(enemy.key(), enemy)?;

        if !self.areas.contains(&area) {
            self.areas.push(area);
        }
        self.weaknesses.extend(weaknesses);
        self.resistances.extend(resistances);
        self.immunities.extend(immunities);
        Ok(())
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Look up one enemy by name and area, ignoring case.
    pub fn get(&self, name: &str, area: &str) -> Option<&Enemy> {
        let key = enemy_key(name, area)?;
        self.tree.get(key.as_str())
    }

    /// Find every enemy called `name` (ignoring case), one per known area.
    ///
    /// Results follow the order in which areas were first seen.
    pub fn search(&self, name: &str) -> Vec<&Enemy> {
        self.areas
            .iter()
            .filter_map(|area| self.get(name, area))
            .collect()
    }

    /// First enemy, in key order, whose name is exactly `name`.
    pub fn find_by_name(&self, name: &str) -> Option<&Enemy> {
        self.tree.values().find(|enemy| enemy.name() == name)
    }

    /// All enemies in key order.
    pub fn enemies(&self) -> Vec<&Enemy> {
        self.tree.traverse()
    }

    /// Distinct areas in first-seen order.
    pub fn areas(&self) -> &[String] {
        &self.areas
    }

    /// Every weakness tag seen, sorted.
    pub fn weaknesses(&self) -> &BTreeSet<String> {
        &self.weaknesses
    }

    /// Every resistance tag seen, sorted.
    pub fn resistances(&self) -> &BTreeSet<String> {
        &self.resistances
    }

    /// Every immunity tag seen, sorted.
    pub fn immunities(&self) -> &BTreeSet<String> {
        &self.immunities
    }

    pub fn tree(&self) -> &TwoThreeTree<String, Enemy> {
        &self.tree
    }

    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::config::CATALOG_HEADER;

    fn catalog_from(rows: &[&str]) -> (EnemyCatalog, LoadReport) {
        let mut text = String::from(CATALOG_HEADER);
        for row in rows {
            text.push('\n');
            text.push_str(row);
        }
        let mut catalog = EnemyCatalog::new();
        let report = catalog.load_reader(text.as_bytes()).unwrap();
        (catalog, report)
    }

    #[test]
    fn test_header_only() {
        let (catalog, report) = catalog_from(&[]);
        assert!(catalog.is_empty());
        assert_eq!(report, LoadReport::default());
    }

    #[test]
    fn test_load_counts() {
        let (catalog, report) = catalog_from(&[
            "Mimic,Archives,Mimic,Fire,,,1000,2000",
            "Mimic,Archives,Mimic,Fire,,,1000,2000",
            "broken row",
            ",Archives,Nameless,,,,1,1",
            "Crystal Lizard,Archives,Lizard,Strike,,,50,0",
        ]);

        assert_eq!(
            report,
            LoadReport {
                inserted: 2,
                duplicates: 1,
                skipped: 2,
            }
        );
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_summaries_follow_inserted_rows() {
        let (catalog, _) = catalog_from(&[
            "Ghru Grunt,Road of Sacrifices,Ghru,Fire;Strike,Poison,,418,173",
            "Lothric Knight,High Wall of Lothric,Knight,Lightning,Standard;Slash,Bleed,1000,900",
            "Ghru Leaper,Road of Sacrifices,Ghru,Fire,,Frost,300,150",
        ]);

        assert_eq!(catalog.areas(), &["Road of Sacrifices", "High Wall of Lothric"]);
        let weaknesses: Vec<&str> = catalog.weaknesses().iter().map(String::as_str).collect();
        assert_eq!(weaknesses, vec!["Fire", "Lightning", "Strike"]);
        assert_eq!(catalog.resistances().len(), 3);
        let immunities: Vec<&str> = catalog.immunities().iter().map(String::as_str).collect();
        assert_eq!(immunities, vec!["Bleed", "Frost"]);
    }

    #[test]
    fn test_repeated_row_adds_no_tags() {
        let (catalog, report) = catalog_from(&[
            "Mimic,Archives,Mimic,Fire,,,1000,2000",
            "Mimic,Archives,Mimic,Dark,Poison,,1000,2000",
        ]);

        assert_eq!(report.duplicates, 1);
        let weaknesses: Vec<&str> = catalog.weaknesses().iter().map(String::as_str).collect();
        assert_eq!(weaknesses, vec!["Fire"]);
        assert!(catalog.resistances().is_empty());
    }

    #[test]
    fn test_search_across_areas() {
        let (catalog, _) = catalog_from(&[
            "Mimic,Archives,Mimic,,,,1000,2000",
            "Mimic,Cathedral,Mimic,,,,900,1800",
            "Crystal Lizard,Archives,Lizard,,,,50,0",
        ]);

        let mimics = catalog.search("MiMiC");
        assert_eq!(mimics.len(), 2);
        assert_eq!(mimics[0].area(), "Archives");
        assert_eq!(mimics[1].area(), "Cathedral");
        assert!(catalog.search("Dragon").is_empty());
    }

    #[test]
    fn test_find_by_name_is_exact() {
        let (catalog, _) = catalog_from(&["Mimic,Cathedral,Mimic,,,,900,1800", "Mimic,Archives,Mimic,,,,1000,2000"]);

        // Key order puts "MIMIC - ARCHIVES" first.
        assert_eq!(catalog.find_by_name("Mimic").unwrap().area(), "Archives");
        assert!(catalog.find_by_name("mimic").is_none());
    }

    #[test]
    fn test_enemies_in_key_order() {
        let (catalog, _) = catalog_from(&[
            "Zombie,B,Hollow,,,,1,1",
            "Archer,C,Hollow,,,,1,1",
            "Archer,A,Hollow,,,,1,1",
        ]);

        let keys: Vec<String> = catalog.enemies().iter().filter_map(|e| e.key()).collect();
        assert_eq!(keys, vec!["ARCHER - A", "ARCHER - C", "ZOMBIE - B"]);
        catalog.tree().validate().unwrap();
    }

    #[test]
    fn test_add_rejects_blank_name() {
        let mut catalog = EnemyCatalog::new();
        let result = catalog.add(Enemy::new(" ", "Nowhere"));

        assert!(matches!(result, Err(Error::InvalidKey)));
        assert!(catalog.areas().is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let mut catalog = EnemyCatalog::new();
        let result = catalog.load_csv("/definitely/not/here.csv");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
