//! Catalog row parsing.
//!
//! Rows follow [`CATALOG_HEADER`](crate::common::config::CATALOG_HEADER):
//! `Enemy,Area,Type,Weaknesses,Resistances,Immunities,HP,Souls`, with the
//! three list columns holding `;`-separated items. Fields are split on plain
//! commas; quoting is not supported. Empty fields at the end of a row are
//! dropped before the column count is checked, so a row whose last columns
//! are blank counts as short.

use thiserror::Error;

use super::Enemy;
use crate::common::config::{CATALOG_COLUMNS, FIELD_DELIMITER, LIST_DELIMITER};

/// Why a row could not be turned into an [`Enemy`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("row has {found} fields, expected at least {expected}")]
    TooFewFields { found: usize, expected: usize },
}

/// Parse one data row.
///
/// Extra fields past the eighth are ignored. A blank name is accepted here;
/// the resulting enemy simply has no key.
pub fn parse_row(line: &str) -> Result<Enemy, RowError> {
    let mut fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    while fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }
    if fields.len() < CATALOG_COLUMNS {
        return Err(RowError::TooFewFields {
            found: fields.len(),
            expected: CATALOG_COLUMNS,
        });
    }

    let enemy = Enemy::new(fields[0].trim(), fields[1].trim())
        .with_kind(fields[2].trim())
        .with_weaknesses(split_list(fields[3]))
        .with_resistances(split_list(fields[4]))
        .with_immunities(split_list(fields[5]))
        .with_hp(fields[6].trim())
        .with_souls(fields[7].trim());
    Ok(enemy)
}

/// Split a `;`-separated list field into trimmed, non-blank items.
pub fn split_list(field: &str) -> impl Iterator<Item = &str> {
    field
        .split(LIST_DELIMITER)
        .map(str::trim)
        .filter(|item| !item.is_empty())
}
