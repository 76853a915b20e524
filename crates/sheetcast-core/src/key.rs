//! Column key resolution
//!
//! A raw header cell is resolved into a [`ColumnKey`]: the sheet-qualified
//! identity used for registry and pattern lookup, plus the unqualified field
//! name used to locate the record field.

use std::collections::HashMap;
use std::fmt;

/// Resolved, sheet-qualified identity of one column
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnKey {
    qualified: String,
    field: String,
}

impl ColumnKey {
    /// The sheet-qualified key, `"<sheet>.<field>"`
    pub fn qualified(&self) -> &str {
        &self.qualified
    }

    /// The unqualified field name
    pub fn field(&self) -> &str {
        &self.field
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.qualified)
    }
}

/// Resolve a raw header cell against the rename table.
///
/// The candidate key is the sheet-qualified raw header; when the rename table
/// maps it, the canonical name replaces the field name and the qualified key
/// is recomputed from it. Absence from the table is the common case and is
/// not logged.
pub(crate) fn resolve(rename: &HashMap<String, String>, sheet: &str, raw_header: &str) -> ColumnKey {
    let qualified = format!("{sheet}.{raw_header}");

    match rename.get(&qualified) {
        Some(canonical) => ColumnKey {
            qualified: format!("{sheet}.{canonical}"),
            field: canonical.clone(),
        },
        None => ColumnKey {
            qualified,
            field: raw_header.to_string(),
        },
    }
}
