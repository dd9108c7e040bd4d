//! Alias index and column resolution
//!
//! The index is a pure function of the workbook: per sheet, a map from
//! normalized column name to the real header. It is rebuilt whenever the
//! workbook changes and never outlives it.

use ahash::AHashMap;
use ledgerboard_core::Workbook;

use crate::normalize::normalize;

/// A resolved column: which sheet it lives in and its real header name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnRef<'a> {
    /// Sheet containing the column
    pub sheet: &'a str,
    /// Real header name, exactly as it appears in the sheet
    pub column: &'a str,
}

/// Per-sheet mapping from normalized column name to real column name
///
/// Sheets are kept in workbook order so that global scans are
/// deterministic. Within a sheet, entries are inserted in source column
/// order; if two columns normalize identically the later one wins.
#[derive(Debug, Default)]
pub struct AliasIndex {
    sheets: Vec<SheetAliases>,
}

#[derive(Debug)]
struct SheetAliases {
    name: String,
    columns: AHashMap<String, String>,
}

impl AliasIndex {
    /// Build the index covering every sheet and every column
    pub fn build(workbook: &Workbook) -> Self {
        let mut sheets = Vec::with_capacity(workbook.sheet_count());

        for sheet in workbook.sheets() {
            let mut columns = AHashMap::with_capacity(sheet.column_count());
            for header in sheet.column_names() {
                let key = normalize(header);
                if key.is_empty() {
                    // A header with no alphanumeric content can never be
                    // referenced by a directive.
                    continue;
                }
                columns.insert(key, header.to_string());
            }
            sheets.push(SheetAliases {
                name: sheet.name().to_string(),
                columns,
            });
        }

        Self { sheets }
    }

    /// Check if the index covers no sheets
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Resolve a requested name within one named sheet only
    pub fn resolve_in(&self, sheet: &str, requested: &str) -> Option<&str> {
        let key = normalize(requested);
        if key.is_empty() {
            return None;
        }
        self.sheets
            .iter()
            .find(|s| s.name == sheet)?
            .columns
            .get(&key)
            .map(String::as_str)
    }

    /// Resolve a requested name, preferring the scoped sheet
    ///
    /// The scoped sheet is consulted first when given; on a miss (or with
    /// no scope at all) every sheet is searched in workbook order and the
    /// first match wins. Never fails: an unmatched name is simply `None`.
    pub fn resolve(&self, requested: &str, scope: Option<&str>) -> Option<ColumnRef<'_>> {
        let key = normalize(requested);
        if key.is_empty() {
            return None;
        }

        if let Some(scope) = scope {
            if let Some(aliases) = self.sheets.iter().find(|s| s.name == scope) {
                if let Some(column) = aliases.columns.get(&key) {
                    return Some(ColumnRef {
                        sheet: &aliases.name,
                        column,
                    });
                }
            }
        }

        self.sheets.iter().find_map(|aliases| {
            aliases.columns.get(&key).map(|column| ColumnRef {
                sheet: &aliases.name,
                column: column.as_str(),
            })
        })
    }
}
