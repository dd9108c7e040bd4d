//! Workbook profiling
//!
//! Describe-style summaries of every loaded sheet, used to ground the
//! assistant's analysis in computed numbers instead of raw rows.

use ahash::AHashMap;
use ledgerboard_core::{Sheet, Workbook};

/// Summary statistics over the numeric cells of a column
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct NumericStats {
    /// Number of numeric cells
    pub count: usize,
    /// Sum of numeric cells
    pub sum: f64,
    /// Mean of numeric cells
    pub mean: f64,
    /// Smallest numeric cell
    pub min: f64,
    /// Largest numeric cell
    pub max: f64,
}

/// Per-column profile
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ColumnProfile {
    /// Column header name
    pub name: String,
    /// Non-empty cell count
    pub non_empty: usize,
    /// Empty cell count
    pub missing: usize,
    /// Number of distinct non-empty display values
    pub distinct: usize,
    /// Most frequent non-empty display value and its count
    pub top: Option<(String, usize)>,
    /// Numeric summary, when the column has numeric cells
    pub numeric: Option<NumericStats>,
}

/// Per-sheet profile
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SheetProfile {
    /// Sheet name
    pub sheet: String,
    /// Total data rows
    pub rows: usize,
    /// One profile per column, in source order
    pub columns: Vec<ColumnProfile>,
}

/// Profile one sheet; total, never fails
pub fn profile_sheet(sheet: &Sheet) -> SheetProfile {
    let columns = sheet
        .columns()
        .map(|col| {
            let mut counts: AHashMap<&str, usize> = AHashMap::new();
            let mut display: Vec<String> = Vec::new();
            let mut non_empty = 0usize;
            let mut numeric: Option<NumericStats> = None;

            for value in col.values() {
                if value.is_empty() {
                    continue;
                }
                non_empty += 1;
                display.push(value.to_string());

                if let Some(n) = value.as_number() {
                    let stats = numeric.get_or_insert(NumericStats {
                        count: 0,
                        sum: 0.0,
                        mean: 0.0,
                        min: n,
                        max: n,
                    });
                    stats.count += 1;
                    stats.sum += n;
                    stats.min = stats.min.min(n);
                    stats.max = stats.max.max(n);
                }
            }

            for d in &display {
                *counts.entry(d.as_str()).or_insert(0) += 1;
            }
            // Deterministic tie-break: highest count, then smallest label
            let top = counts
                .iter()
                .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
                .map(|(label, count)| (label.to_string(), *count));
            let distinct = counts.len();

            if let Some(stats) = numeric.as_mut() {
                stats.mean = stats.sum / stats.count as f64;
            }

            ColumnProfile {
                name: col.name().to_string(),
                non_empty,
                missing: col.len() - non_empty,
                distinct,
                top,
                numeric,
            }
        })
        .collect();

    SheetProfile {
        sheet: sheet.name().to_string(),
        rows: sheet.row_count(),
        columns,
    }
}

/// Profile every non-empty sheet of a workbook, in source order
pub fn profile_workbook(workbook: &Workbook) -> Vec<SheetProfile> {
    workbook
        .sheets()
        .filter(|s| !s.is_empty())
        .map(profile_sheet)
        .collect()
}
