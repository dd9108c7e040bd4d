//! Group-sum aggregation
//!
//! Every rendering operation displays the same shape of data: the value
//! column summed per distinct category. The aggregation is computed here,
//! with typed failures, before a renderer ever sees the directive.

use ahash::AHashMap;
use ledgerboard_core::Sheet;

use crate::error::AggregateError;

/// Grouping key used for missing/empty category cells
///
/// Blank categories are kept as their own visible group rather than
/// silently dropped.
pub const BLANK_LABEL: &str = "(blank)";

/// One aggregated group
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Group {
    /// Display form of the category cell
    pub label: String,
    /// Sum of the value column over this group's rows
    pub total: f64,
}

/// The value column summed per distinct category, label-sorted
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GroupSummary {
    /// Real category column name
    pub category: String,
    /// Real value column name
    pub value: String,
    /// Aggregated groups, sorted by label
    pub groups: Vec<Group>,
}

impl GroupSummary {
    /// Groups re-sorted by ascending total, for bar-style presentation
    pub fn sorted_by_total(&self) -> Vec<Group> {
        let mut groups = self.groups.clone();
        groups.sort_by(|a, b| a.total.total_cmp(&b.total));
        groups
    }

    /// Grand total over all groups
    pub fn grand_total(&self) -> f64 {
        self.groups.iter().map(|g| g.total).sum()
    }
}

/// Sum `value` grouped by the display form of `category`
///
/// Empty value cells contribute nothing; booleans count as 1/0. A value
/// column with zero numeric cells (including an empty sheet) is
/// [`AggregateError::NoNumericData`]; a non-empty cell the sum cannot
/// digest is [`AggregateError::NonNumericValue`].
pub fn group_sum(
    sheet: &Sheet,
    category: &str,
    value: &str,
) -> Result<GroupSummary, AggregateError> {
    let cat_col = sheet
        .column(category)
        .ok_or_else(|| AggregateError::ColumnNotFound(category.to_string()))?;
    let val_col = sheet
        .column(value)
        .ok_or_else(|| AggregateError::ColumnNotFound(value.to_string()))?;

    let mut totals: AHashMap<String, f64> = AHashMap::new();
    let mut numeric_cells = 0usize;

    for (row, (cat, val)) in cat_col.values().iter().zip(val_col.values()).enumerate() {
        let label = if cat.is_empty() {
            BLANK_LABEL.to_string()
        } else {
            cat.to_string()
        };
        let entry = totals.entry(label).or_insert(0.0);

        if val.is_empty() {
            continue;
        }
        match val.as_number() {
            Some(n) => {
                *entry += n;
                numeric_cells += 1;
            }
            None => {
                return Err(AggregateError::NonNumericValue {
                    column: value.to_string(),
                    row,
                    type_name: val.type_name(),
                });
            }
        }
    }

    if numeric_cells == 0 {
        return Err(AggregateError::NoNumericData {
            column: value.to_string(),
        });
    }

    let mut groups: Vec<Group> = totals
        .into_iter()
        .map(|(label, total)| Group { label, total })
        .collect();
    groups.sort_by(|a, b| a.label.cmp(&b.label));

    Ok(GroupSummary {
        category: category.to_string(),
        value: value.to_string(),
        groups,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledgerboard_core::CellValue;
    use pretty_assertions::assert_eq;

    fn sheet() -> Sheet {
        Sheet::from_rows(
            "FACTURACION",
            vec!["Tipo Cliente".into(), "Monto".into()],
            vec![
                vec!["Seguro".into(), 3400.0.into()],
                vec!["Particular".into(), 1200.0.into()],
                vec!["Seguro".into(), 600.0.into()],
                vec![CellValue::Empty, 100.0.into()],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_group_sum() {
        let summary = group_sum(&sheet(), "Tipo Cliente", "Monto").unwrap();

        assert_eq!(summary.category, "Tipo Cliente");
        assert_eq!(summary.value, "Monto");
        assert_eq!(
            summary.groups,
            vec![
                Group { label: "(blank)".into(), total: 100.0 },
                Group { label: "Particular".into(), total: 1200.0 },
                Group { label: "Seguro".into(), total: 4000.0 },
            ]
        );
        assert_eq!(summary.grand_total(), 5300.0);
    }

    #[test]
    fn test_sorted_by_total() {
        let summary = group_sum(&sheet(), "Tipo Cliente", "Monto").unwrap();
        let sorted = summary.sorted_by_total();
        let labels: Vec<_> = sorted.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["(blank)", "Particular", "Seguro"]);
    }

    #[test]
    fn test_empty_value_cells_skipped() {
        let sheet = Sheet::from_rows(
            "S",
            vec!["Cat".into(), "Val".into()],
            vec![
                vec!["A".into(), 10.0.into()],
                vec!["B".into(), CellValue::Empty],
            ],
        )
        .unwrap();

        let summary = group_sum(&sheet, "Cat", "Val").unwrap();
        assert_eq!(
            summary.groups,
            vec![
                Group { label: "A".into(), total: 10.0 },
                Group { label: "B".into(), total: 0.0 },
            ]
        );
    }

    #[test]
    fn test_column_not_found() {
        let err = group_sum(&sheet(), "Nope", "Monto").unwrap_err();
        assert!(matches!(err, AggregateError::ColumnNotFound(_)));
    }

    #[test]
    fn test_no_numeric_data() {
        let sheet = Sheet::from_rows(
            "S",
            vec!["Cat".into(), "Val".into()],
            vec![vec!["A".into(), CellValue::Empty]],
        )
        .unwrap();

        let err = group_sum(&sheet, "Cat", "Val").unwrap_err();
        assert!(matches!(err, AggregateError::NoNumericData { .. }));

        // An empty sheet has nothing to sum either
        let empty = Sheet::from_rows("E", vec!["Cat".into(), "Val".into()], vec![]).unwrap();
        let err = group_sum(&empty, "Cat", "Val").unwrap_err();
        assert!(matches!(err, AggregateError::NoNumericData { .. }));
    }

    #[test]
    fn test_non_numeric_value_is_error() {
        let sheet = Sheet::from_rows(
            "S",
            vec!["Cat".into(), "Val".into()],
            vec![
                vec!["A".into(), 5.0.into()],
                vec!["B".into(), "no es numero".into()],
            ],
        )
        .unwrap();

        let err = group_sum(&sheet, "Cat", "Val").unwrap_err();
        match err {
            AggregateError::NonNumericValue { row, type_name, .. } => {
                assert_eq!(row, 1);
                assert_eq!(type_name, "string");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
