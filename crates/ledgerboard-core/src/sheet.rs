//! Sheet type - one named table of columns

use crate::error::{Error, Result};
use crate::value::CellValue;

/// A named column and its cell values
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Column {
    name: String,
    values: Vec<CellValue>,
}

impl Column {
    /// Create an empty column
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
        }
    }

    /// Create a column with values
    pub fn with_values<S: Into<String>>(name: S, values: Vec<CellValue>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Column header name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cell values, one per row
    pub fn values(&self) -> &[CellValue] {
        &self.values
    }

    /// Number of cells in the column
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the column has no cells
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// One named table within a workbook
///
/// Sheets are column-oriented: the analysis operations (resolution,
/// aggregation, profiling) all address whole columns by header name.
/// Column names are unique within a sheet.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sheet {
    name: String,
    columns: Vec<Column>,
    rows: usize,
}

impl Sheet {
    /// Create an empty sheet with no columns
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            rows: 0,
        }
    }

    /// Build a sheet from a header row and data rows
    ///
    /// Every data row must have exactly one field per header; a ragged row
    /// is an error (loaders pad or truncate before calling).
    pub fn from_rows<S: Into<String>>(
        name: S,
        headers: Vec<String>,
        rows: Vec<Vec<CellValue>>,
    ) -> Result<Self> {
        let mut sheet = Sheet::new(name);
        for header in headers {
            sheet.push_column(Column::new(header))?;
        }

        for (idx, row) in rows.into_iter().enumerate() {
            if row.len() != sheet.columns.len() {
                return Err(Error::RaggedRow {
                    row: idx,
                    expected: sheet.columns.len(),
                    got: row.len(),
                });
            }
            for (col, value) in sheet.columns.iter_mut().zip(row) {
                col.values.push(value);
            }
            sheet.rows += 1;
        }

        Ok(sheet)
    }

    /// Add a column; all columns must stay the same length
    pub fn push_column(&mut self, column: Column) -> Result<()> {
        if self.columns.iter().any(|c| c.name == column.name) {
            return Err(Error::DuplicateColumnName(column.name));
        }
        if !self.columns.is_empty() && column.len() != self.rows {
            return Err(Error::RaggedRow {
                row: 0,
                expected: self.rows,
                got: column.len(),
            });
        }
        if self.columns.is_empty() {
            self.rows = column.len();
        }
        self.columns.push(column);
        Ok(())
    }

    /// Sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of data rows
    pub fn row_count(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Check if the sheet has no data rows
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Get a column by exact header name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Iterate over columns in source order
    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter()
    }

    /// Iterate over column header names in source order
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_from_rows() {
        let sheet = Sheet::from_rows(
            "Facturacion",
            headers(&["Tipo Cliente", "Monto"]),
            vec![
                vec!["Particular".into(), 1200.0.into()],
                vec!["Seguro".into(), 3400.0.into()],
            ],
        )
        .unwrap();

        assert_eq!(sheet.row_count(), 2);
        assert_eq!(sheet.column_count(), 2);
        assert_eq!(
            sheet.column_names().collect::<Vec<_>>(),
            vec!["Tipo Cliente", "Monto"]
        );
        assert_eq!(
            sheet.column("Monto").unwrap().values()[1],
            CellValue::Number(3400.0)
        );
    }

    #[test]
    fn test_ragged_row_rejected() {
        let err = Sheet::from_rows(
            "S",
            headers(&["A", "B"]),
            vec![vec![1.0.into()]],
        )
        .unwrap_err();
        assert!(matches!(err, Error::RaggedRow { row: 0, .. }));
    }

    #[test]
    fn test_duplicate_column_rejected() {
        let err = Sheet::from_rows("S", headers(&["Monto", "Monto"]), vec![]).unwrap_err();
        assert!(matches!(err, Error::DuplicateColumnName(_)));

        // Near-variants are distinct columns here; the alias index decides
        // how normalized collisions resolve.
        assert!(Sheet::from_rows("S", headers(&["Monto", "monto"]), vec![]).is_ok());
    }

    #[test]
    fn test_empty_sheet() {
        let sheet = Sheet::new("Empty");
        assert!(sheet.is_empty());
        assert_eq!(sheet.column("anything"), None);
    }
}
