//! Workbook type - the full set of loaded sheets for a session

use crate::error::{Error, Result};
use crate::sheet::Sheet;
use crate::MAX_SHEET_NAME_LEN;

/// A workbook (the set of sheets loaded from one source)
///
/// Sheet order is source order; name lookups and iteration are stable for
/// the lifetime of the workbook. Exactly one workbook is active per
/// session, and it is replaced wholesale when a new source is loaded.
#[derive(Debug, Default)]
pub struct Workbook {
    sheets: Vec<Sheet>,
}

impl Workbook {
    /// Create an empty workbook with no sheets
    pub fn new() -> Self {
        Self { sheets: Vec::new() }
    }

    /// Get the number of sheets
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// Check if the workbook has no sheets
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Get a sheet by index
    pub fn sheet(&self, index: usize) -> Option<&Sheet> {
        self.sheets.get(index)
    }

    /// Get a sheet by exact name
    pub fn sheet_by_name(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name() == name)
    }

    /// Check whether a sheet with this exact name exists
    pub fn contains_sheet(&self, name: &str) -> bool {
        self.sheet_by_name(name).is_some()
    }

    /// Iterate over all sheets in source order
    pub fn sheets(&self) -> impl Iterator<Item = &Sheet> {
        self.sheets.iter()
    }

    /// Add a sheet, validating its name
    pub fn add_sheet(&mut self, sheet: Sheet) -> Result<usize> {
        self.validate_sheet_name(sheet.name())?;
        let index = self.sheets.len();
        self.sheets.push(sheet);
        Ok(index)
    }

    /// Validate a sheet name
    fn validate_sheet_name(&self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(Error::InvalidSheetName("Sheet name cannot be empty".into()));
        }
        if name.len() > MAX_SHEET_NAME_LEN {
            return Err(Error::InvalidSheetName(format!(
                "Sheet name too long (max {} characters)",
                MAX_SHEET_NAME_LEN
            )));
        }
        // Colons would make the name unaddressable in directive scopes
        if name.contains(':') {
            return Err(Error::InvalidSheetName(
                "Sheet name cannot contain ':'".into(),
            ));
        }

        // Duplicate check is case-insensitive
        let name_lower = name.to_lowercase();
        if self
            .sheets
            .iter()
            .any(|s| s.name().to_lowercase() == name_lower)
        {
            return Err(Error::DuplicateSheetName(name.into()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_workbook() {
        let wb = Workbook::new();
        assert!(wb.is_empty());
        assert_eq!(wb.sheet_count(), 0);
        assert!(wb.sheet_by_name("anything").is_none());
    }

    #[test]
    fn test_add_sheets_keeps_order() {
        let mut wb = Workbook::new();
        wb.add_sheet(Sheet::new("FACTURACION")).unwrap();
        wb.add_sheet(Sheet::new("Finanzas")).unwrap();

        let names: Vec<_> = wb.sheets().map(|s| s.name().to_string()).collect();
        assert_eq!(names, vec!["FACTURACION", "Finanzas"]);
        assert!(wb.contains_sheet("Finanzas"));
        assert!(!wb.contains_sheet("finanzas"));
    }

    #[test]
    fn test_duplicate_name() {
        let mut wb = Workbook::new();
        wb.add_sheet(Sheet::new("Ventas")).unwrap();

        // Case-insensitive duplicate check
        assert!(wb.add_sheet(Sheet::new("VENTAS")).is_err());
        assert!(wb.add_sheet(Sheet::new("ventas")).is_err());
    }

    #[test]
    fn test_invalid_sheet_name() {
        let mut wb = Workbook::new();

        assert!(wb.add_sheet(Sheet::new("")).is_err());
        assert!(wb.add_sheet(Sheet::new("Hoja:1")).is_err());

        let long_name = "A".repeat(MAX_SHEET_NAME_LEN + 1);
        assert!(wb.add_sheet(Sheet::new(long_name)).is_err());
    }
}
