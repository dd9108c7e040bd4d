//! Session context
//!
//! The workbook and its derived alias index travel together as one
//! explicit context object. A session is created when a source is loaded,
//! replaced wholesale when a new source is loaded, and discarded at the
//! end of the interaction; it is read-only during a dispatch pass.

use ledgerboard_core::Workbook;
use ledgerboard_directive::AliasIndex;

/// The loaded workbook plus its alias index
#[derive(Debug)]
pub struct Session {
    workbook: Workbook,
    aliases: AliasIndex,
}

impl Session {
    /// Create a session for a freshly loaded workbook
    pub fn new(workbook: Workbook) -> Self {
        let aliases = AliasIndex::build(&workbook);
        Self { workbook, aliases }
    }

    /// The active workbook
    pub fn workbook(&self) -> &Workbook {
        &self.workbook
    }

    /// The alias index derived from the active workbook
    pub fn aliases(&self) -> &AliasIndex {
        &self.aliases
    }

    /// Swap in a newly loaded workbook, rebuilding the alias index
    pub fn replace_workbook(&mut self, workbook: Workbook) {
        self.aliases = AliasIndex::build(&workbook);
        self.workbook = workbook;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Workbook::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledgerboard_core::Sheet;

    #[test]
    fn test_replace_workbook_rebuilds_index() {
        let mut wb = Workbook::new();
        wb.add_sheet(
            Sheet::from_rows("Ventas", vec!["Monto".into()], vec![]).unwrap(),
        )
        .unwrap();
        let mut session = Session::new(wb);
        assert!(session.aliases().resolve("monto", None).is_some());

        session.replace_workbook(Workbook::new());
        assert!(session.aliases().resolve("monto", None).is_none());
        assert!(session.workbook().is_empty());
    }
}
