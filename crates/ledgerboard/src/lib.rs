//! # ledgerboard
//!
//! The analysis core of an LLM-assisted financial dashboard: it holds the
//! loaded workbook, extracts chart/table directives embedded in assistant
//! responses, fuzzily resolves the column names those directives mention,
//! and dispatches validated rendering calls to a pluggable [`Renderer`].
//!
//! ## Example
//!
//! ```rust
//! use ledgerboard::prelude::*;
//!
//! let sheet = Sheet::from_rows(
//!     "FACTURACION",
//!     vec!["Tipo Cliente".into(), "Monto Neto".into()],
//!     vec![
//!         vec!["Seguro".into(), 3400.0.into()],
//!         vec!["Particular".into(), 1200.0.into()],
//!     ],
//! ).unwrap();
//!
//! let mut workbook = Workbook::new();
//! workbook.add_sheet(sheet).unwrap();
//! let session = Session::new(workbook);
//!
//! struct Null;
//! impl Renderer for Null {
//!     fn pie(&mut self, _: &str, _: &GroupSummary, _: &str) -> RenderResult<()> { Ok(()) }
//!     fn bar(&mut self, _: &str, _: &GroupSummary, _: &str) -> RenderResult<()> { Ok(()) }
//!     fn table(&mut self, _: &str, _: &GroupSummary, _: &str) -> RenderResult<()> { Ok(()) }
//! }
//!
//! let report = process_response(
//!     "Con gusto:\ntabla:tipo_cliente|monto neto\n",
//!     &session,
//!     &mut Null,
//! );
//! assert_eq!(report.rendered, 1);
//! assert!(report.warnings.is_empty());
//! ```

pub mod dispatch;
pub mod prelude;
pub mod session;

// Re-export dispatch types
pub use dispatch::{
    dispatch, process_response, DispatchError, DispatchErrorCause, DispatchReport,
    DispatchWarning,
};
pub use session::Session;

// Re-export core types
pub use ledgerboard_core::{
    CellValue, Column, Error, Result, Sheet, Workbook, MAX_SHEET_NAME_LEN,
};

// Re-export directive types
pub use ledgerboard_directive::{
    extract_directives, normalize, AliasIndex, ChartDirective, ColumnRef, Directive,
    DirectiveKind, Extraction, MalformedDirective, TableDirective,
};

// Re-export render types
pub use ledgerboard_render::{
    group_sum, profile_sheet, profile_workbook, AggregateError, ColumnProfile, Group,
    GroupSummary, NumericStats, RenderError, RenderResult, Renderer, SheetProfile,
    BLANK_LABEL,
};
