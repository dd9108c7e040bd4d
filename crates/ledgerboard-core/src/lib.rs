//! # ledgerboard-core
//!
//! Core data structures for the ledgerboard analysis engine.
//!
//! This crate provides the fundamental types used throughout ledgerboard:
//! - [`CellValue`] - Represents cell values (numbers, strings, booleans, dates)
//! - [`Column`] and [`Sheet`] - Named, column-oriented tables
//! - [`Workbook`] - The full set of sheets loaded for a session
//!
//! ## Example
//!
//! ```rust
//! use ledgerboard_core::{Sheet, Workbook};
//!
//! let sheet = Sheet::from_rows(
//!     "FACTURACION",
//!     vec!["Tipo Cliente".into(), "Monto".into()],
//!     vec![
//!         vec!["Particular".into(), 1200.0.into()],
//!         vec!["Seguro".into(), 3400.0.into()],
//!     ],
//! ).unwrap();
//!
//! let mut workbook = Workbook::new();
//! workbook.add_sheet(sheet).unwrap();
//! assert_eq!(workbook.sheet_count(), 1);
//! ```

pub mod error;
pub mod sheet;
pub mod value;
pub mod workbook;

// Re-exports for convenience
pub use error::{Error, Result};
pub use sheet::{Column, Sheet};
pub use value::CellValue;
pub use workbook::Workbook;

/// Maximum length of a sheet name
pub const MAX_SHEET_NAME_LEN: usize = 31;
