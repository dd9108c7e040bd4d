//! # ledgerboard-csv
//!
//! CSV ingestion for the ledgerboard CLI driver.
//!
//! The analysis core never touches files; workbooks reach it through a
//! loader collaborator. This crate is the loader the bundled CLI uses:
//! one CSV file becomes one named [`Sheet`](ledgerboard_core::Sheet),
//! with headers taken from the first row and cell types auto-detected.

pub mod error;
pub mod options;
pub mod reader;

// Re-exports for convenience
pub use error::{CsvError, CsvResult};
pub use options::CsvReadOptions;
pub use reader::CsvReader;
