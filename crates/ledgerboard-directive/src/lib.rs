//! # ledgerboard-directive
//!
//! Directive extraction and fuzzy column resolution.
//!
//! This crate turns untrusted assistant text into typed rendering
//! requests and maps the column names those requests mention onto the
//! real headers of the loaded workbook:
//! - [`normalize`] - canonical form of a column name for equality matching
//! - [`AliasIndex`] - per-sheet map from normalized name to real header
//! - [`extract_directives`] - scan text for pie/bar/table directives
//!
//! ## Example
//!
//! ```rust
//! use ledgerboard_directive::{extract_directives, DirectiveKind};
//!
//! let out = extract_directives("Resumen listo.\ntabla:Tipo Cliente|Monto Neto\n");
//! assert_eq!(out.directives.len(), 1);
//! assert_eq!(out.directives[0].kind(), DirectiveKind::Table);
//! ```

pub mod alias;
pub mod normalize;
pub mod parser;

// Re-exports for convenience
pub use alias::{AliasIndex, ColumnRef};
pub use normalize::normalize;
pub use parser::{
    extract_directives, ChartDirective, Directive, DirectiveKind, Extraction,
    MalformedDirective, TableDirective,
};
