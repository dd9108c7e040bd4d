//! # ledgerboard-render
//!
//! Aggregation, profiling, and the rendering seam for ledgerboard.
//!
//! - [`group_sum`] - the value column summed per category, with typed
//!   failures instead of silently empty output
//! - [`profile_sheet`] / [`profile_workbook`] - describe-style summaries
//! - [`Renderer`] - the trait the dispatcher renders through

pub mod aggregate;
pub mod error;
pub mod profile;
pub mod renderer;

// Re-exports for convenience
pub use aggregate::{group_sum, Group, GroupSummary, BLANK_LABEL};
pub use error::{AggregateError, RenderError, RenderResult};
pub use profile::{profile_sheet, profile_workbook, ColumnProfile, NumericStats, SheetProfile};
pub use renderer::Renderer;
