//! The rendering seam
//!
//! Chart and table drawing live outside this workspace's core; the
//! dispatcher talks to whatever implements [`Renderer`]. The bundled CLI
//! ships a terminal implementation, a UI would ship its own.

use crate::aggregate::GroupSummary;
use crate::error::RenderResult;

/// A rendering collaborator
///
/// Each call receives the sheet the data came from and the already
/// aggregated summary. Implementations may fail; the dispatcher catches
/// failures per directive and keeps going.
pub trait Renderer {
    /// Render a pie chart
    fn pie(&mut self, sheet: &str, summary: &GroupSummary, title: &str) -> RenderResult<()>;

    /// Render a horizontal bar chart
    fn bar(&mut self, sheet: &str, summary: &GroupSummary, title: &str) -> RenderResult<()>;

    /// Render a summary table
    fn table(&mut self, sheet: &str, summary: &GroupSummary, title: &str) -> RenderResult<()>;
}
