//! Directive dispatch
//!
//! One assistant response yields one pass: extract every directive, then
//! resolve and render each one strictly in extraction order. Everything
//! that can go wrong per directive is recovered locally and reported in
//! the [`DispatchReport`]; a pass never aborts.

use std::fmt;

use ledgerboard_core::Sheet;
use ledgerboard_directive::{
    extract_directives, Directive, DirectiveKind, MalformedDirective,
};
use ledgerboard_render::{group_sum, AggregateError, RenderError, Renderer};
use thiserror::Error;

use crate::session::Session;

/// A non-fatal condition that kept a directive from rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchWarning {
    /// Recognized directive with the wrong field count
    Malformed(MalformedDirective),

    /// Scoped directive whose fields did not all resolve in that sheet
    Unresolved {
        /// Directive kind
        kind: DirectiveKind,
        /// The scoped sheet that was searched
        sheet: String,
        /// Requested names that resolved to no column
        unresolved: Vec<String>,
    },

    /// Unscoped directive that resolved in no sheet at all
    NoSheetMatched {
        /// Directive kind
        kind: DirectiveKind,
        /// Requested category name
        category: String,
        /// Requested value name
        value: String,
    },
}

// Display is the only rendering these warnings get in a terminal session,
// so the messages name the requested fields verbatim.
impl fmt::Display for DispatchWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchWarning::Malformed(m) => write!(f, "{}", m),
            DispatchWarning::Unresolved {
                kind,
                sheet,
                unresolved,
            } => write!(
                f,
                "Could not render {} in '{}'; unknown column(s): {}",
                kind,
                sheet,
                unresolved.join(", ")
            ),
            DispatchWarning::NoSheetMatched {
                kind,
                category,
                value,
            } => write!(
                f,
                "Could not render {} in any sheet; columns '{}' and '{}' not found",
                kind, category, value
            ),
        }
    }
}

/// Why a resolved directive still failed to render
#[derive(Debug, Error)]
pub enum DispatchErrorCause {
    /// The aggregation step rejected the data
    #[error(transparent)]
    Aggregate(#[from] AggregateError),

    /// The rendering collaborator failed
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// A per-sheet rendering failure, reported and recovered
#[derive(Debug, Error)]
#[error("Error rendering {kind} on '{sheet}': {cause}")]
pub struct DispatchError {
    /// Directive kind
    pub kind: DirectiveKind,
    /// Sheet the render was attempted on
    pub sheet: String,
    /// Underlying failure
    pub cause: DispatchErrorCause,
}

/// Outcome of one parse-and-render pass
#[derive(Debug, Default)]
pub struct DispatchReport {
    /// Well-formed directives found in the text
    pub directives_found: usize,
    /// Successful render calls (an unscoped directive may render several times)
    pub rendered: usize,
    /// Non-fatal conditions, in processing order
    pub warnings: Vec<DispatchWarning>,
    /// Recovered rendering failures, in processing order
    pub errors: Vec<DispatchError>,
}

impl DispatchReport {
    /// Check whether the pass rendered nothing and reported nothing
    pub fn is_empty(&self) -> bool {
        self.directives_found == 0 && self.warnings.is_empty() && self.errors.is_empty()
    }
}

/// Extract every directive from `text` and dispatch each in order
///
/// The session is read-only for the duration of the pass; all rendering
/// side effects go through `renderer`.
pub fn process_response(
    text: &str,
    session: &Session,
    renderer: &mut dyn Renderer,
) -> DispatchReport {
    let extraction = extract_directives(text);
    let mut report = DispatchReport {
        directives_found: extraction.directives.len(),
        ..Default::default()
    };

    for malformed in extraction.malformed {
        report.warnings.push(DispatchWarning::Malformed(malformed));
    }

    for directive in &extraction.directives {
        dispatch(directive, session, renderer, &mut report);
    }

    report
}

/// Dispatch a single directive, appending outcomes to the report
pub fn dispatch(
    directive: &Directive,
    session: &Session,
    renderer: &mut dyn Renderer,
    report: &mut DispatchReport,
) {
    let scoped_sheet = directive
        .sheet()
        .and_then(|scope| session.workbook().sheet_by_name(scope));

    // A scope naming a real sheet restricts resolution to that sheet.
    if let Some(sheet) = scoped_sheet {
        let category = session.aliases().resolve_in(sheet.name(), directive.category());
        let value = session.aliases().resolve_in(sheet.name(), directive.value());

        match (category, value) {
            (Some(category), Some(value)) => {
                render_on(directive, sheet, category, value, renderer, report);
            }
            (category, value) => {
                let mut unresolved = Vec::new();
                if category.is_none() {
                    unresolved.push(directive.category().to_string());
                }
                if value.is_none() {
                    unresolved.push(directive.value().to_string());
                }
                report.warnings.push(DispatchWarning::Unresolved {
                    kind: directive.kind(),
                    sheet: sheet.name().to_string(),
                    unresolved,
                });
            }
        }
        return;
    }

    // No scope, or a scope naming no loaded sheet: try every sheet
    // independently and render on each one that resolves both fields.
    // The same metric may legitimately live in several sheets.
    let mut matched = false;
    for sheet in session.workbook().sheets() {
        let category = session.aliases().resolve_in(sheet.name(), directive.category());
        let value = session.aliases().resolve_in(sheet.name(), directive.value());

        if let (Some(category), Some(value)) = (category, value) {
            matched = true;
            render_on(directive, sheet, category, value, renderer, report);
        }
    }

    if !matched {
        report.warnings.push(DispatchWarning::NoSheetMatched {
            kind: directive.kind(),
            category: directive.category().to_string(),
            value: directive.value().to_string(),
        });
    }
}

/// Aggregate and render one directive on one sheet
fn render_on(
    directive: &Directive,
    sheet: &Sheet,
    category: &str,
    value: &str,
    renderer: &mut dyn Renderer,
    report: &mut DispatchReport,
) {
    let summary = match group_sum(sheet, category, value) {
        Ok(summary) => summary,
        Err(e) => {
            report.errors.push(DispatchError {
                kind: directive.kind(),
                sheet: sheet.name().to_string(),
                cause: e.into(),
            });
            return;
        }
    };

    let result = match directive {
        Directive::Pie(c) => renderer.pie(sheet.name(), &summary, &c.title),
        Directive::Bar(c) => renderer.bar(sheet.name(), &summary, &c.title),
        Directive::Table(t) => {
            let title = t
                .title
                .clone()
                .unwrap_or_else(|| format!("{} by {}", value, category));
            renderer.table(sheet.name(), &summary, &title)
        }
    };

    match result {
        Ok(()) => report.rendered += 1,
        Err(e) => report.errors.push(DispatchError {
            kind: directive.kind(),
            sheet: sheet.name().to_string(),
            cause: e.into(),
        }),
    }
}
