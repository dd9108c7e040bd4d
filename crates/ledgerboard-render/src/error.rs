//! Error types for ledgerboard-render

use thiserror::Error;

/// Result type for rendering operations
pub type RenderResult<T> = std::result::Result<T, RenderError>;

/// Errors from the group-sum aggregation step
///
/// `NoNumericData` and `NonNumericValue` are deliberately distinct: the
/// first means there was nothing to sum, the second that the column holds
/// data the sum cannot digest.
#[derive(Debug, Error)]
pub enum AggregateError {
    /// Requested column is not present in the sheet
    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    /// The value column contains no numeric cells at all
    #[error("Column '{column}' has no numeric data to sum")]
    NoNumericData {
        /// Value column name
        column: String,
    },

    /// A non-empty, non-numeric cell in the value column
    #[error("Column '{column}' holds a non-numeric {type_name} value at row {row}")]
    NonNumericValue {
        /// Value column name
        column: String,
        /// Zero-based data row of the offending cell
        row: usize,
        /// Type of the offending cell
        type_name: &'static str,
    },
}

/// Errors raised by a rendering collaborator
#[derive(Debug, Error)]
pub enum RenderError {
    /// IO error while emitting output
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Renderer-specific failure
    #[error("{0}")]
    Other(String),
}

impl RenderError {
    /// Create a renderer-specific error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        RenderError::Other(msg.into())
    }
}
