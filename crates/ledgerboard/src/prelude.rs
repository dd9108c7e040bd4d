//! Prelude module - common imports for ledgerboard users
//!
//! ```rust
//! use ledgerboard::prelude::*;
//! ```

pub use crate::{
    // Resolution types
    AliasIndex,
    // Cell types
    CellValue,
    ColumnRef,
    // Directive types
    Directive,
    DirectiveKind,
    // Dispatch types
    DispatchReport,
    DispatchWarning,
    // Error types
    Error,
    Extraction,
    Group,
    GroupSummary,
    RenderResult,
    // Rendering seam
    Renderer,
    Result,
    // Session types
    Session,
    // Main types
    Sheet,
    SheetProfile,
    Workbook,

    // Entry points
    extract_directives,
    group_sum,
    normalize,
    process_response,
    profile_workbook,
};
