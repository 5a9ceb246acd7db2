//! Error types and handling for unit-lister
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Collection-level failures (a single quantity or unit the host could not
//! resolve) are not represented here; those are accumulated inside the
//! [`crate::domain::UnitsReport`] as error/warning strings. This enum covers
//! the fatal paths only: an unusable model file, an unwritable export target,
//! and bad command input.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for unit-lister operations
#[derive(Error, Diagnostic, Debug)]
pub enum ListerError {
    // Model errors
    #[error("Unit model not found: {path}")]
    #[diagnostic(
        code(unit_lister::model::not_found),
        help(
            "Pass --model <PATH> or set UNIT_LISTER_MODEL to a host unit model snapshot (JSON)."
        )
    )]
    ModelNotFound { path: String },

    #[error("Failed to read unit model: {path}")]
    #[diagnostic(code(unit_lister::model::read_failed))]
    ModelReadFailed { path: String, reason: String },

    #[error("Failed to parse unit model: {path}")]
    #[diagnostic(
        code(unit_lister::model::parse_failed),
        help("The model file must be a JSON unit model snapshot.")
    )]
    ModelParseFailed { path: String, reason: String },

    // Collection errors
    #[error("Host enumeration failed: {reason}")]
    #[diagnostic(
        code(unit_lister::collect::host_unavailable),
        help("The host could not list its measurable quantities; no partial report is produced.")
    )]
    HostUnavailable { reason: String },

    // Export errors
    #[error("Failed to write export file: {path}")]
    #[diagnostic(code(unit_lister::export::write_failed))]
    ExportWriteFailed { path: String, reason: String },

    #[error("Nothing to export")]
    #[diagnostic(
        code(unit_lister::export::no_target),
        help("Pass --json <PATH> and/or --csv <PATH>.")
    )]
    NothingToExport,

    // Viewer errors
    #[error("Quantity '{query}' not found")]
    #[diagnostic(
        code(unit_lister::show::quantity_not_found),
        help("Match by quantity type id or display name; run 'unit-lister list' to see both.")
    )]
    QuantityNotFound { query: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(unit_lister::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for ListerError {
    fn from(err: std::io::Error) -> Self {
        ListerError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for ListerError {
    fn from(err: serde_json::Error) -> Self {
        ListerError::ModelParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ListerError>;
