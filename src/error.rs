use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Loader errors
// ---------------------------------------------------------------------------

/// The dataset could not be acquired or does not have the expected shape.
///
/// The loader never hands out a partially built table; any of these aborts
/// the load as a whole.
#[derive(Debug, Error)]
pub enum DataUnavailableError {
    #[error("cannot open dataset at {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("dataset header is missing")]
    MissingHeader,

    #[error("invalid dataset header: {0}")]
    InvalidHeader(String),

    #[error("row {row}: missing value in column '{column}'")]
    MissingValue { row: usize, column: &'static str },

    #[error("row {row}: non-finite value in column '{column}'")]
    NonFinite { row: usize, column: &'static str },

    #[error("row {row}: unknown class label {label}")]
    UnknownClass { row: usize, label: i64 },

    #[error("header declares {declared} rows but {found} were read")]
    RowCount { declared: usize, found: usize },

    #[error("dataset contains no rows")]
    Empty,
}

// ---------------------------------------------------------------------------
// Render errors
// ---------------------------------------------------------------------------

/// The figure could not be produced.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Holds the backend's message; `eframe::Error` is neither `Send` nor `Sync`.
    #[error("rendering backend failed: {0}")]
    Backend(String),

    #[error("invalid figure: {0}")]
    InvalidFigure(String),
}
