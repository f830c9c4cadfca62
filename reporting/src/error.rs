//! Error types for the reporting engine
//!
//! Aggregation itself never errors on data shape (bad fields degrade to
//! defaults); only caller mistakes on the export path surface here.

use thiserror::Error;

/// Errors raised by export projection and CSV serialization
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("duplicate export column header: {0}")]
    DuplicateHeader(String),

    #[error("export requires at least one column")]
    NoColumns,

    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV writer error: {0}")]
    Writer(String),
}

/// Result type alias for export operations
pub type ExportResult<T> = Result<T, ExportError>;
