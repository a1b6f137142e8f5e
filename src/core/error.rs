//! Error types for dataset loading and query validation.
//!
//! Load-time failures are fatal to dataset construction: there is no partial
//! dataset. Query-time failures are per-call and leave the dataset usable.

use thiserror::Error;

/// Errors produced while loading a dataset or validating query arguments.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// The dataset path is missing or unreadable.
    #[error("dataset unavailable at '{path}': {source}")]
    FileUnavailable {
        /// Path as given by the caller.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A data line does not match the 23-column schema.
    #[error("malformed record at line {line}: {reason}")]
    MalformedRecord {
        /// 1-based physical line number in the input file.
        line: usize,
        /// What failed: field count, integer, float, or date parsing.
        reason: String,
    },

    /// A query was called with an unrecognized or out-of-range argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
