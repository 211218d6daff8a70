//! Dataset loading error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading the dataset.
///
/// Every variant is fatal at startup: the dashboard has no partial-result
/// or retry policy for a dataset it cannot fully read.
#[derive(Debug, Error)]
pub enum DataError {
    /// The dataset file could not be opened or read.
    #[error("failed to read dataset at {path}: {source}")]
    Io {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A row or header failed to parse; the csv error carries the record
    /// position where available.
    #[error("malformed dataset: {0}")]
    Csv(#[from] csv::Error),

    /// The file parsed but held no data rows.
    #[error("dataset contains no rows")]
    EmptyDataset,
}

impl DataError {
    /// Creates an I/O error tagged with the offending path.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
