use model::pagination::error::IncrementalError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackerError {
    /// The tracked column is missing from the row.
    #[error("Tracked column not found in row: {0}")]
    ColumnNotFound(String),

    /// The tracked value could not become an offset.
    #[error("Incremental value error: {0}")]
    Incremental(#[from] IncrementalError),
}
