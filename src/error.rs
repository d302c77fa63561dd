use thiserror::Error;

/// Domain errors for the catalog. All three kinds are terminal for the
/// triggering call; nothing is retried internally, and validation runs fully
/// before any mutation is applied. Infrastructure failures pass through as
/// `Internal` without being translated into one of the domain kinds.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A rating category is missing, mistyped, or outside [0, 10].
    #[error("invalid ratings: {0}")]
    Validation(String),

    /// A non-score field is malformed: empty title/genre, year out of range,
    /// unrecognized content type or platform.
    #[error("invalid field: {0}")]
    Field(String),

    /// The referenced id is unknown or already deleted.
    #[error("no catalog item with id {0}")]
    NotFound(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}
