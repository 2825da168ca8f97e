use thiserror::Error;

/// Errors surfaced by the catalog services.
///
/// Validation failures are raised before any storage call; storage and
/// publish failures are propagated unchanged, retries belong to the
/// collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("{0}")]
    Validation(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("event publish failed: {0}")]
    Publish(String),
}
