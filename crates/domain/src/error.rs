//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`ScurryError`]
//! via `#[from]` (validation, not-found) or by boxing (storage, so the
//! domain crate stays free of adapter dependencies).

/// Top-level error type crossing layer boundaries.
#[derive(Debug, thiserror::Error)]
pub enum ScurryError {
    /// A domain invariant was violated by caller input.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The addressed record does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The persistence layer failed; not retried.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Invariant violations on squirrel attributes.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// `name` was missing or empty.
    #[error("name must not be empty")]
    EmptyName,

    /// `size` was missing or empty.
    #[error("size must not be empty")]
    EmptySize,
}

/// An id-addressed lookup that matched nothing.
#[derive(Debug, thiserror::Error)]
#[error("{entity} with id {id} not found")]
pub struct NotFoundError {
    /// Entity kind, e.g. `"Squirrel"`.
    pub entity: &'static str,
    /// The id that failed to resolve, as given by the caller.
    pub id: String,
}
