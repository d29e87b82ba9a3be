use thiserror::Error;

/// Domain-level error type shared across the workspace.
///
/// Absence ([`CoreError::NotFound`]) and malformed input
/// ([`CoreError::Validation`]) are reported distinctly so the HTTP layer
/// can map them to 404 and 400 without inspecting message text.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
