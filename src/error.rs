use crate::body::BodyId;
use thiserror::Error;

/// Errors surfaced to the calling layer. Nothing here is fatal to the
/// simulation itself.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid {field}: {value} is not a finite number")]
    Validation { field: &'static str, value: f64 },

    #[error("no body with id {0}")]
    NotFound(BodyId),
}
