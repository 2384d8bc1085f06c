use thiserror::Error;
use uuid::Uuid;

/// Error type that captures every failure the dealership core can report.
#[derive(Debug, Error)]
pub enum DealerError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: Uuid },
    #[error("invalid status transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },
    #[error("invalid reference: {0}")]
    Reference(String),
    #[error("margin is undefined for a zero purchase price")]
    DivisionUndefined,
}

impl DealerError {
    pub fn not_found(entity: &'static str, id: Uuid) -> Self {
        Self::NotFound { entity, id }
    }
}
