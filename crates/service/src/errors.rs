use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    pub fn conflict(key: impl std::fmt::Display) -> Self { Self::Conflict(format!("{} already present", key)) }

    /// Input was rejected before touching the store.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Model(_))
    }
}
