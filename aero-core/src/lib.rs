pub mod query;
pub mod search;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
