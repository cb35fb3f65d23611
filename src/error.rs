use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CalcError {
    #[error("division by zero")]
    DivisionByZero,
}

/// A single rule violation on an input field.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("user {user_id} not found")]
    UserNotFound { user_id: u32 },
}

impl StoreError {
    /// Field name for validation failures, `None` otherwise.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            StoreError::Validation(err) => Some(err.field),
            StoreError::UserNotFound { .. } => None,
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
