use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Employee not found: position {index} is outside 0..{len}")]
    NotFound { index: usize, len: usize },

    #[error("Employee not found: {0}")]
    UnknownEmployee(Uuid),

    #[error("This email is already registered: {0}")]
    DuplicateEmail(String),

    #[error("Invalid employee: {0}")]
    Invalid(String),

    #[error("Invalid bonus amount: {0}")]
    InvalidAmount(f64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, RosterError>;
