use thiserror::Error;

#[derive(Error, Debug)]
pub enum TuduError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Todo with ID {0} not found")]
    NotFound(u32),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    #[error("Date parse error: {0}")]
    DateParse(String),

    #[error("Undo failed: {0}")]
    Undo(String),
}

pub type Result<T> = std::result::Result<T, TuduError>;
