use crate::domain::column::ColumnId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BoardError>;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Column not found: {0}")]
    ColumnNotFound(ColumnId),

    #[error("Column ID already in use: {0}")]
    IdCollision(ColumnId),

    #[error("No column IDs left to allocate")]
    IdSpaceExhausted,

    #[error("Invalid column ID format: {0}")]
    InvalidColumnId(String),

    #[error("Index {index} out of range for {len} columns")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("A drag gesture is already in progress")]
    DragInProgress,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
