use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("File could not be read or written: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to (de)serialize dataset JSON: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid generator parameter: {0}")]
    InvalidParameter(String),

    #[error("Dataset violates an invariant: {0}")]
    InvalidDataset(String),
}

pub type Result<T> = std::result::Result<T, Error>;
