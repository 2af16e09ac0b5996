use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    /// A required operand is missing or the operation is not supported.
    #[error("{0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),
}

impl StoreError {
    pub fn missing_flag(name: &str) -> Self {
        StoreError::Validation(format!("-{} flag has to be specified", name))
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
