use thiserror::Error;

#[derive(Error, Debug)]
pub enum MockError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unknown {kind} '{value}'")]
    UnknownLabel { kind: &'static str, value: String },

    #[error("Invalid config field '{field}': {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type MockResult<T> = Result<T, MockError>;
