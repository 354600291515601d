use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("No input text provided")]
    EmptyInput,

    #[error("Input is not valid UTF-8: {0}")]
    InvalidEncoding(#[from] std::string::FromUtf8Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Keyword extraction failed: {message}")]
    Extraction { message: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidSettingError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, ExtractError>;
