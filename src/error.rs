use thiserror::Error;

#[derive(Error, Debug)]
pub enum YijingError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("Invalid block size: {0} bytes. Must be exactly 3")]
    InvalidBlockSize(usize),

    #[error("Invalid line value: {0}. Must be 6, 7, 8 or 9")]
    InvalidLine(u8),

    #[error("Invalid hexagram: {0}. Must be between 1 and 64")]
    InvalidHexagram(u8),

    #[error("Unknown trigram: {0}")]
    UnknownTrigram(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Entropy source error: {0}")]
    Entropy(String),
}

pub type Result<T> = std::result::Result<T, YijingError>;
