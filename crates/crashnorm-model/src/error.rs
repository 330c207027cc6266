use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid zip code: {0:?} (expected exactly 5 ASCII digits)")]
    InvalidZipCode(String),
    #[error("unknown borough: {0:?}")]
    UnknownBorough(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
