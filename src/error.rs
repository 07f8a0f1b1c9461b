//! Error types for zcalc.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid digit: {0:?}")]
    InvalidDigit(char),

    #[error("Unknown key: {0}")]
    UnknownKey(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
