//! Error types.
//!
//! Tabs themselves never fail; only loading configuration and the
//! terminal plumbing around them can.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TabError {
    #[error("invalid tab config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("unknown orientation: {0}")]
    InvalidOrientation(String),

    #[error("unknown width mode: {0}")]
    InvalidWidthMode(String),

    #[error("tab id must not be empty")]
    EmptyId,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("logger already initialised: {0}")]
    Logger(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, TabError>;
