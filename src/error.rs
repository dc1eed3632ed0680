//! Crate-level error type and `Result` alias.
//! Wraps I/O, decode, encode and config errors. `ProcessingFailure` ties an
//! error to the input file that caused it so batch callers can report it and
//! move on.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Decode error: {0}")]
    Decode(#[source] image::ImageError),

    #[error("Encode error: {0}")]
    Encode(#[source] image::ImageError),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Not a directory: {}", .path.display())]
    NotADirectory { path: PathBuf },
}

/// A failure while processing one input file. Never fatal to a batch.
#[derive(Debug, Error)]
#[error("Error processing {}: {source}", .input.display())]
pub struct ProcessingFailure {
    pub input: PathBuf,
    #[source]
    pub source: Error,
}

impl ProcessingFailure {
    pub fn new(input: impl Into<PathBuf>, source: Error) -> Self {
        Self {
            input: input.into(),
            source,
        }
    }
}
