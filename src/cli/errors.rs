use std::path::PathBuf;

use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to load config {path:?}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: bgstrip::Error,
    },

    #[error("No extensions given; pass at least one with --extensions")]
    EmptyExtensions,

    #[error(transparent)]
    Strip(#[from] bgstrip::Error),
}
