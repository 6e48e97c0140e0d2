use std::io;
use std::path::PathBuf;

/// Errors that can occur during source resolution
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid source")]
    InvalidSource,

    #[error("no wa.mod manifest found for {0}")]
    ManifestRequired(PathBuf),

    #[error("invalid manifest {path}: {reason}")]
    ManifestInvalid { path: PathBuf, reason: String },

    #[error("wat2wasm not found")]
    ConverterUnavailable,

    #[error("{0}")]
    ConverterFailed(String),
}

/// Result type alias for resolution operations
pub type Result<T> = std::result::Result<T, Error>;
