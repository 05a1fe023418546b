use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong during a run. A missing root folder (and
/// setup failures) abort before any work begins; the per-entry and
/// per-document variants are accumulated and surfaced in the final report
/// without stopping the batch.
#[derive(Error, Debug)]
pub enum Error {
    #[error("source not found: {0}")]
    SourceMissing(PathBuf),

    #[error("failed to parse {path}: {detail}")]
    ParseFailure { path: PathBuf, detail: String },

    #[error("destination already exists: {0}")]
    DestinationExists(PathBuf),

    #[error("source file vanished before rename: {0}")]
    SourceVanished(PathBuf),

    #[error("failed to write {path}: {detail}")]
    WriteFailure { path: PathBuf, detail: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl Error {
    pub fn write_failure(path: &std::path::Path, err: impl std::fmt::Display) -> Self {
        Error::WriteFailure {
            path: path.to_path_buf(),
            detail: err.to_string(),
        }
    }

    pub fn parse_failure(path: &std::path::Path, err: impl std::fmt::Display) -> Self {
        Error::ParseFailure {
            path: path.to_path_buf(),
            detail: err.to_string(),
        }
    }
}
