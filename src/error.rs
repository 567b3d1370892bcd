//! Library error type

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = PackError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PackError {
    #[error("failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to prepare output directory '{path}': {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write to standard output: {0}")]
    Stdout(#[source] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] Box<figment::Error>),

    #[error("config file '{0}' does not exist")]
    MissingConfig(PathBuf),

    #[error("chunk multiplier must be at least 1")]
    ZeroMultiplier,
}

impl From<figment::Error> for PackError {
    fn from(err: figment::Error) -> Self {
        PackError::Config(Box::new(err))
    }
}
