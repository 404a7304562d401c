use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse {path}: {message}")]
    Parse {
        path: PathBuf,
        message: String,
    },

    #[error("invalid configuration: {0}")]
    Invalid(String),

    #[error("serialize config: {0}")]
    Serialize(String),
}

pub type SettingsResult<T> = Result<T, SettingsError>;
