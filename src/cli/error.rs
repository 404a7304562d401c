//! CLI-level errors (wraps settings and argument errors)

use thiserror::Error;

use crate::errors::SettingsError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Settings(#[from] SettingsError),

    #[error("cannot determine config directory (no home directory?)")]
    NoConfigDir,

    /// Rendered clap message, already carries its own "error:" prefix and usage
    #[error("{0}")]
    Usage(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl From<clap::Error> for CliError {
    fn from(e: clap::Error) -> Self {
        CliError::Usage(e.to_string())
    }
}

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Settings(_) | CliError::NoConfigDir => crate::exitcode::CONFIG,
        }
    }
}
