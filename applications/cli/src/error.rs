/// CLI error types
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

/// Process-level failures
///
/// Command failures are never errors here; they are reported to the user
/// and the session continues.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Catalogue error: {0}")]
    Catalogue(#[from] reel_storage::StorageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for CliError {
    fn from(err: config::ConfigError) -> Self {
        CliError::Config(err.to_string())
    }
}
