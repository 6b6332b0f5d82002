use std::io;

use config::ConfigError;
use thiserror::Error;

pub(crate) type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub(crate) enum ApplicationError {
    #[error("Error regarding config: {0}")]
    ConfigError(#[from] ConfigError),
    #[error("System input/output error: {0}")]
    IoError(#[from] io::Error),
    #[error("Time error: {0}")]
    TimeError(#[from] jiff::Error),
    #[error("Failed to write config as TOML: {0}")]
    TomlError(#[from] toml::ser::Error),
    #[error("Not a date or timestamp: {0:?}")]
    InvalidInstant(String),
}
