use thiserror::Error;

use crate::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Base path must not be empty")]
    EmptyBasePath,
    #[error("Base path must start with '/': {0}")]
    MissingLeadingSlash(String),
    #[error("Base path must not end with '/': {0}")]
    TrailingSlash(String),
    #[error("Unknown resource: {0}")]
    UnknownResource(String),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
