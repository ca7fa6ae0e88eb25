//! Error types for site builds and page sessions

use thiserror::Error;

use crate::content::ContentWarning;

/// Result type alias for folio operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading content, building a page or driving a
/// headless session
#[derive(Error, Debug)]
pub enum Error {
    /// Content or build configuration could not be read or parsed
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// The page skeleton has no element with the given id
    #[error("Page skeleton has no container with id `{0}`")]
    MissingContainer(String),

    /// The markup around a container could not be rewritten
    #[error("Rendering failed: {0}")]
    RenderError(String),

    /// Content checks reported problems and strict mode was requested
    #[error("Content check found {} warning(s)", .0.len())]
    ContentWarnings(Vec<ContentWarning>),

    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::ConfigError(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::ConfigError(err.to_string())
    }
}
