use crate::service::ActionName;
use crate::validation::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrudinatorError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Schema generation error: {0}")]
    SchemaGeneration(String),

    #[error("Parameter validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unknown action: {0}")]
    UnknownAction(String),

    #[error("Action '{0}' has no handler; the host framework's default applies")]
    MissingHandler(ActionName),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error(transparent)]
    Action(#[from] anyhow::Error),
}

impl From<toml::de::Error> for CrudinatorError {
    fn from(err: toml::de::Error) -> Self {
        CrudinatorError::Config(format!("TOML parse error: {}", err))
    }
}

impl From<toml::ser::Error> for CrudinatorError {
    fn from(err: toml::ser::Error) -> Self {
        CrudinatorError::Serialization(format!("TOML serialization error: {}", err))
    }
}

impl From<serde_json::Error> for CrudinatorError {
    fn from(err: serde_json::Error) -> Self {
        CrudinatorError::Serialization(format!("JSON error: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, CrudinatorError>;
