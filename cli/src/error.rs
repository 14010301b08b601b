use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("invalid selection '{0}': expected <category>=<item-id>")]
    InvalidSelection(String),

    #[error("failed to initialize logging: {0}")]
    Logging(String),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Core(#[from] pcforge_core::BuilderError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
