use std::path::PathBuf;

use ecoroute_core::model::RouteScoringError;

#[derive(thiserror::Error, Debug)]
pub enum EcorouteAppError {
    #[error("Invalid input: {0}")]
    InvalidUserInput(String),
    #[error("Routing provider request failed: {0}")]
    UpstreamFailure(String),
    #[error("Error reading from '{path}': {message}")]
    ReadError { path: PathBuf, message: String },
    #[error("Error writing to '{path}': {message}")]
    WriteError { path: PathBuf, message: String },
    #[error("Failed to serialize output: {0}")]
    SerializationError(String),
    #[error(transparent)]
    Scoring(#[from] RouteScoringError),
}
