#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RouteScoringError {
    #[error("route set is empty, cannot normalize or rank zero routes")]
    EmptyRouteSet,
    #[error("invalid scoring configuration: {0}")]
    InvalidConfiguration(String),
    #[error("failed to deserialize provider response: {0}")]
    Deserialization(String),
}
