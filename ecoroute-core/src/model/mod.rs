pub mod estimate;
pub mod metrics;
pub mod pipeline;
pub mod provider;
pub mod ranking;

mod error;

pub use error::RouteScoringError;
