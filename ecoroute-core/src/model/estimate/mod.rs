pub mod estimate_ops;

mod cost_estimate;
mod scoring_config;

pub use cost_estimate::{CostEstimate, EstimatedRoute};
pub use scoring_config::{BlendWeights, ScoringConfig};
