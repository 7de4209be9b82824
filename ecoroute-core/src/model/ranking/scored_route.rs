use serde::{Deserialize, Serialize};

use crate::model::estimate::EstimatedRoute;

/// a fully annotated route. the score is relative to the route set it was
/// ranked with and is assigned by [`super::ranking_ops::rank`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ScoredRoute {
    #[serde(flatten)]
    pub route: EstimatedRoute,
    /// weighted sum of normalized cost and normalized emissions, rounded to
    /// 4 decimal places. lower is better.
    pub score: f64,
}

impl ScoredRoute {
    pub(super) fn new(route: EstimatedRoute, score: f64) -> ScoredRoute {
        ScoredRoute { route, score }
    }

    pub fn route_id(&self) -> usize {
        self.route.metrics.route_id
    }

    pub fn total_cost(&self) -> f64 {
        self.route.total_cost
    }

    pub fn emissions_kg(&self) -> f64 {
        self.route.emissions_kg
    }
}
