use serde::{Deserialize, Serialize};

use crate::model::metrics::RouteMetrics;

/// monetary cost and emissions of driving one route.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct CostEstimate {
    /// kg CO2, rounded to 3 decimal places
    pub emissions_kg: f64,
    /// unrounded cost of fuel consumed
    pub fuel_cost: f64,
    /// unrounded cost of travel time
    pub time_cost: f64,
    /// fuel cost plus time cost, rounded to 2 decimal places
    pub total_cost: f64,
}

/// a route's metrics annotated with its emissions and total cost.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct EstimatedRoute {
    #[serde(flatten)]
    pub metrics: RouteMetrics,
    pub emissions_kg: f64,
    pub total_cost: f64,
}

impl EstimatedRoute {
    pub fn new(metrics: RouteMetrics, estimate: &CostEstimate) -> EstimatedRoute {
        EstimatedRoute {
            metrics,
            emissions_kg: estimate.emissions_kg,
            total_cost: estimate.total_cost,
        }
    }

    pub fn route_id(&self) -> usize {
        self.metrics.route_id
    }
}
