use super::{CostEstimate, EstimatedRoute, ScoringConfig};
use crate::model::metrics::RouteMetrics;
use crate::util::rounding::round_to;

/// computes emissions and cost for a single route from the run's constants.
/// inputs are taken as-is, a negative distance yields a negative cost.
pub fn estimate(metrics: &RouteMetrics, config: &ScoringConfig) -> CostEstimate {
    let emissions_kg = round_to(metrics.distance_km * config.emission_factor, 3);
    let fuel_cost = (metrics.distance_km / config.mileage) * config.fuel_price;
    let time_cost = metrics.duration_min * config.value_of_time;
    let total_cost = round_to(fuel_cost + time_cost, 2);
    CostEstimate {
        emissions_kg,
        fuel_cost,
        time_cost,
        total_cost,
    }
}

/// annotates every route with its estimate, preserving order.
pub fn estimate_all(metrics: Vec<RouteMetrics>, config: &ScoringConfig) -> Vec<EstimatedRoute> {
    metrics
        .into_iter()
        .map(|m| {
            let e = estimate(&m, config);
            log::debug!(
                "route {}: {} kg CO2, fuel {:.2} + time {:.2} = {}",
                m.route_id,
                e.emissions_kg,
                e.fuel_cost,
                e.time_cost,
                e.total_cost
            );
            EstimatedRoute::new(m, &e)
        })
        .collect()
}
