use super::RouteMetrics;
use crate::model::provider::RawRouteResponse;

/// extracts one [`RouteMetrics`] per provider route, index-aligned with the
/// provider's route list. an empty response yields an empty result; deciding
/// whether that is an error is left to the caller.
pub fn extract_metrics(response: &RawRouteResponse) -> Vec<RouteMetrics> {
    response
        .routes
        .iter()
        .enumerate()
        .map(|(route_id, route)| {
            let metrics = RouteMetrics::from_raw(route_id, route);
            log::debug!(
                "route {}: {} km, {} min, {} steps, {} turns",
                metrics.route_id,
                metrics.distance_km,
                metrics.duration_min,
                metrics.steps,
                metrics.turns
            );
            metrics
        })
        .collect()
}
