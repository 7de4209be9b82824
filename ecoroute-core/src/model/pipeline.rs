use crate::model::{
    estimate::{estimate_ops, ScoringConfig},
    metrics::extract_ops,
    provider::RawRouteResponse,
    ranking::{ranking_ops, RouteRanking},
    RouteScoringError,
};

/// runs the full scoring pipeline over a provider response:
/// extract metrics, estimate cost and emissions, normalize and rank.
///
/// a response without routes fails with [`RouteScoringError::EmptyRouteSet`];
/// no partial ranking is ever returned.
pub fn score_routes(
    response: &RawRouteResponse,
    config: &ScoringConfig,
) -> Result<RouteRanking, RouteScoringError> {
    config.validate()?;
    let metrics = extract_ops::extract_metrics(response);
    if metrics.is_empty() {
        return Err(RouteScoringError::EmptyRouteSet);
    }
    let estimated = estimate_ops::estimate_all(metrics, config);
    ranking_ops::rank(estimated, &config.weights)
}
