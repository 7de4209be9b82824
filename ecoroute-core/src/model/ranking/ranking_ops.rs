use std::cmp::Ordering;

use itertools::Itertools;

use super::{normalize_ops, RouteRanking, ScoredRoute};
use crate::model::estimate::{BlendWeights, EstimatedRoute};
use crate::model::RouteScoringError;
use crate::util::rounding::round_to;

/// scores every route against the whole set and selects the cheapest,
/// greenest and best-balanced routes.
///
/// the cost and emissions columns are normalized separately and blended as
/// `weights.cost * cost + weights.emissions * emissions`. when several routes
/// tie on a selection key the one earliest in the input wins.
pub fn rank(
    routes: Vec<EstimatedRoute>,
    weights: &BlendWeights,
) -> Result<RouteRanking, RouteScoringError> {
    let costs: Vec<f64> = routes.iter().map(|r| r.total_cost).collect();
    let emissions: Vec<f64> = routes.iter().map(|r| r.emissions_kg).collect();
    let norm_costs = normalize_ops::normalize(&costs)?;
    let norm_emissions = normalize_ops::normalize(&emissions)?;

    let scored: Vec<ScoredRoute> = routes
        .into_iter()
        .zip(norm_costs.iter().zip(norm_emissions.iter()))
        .map(|(route, (c, e))| {
            let score = round_to(weights.cost * c + weights.emissions * e, 4);
            ScoredRoute::new(route, score)
        })
        .collect();

    let cheapest = select_min(&scored, |r| r.total_cost())?;
    let greenest = select_min(&scored, |r| r.emissions_kg())?;
    let best_balanced = select_min(&scored, |r| r.score)?;
    log::info!(
        "ranked {} routes: cheapest={}, greenest={}, best_balanced={}",
        scored.len(),
        cheapest.route_id(),
        greenest.route_id(),
        best_balanced.route_id()
    );

    Ok(RouteRanking {
        routes: scored,
        cheapest,
        greenest,
        best_balanced,
    })
}

/// left-to-right minimum scan over a key. the first of several equal minima
/// is returned, with `-0.0` and `0.0` comparing equal.
fn select_min<F>(routes: &[ScoredRoute], key: F) -> Result<ScoredRoute, RouteScoringError>
where
    F: Fn(&ScoredRoute) -> f64,
{
    routes
        .iter()
        .position_min_by(|a, b| key(a).partial_cmp(&key(b)).unwrap_or(Ordering::Equal))
        .map(|idx| routes[idx].clone())
        .ok_or(RouteScoringError::EmptyRouteSet)
}
