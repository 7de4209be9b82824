use serde::{Deserialize, Serialize};

use super::ScoredRoute;

/// result of ranking a route set: every scored route in input order along
/// with the three distinguished selections.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RouteRanking {
    pub routes: Vec<ScoredRoute>,
    /// route with the lowest total cost
    pub cheapest: ScoredRoute,
    /// route with the lowest emissions
    pub greenest: ScoredRoute,
    /// route with the lowest blended score
    pub best_balanced: ScoredRoute,
}
