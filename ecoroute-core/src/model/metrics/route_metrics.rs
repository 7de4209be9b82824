use serde::{Deserialize, Serialize};
use uom::si::f64::{Length, Time};
use uom::si::{length, time};

use crate::model::provider::RawRoute;
use crate::util::rounding::round_to;

/// per-route metrics derived from a provider route.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RouteMetrics {
    /// position of the route in the provider's route list
    pub route_id: usize,
    /// kilometers, rounded to 3 decimal places
    pub distance_km: f64,
    /// minutes, rounded to 2 decimal places
    pub duration_min: f64,
    /// number of navigation steps across all segments
    pub steps: usize,
    /// number of steps that are neither the depart nor the arrive step
    pub turns: usize,
    /// provider geometry, passed through untouched
    pub geometry: serde_json::Value,
}

impl RouteMetrics {
    pub fn from_raw(route_id: usize, route: &RawRoute) -> RouteMetrics {
        let distance = Length::new::<length::meter>(route.summary.distance);
        let duration = Time::new::<time::second>(route.summary.duration);
        let (steps, turns) = route.steps().fold((0, 0), |(steps, turns), step| {
            (steps + 1, turns + usize::from(step.is_turn()))
        });
        RouteMetrics {
            route_id,
            distance_km: round_to(distance.get::<length::kilometer>(), 3),
            duration_min: round_to(duration.get::<time::minute>(), 2),
            steps,
            turns,
            geometry: route.geometry.clone(),
        }
    }
}
