use serde::{Deserialize, Serialize};

use super::{step_type, StepTypeCode};
use crate::model::RouteScoringError;

/// the body of a directions response from the routing provider. only the
/// fields used for scoring are modeled, everything else is ignored.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct RawRouteResponse {
    /// candidate routes. an absent field is read as an empty list.
    #[serde(default)]
    pub routes: Vec<RawRoute>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct RawRoute {
    #[serde(default)]
    pub summary: RawSummary,
    #[serde(default)]
    pub segments: Vec<RawSegment>,
    /// opaque route geometry (encoded polyline, GeoJSON, ...). never inspected.
    #[serde(default)]
    pub geometry: serde_json::Value,
}

/// route totals. the provider omits zero-valued fields, so both default to 0.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default)]
pub struct RawSummary {
    /// meters
    #[serde(default)]
    pub distance: f64,
    /// seconds
    #[serde(default)]
    pub duration: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct RawSegment {
    #[serde(default)]
    pub steps: Vec<RawStep>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default)]
pub struct RawStep {
    /// codes that are not integral numbers decode as `None`
    #[serde(
        rename = "type",
        default,
        deserialize_with = "step_type::deserialize_lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub step_type: Option<StepTypeCode>,
}

impl RawRouteResponse {
    pub fn from_json_value(value: serde_json::Value) -> Result<Self, RouteScoringError> {
        serde_json::from_value(value).map_err(|e| RouteScoringError::Deserialization(e.to_string()))
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, RouteScoringError> {
        serde_json::from_slice(bytes).map_err(|e| RouteScoringError::Deserialization(e.to_string()))
    }
}

impl RawRoute {
    /// all steps of all segments, in travel order.
    pub fn steps(&self) -> impl Iterator<Item = &RawStep> {
        self.segments.iter().flat_map(|s| s.steps.iter())
    }
}

impl RawStep {
    /// a step without a type code falls outside the arrive/depart set and
    /// is therefore treated as a turn.
    pub fn is_turn(&self) -> bool {
        self.step_type.map(|t| t.is_turn()).unwrap_or(true)
    }
}
