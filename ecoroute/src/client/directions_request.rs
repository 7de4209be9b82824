use serde::{Deserialize, Serialize};

use crate::app::EcorouteAppError;

pub const DEFAULT_ENDPOINT: &str = "https://api.openrouteservice.org/v2/directions/driving-car";

/// request body for the provider's directions endpoint.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DirectionsRequest {
    /// waypoints as `[longitude, latitude]` pairs, origin first
    pub coordinates: Vec<[f64; 2]>,
    #[serde(default)]
    pub alternative_routes: AlternativeRoutes,
}

/// asks the provider for candidate routes beyond the fastest one.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct AlternativeRoutes {
    /// maximum number of routes returned
    pub target_count: usize,
    /// maximum fraction of the fastest route an alternative may share
    pub share_factor: f64,
}

impl Default for AlternativeRoutes {
    fn default() -> Self {
        Self {
            target_count: 3,
            share_factor: 0.6,
        }
    }
}

impl DirectionsRequest {
    pub fn validate(&self) -> Result<(), EcorouteAppError> {
        if self.coordinates.len() < 2 {
            return Err(EcorouteAppError::InvalidUserInput(format!(
                "directions request requires at least 2 coordinates, found {}",
                self.coordinates.len()
            )));
        }
        if let Some([lon, lat]) = self
            .coordinates
            .iter()
            .find(|[lon, lat]| !(-180.0..=180.0).contains(lon) || !(-90.0..=90.0).contains(lat))
        {
            return Err(EcorouteAppError::InvalidUserInput(format!(
                "coordinate [{lon}, {lat}] is not a valid [longitude, latitude] pair"
            )));
        }
        let alt = &self.alternative_routes;
        if alt.target_count == 0 {
            return Err(EcorouteAppError::InvalidUserInput(String::from(
                "alternative_routes.target_count must be at least 1",
            )));
        }
        if alt.share_factor.is_nan() || alt.share_factor <= 0.0 || alt.share_factor > 1.0 {
            return Err(EcorouteAppError::InvalidUserInput(format!(
                "alternative_routes.share_factor must be in range (0, 1], found {}",
                alt.share_factor
            )));
        }
        Ok(())
    }
}
