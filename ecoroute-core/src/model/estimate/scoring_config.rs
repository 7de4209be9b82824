use serde::{Deserialize, Serialize};

use crate::model::RouteScoringError;

/// economic and environmental assumptions applied to every route of a run.
/// each field falls back to its default when missing from a configuration
/// source, so a file may override any subset of them.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ScoringConfig {
    /// kg CO2 emitted per km driven
    pub emission_factor: f64,
    /// currency per liter of fuel
    pub fuel_price: f64,
    /// km driven per liter of fuel
    pub mileage: f64,
    /// currency per minute of travel time
    pub value_of_time: f64,
    pub weights: BlendWeights,
}

/// weights of the normalized cost and normalized emissions terms in the
/// blended route score. conventionally `cost + emissions == 1.0`, which is
/// not enforced.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(default)]
pub struct BlendWeights {
    pub cost: f64,
    pub emissions: f64,
}

pub const DEFAULT_EMISSION_FACTOR: f64 = 0.271;
pub const DEFAULT_FUEL_PRICE: f64 = 105.0;
pub const DEFAULT_MILEAGE: f64 = 15.0;
pub const DEFAULT_VALUE_OF_TIME: f64 = 2.0;

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            emission_factor: DEFAULT_EMISSION_FACTOR,
            fuel_price: DEFAULT_FUEL_PRICE,
            mileage: DEFAULT_MILEAGE,
            value_of_time: DEFAULT_VALUE_OF_TIME,
            weights: BlendWeights::default(),
        }
    }
}

impl Default for BlendWeights {
    fn default() -> Self {
        Self {
            cost: 0.5,
            emissions: 0.5,
        }
    }
}

impl ScoringConfig {
    /// checks that the constants can produce finite estimates. route inputs
    /// themselves are never validated.
    pub fn validate(&self) -> Result<(), RouteScoringError> {
        let named = [
            ("emission_factor", self.emission_factor),
            ("fuel_price", self.fuel_price),
            ("mileage", self.mileage),
            ("value_of_time", self.value_of_time),
            ("weights.cost", self.weights.cost),
            ("weights.emissions", self.weights.emissions),
        ];
        if let Some((name, value)) = named.iter().find(|(_, v)| !v.is_finite()) {
            return Err(RouteScoringError::InvalidConfiguration(format!(
                "{name} must be a finite number, found {value}"
            )));
        }
        if self.mileage == 0.0 {
            return Err(RouteScoringError::InvalidConfiguration(String::from(
                "mileage cannot be zero",
            )));
        }
        Ok(())
    }
}
