use serde::{Deserialize, Deserializer, Serialize};

/// an instruction type code attached to a navigation step by the routing provider.
///
/// codes are opaque to this crate except for the closed set of non-maneuver codes
/// from the provider's instruction enumeration: [`StepTypeCode::ARRIVE`] and
/// [`StepTypeCode::DEPART`]. every other code is counted as a turn.
///
/// <https://giscience.github.io/openrouteservice/api-reference/endpoints/directions/instruction-types>
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct StepTypeCode(pub i64);

impl StepTypeCode {
    /// "goal" instruction, final step of a segment
    pub const ARRIVE: StepTypeCode = StepTypeCode(10);
    /// "depart" instruction, first step of a segment
    pub const DEPART: StepTypeCode = StepTypeCode(11);

    pub fn is_turn(&self) -> bool {
        *self != Self::ARRIVE && *self != Self::DEPART
    }

    /// reads a code from any JSON value. integers and integral floats
    /// (`10`, `10.0`) are codes; anything else (strings, fractions, booleans,
    /// null) has no code.
    pub fn from_json(value: &serde_json::Value) -> Option<StepTypeCode> {
        let serde_json::Value::Number(n) = value else {
            return None;
        };
        n.as_i64()
            .or_else(|| {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && f.abs() <= i64::MAX as f64)
                    .map(|f| f as i64)
            })
            .map(StepTypeCode)
    }
}

/// lenient decoding of a step's `type` field. values without a code decode as
/// `None` instead of failing the whole response.
pub(super) fn deserialize_lenient<'de, D>(d: D) -> Result<Option<StepTypeCode>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(d)?;
    Ok(StepTypeCode::from_json(&value))
}
