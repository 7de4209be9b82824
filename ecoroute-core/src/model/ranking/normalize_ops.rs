use itertools::{Itertools, MinMaxResult};

use crate::model::RouteScoringError;

/// added to the value range so that a column of identical values maps to 0
/// instead of dividing by zero.
pub const EPSILON: f64 = 1e-6;

/// min-max scales a column of values into `[0, 1)`.
///
/// each value becomes `(v - min) / (max - min + EPSILON)`. columns must be
/// normalized independently; an empty column has no range and is an error.
pub fn normalize(values: &[f64]) -> Result<Vec<f64>, RouteScoringError> {
    let (min, max) = match values.iter().copied().minmax() {
        MinMaxResult::NoElements => return Err(RouteScoringError::EmptyRouteSet),
        MinMaxResult::OneElement(v) => (v, v),
        MinMaxResult::MinMax(min, max) => (min, max),
    };
    let denominator = max - min + EPSILON;
    let result = values.iter().map(|v| (v - min) / denominator).collect();
    Ok(result)
}
