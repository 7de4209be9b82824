/// rounds a value to a fixed number of decimal places.
///
/// rounding is performed on the exact decimal expansion of the binary value
/// (via the float formatter) instead of scaling by a power of ten, so values
/// such as `2.675` round the same way a correctly-rounded decimal formatter
/// would and no intermediate `x * 10^n` error is introduced.
///
/// non-finite values are returned unchanged.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let formatted = format!("{value:.decimals$}");
    formatted.parse::<f64>().unwrap_or(value)
}
