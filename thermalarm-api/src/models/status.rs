use super::PayloadError;

/// Interprets the `alarm/status` body.
///
/// Only a case-insensitive `true` means on; any other text reads as off.
pub fn parse_status(payload: &str) -> bool {
    payload.trim().eq_ignore_ascii_case("true")
}

/// Interprets the `temperature/read` body as degrees Celsius.
pub fn parse_temperature(payload: &str) -> Result<f64, PayloadError> {
    parse_real(payload).map_err(PayloadError::Temperature)
}

/// Interprets a user or query supplied bound.
pub fn parse_bound(value: &str) -> Result<f64, PayloadError> {
    parse_real(value).map_err(PayloadError::Bound)
}

fn parse_real(value: &str) -> Result<f64, String> {
    let trimmed = value.trim();
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(trimmed.to_string()),
    }
}
