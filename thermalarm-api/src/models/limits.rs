use serde::{Deserialize, Serialize};

use super::PayloadError;

/// Safe temperature band configured on the device, in Celsius.
///
/// The device is authoritative for `min <= max`; nothing here enforces it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureLimits {
    /// Lower bound of the safe band (inclusive)
    pub min: f64,
    /// Upper bound of the safe band (inclusive)
    pub max: f64,
}

impl TemperatureLimits {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Decodes the body served by `temperature/limits`.
    pub fn from_json(payload: &str) -> Result<Self, PayloadError> {
        serde_json::from_str(payload).map_err(|e| PayloadError::Limits(e.to_string()))
    }

    pub fn contains(&self, temperature: f64) -> bool {
        temperature >= self.min && temperature <= self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json() {
        let limits = TemperatureLimits::from_json(r#"{"min": 18.0, "max": 26.5}"#).unwrap();
        assert_eq!(limits, TemperatureLimits::new(18.0, 26.5));

        let limits = TemperatureLimits::from_json(r#"{"max": 30, "min": -5}"#).unwrap();
        assert_eq!(limits.min, -5.0);
        assert_eq!(limits.max, 30.0);
    }

    #[test]
    fn test_from_json_rejects_partial_object() {
        assert!(matches!(
            TemperatureLimits::from_json(r#"{"min": 18.0}"#),
            Err(PayloadError::Limits(_))
        ));
        assert!(TemperatureLimits::from_json("").is_err());
    }

    #[test]
    fn test_contains_is_closed() {
        let limits = TemperatureLimits::new(18.0, 26.0);
        assert!(limits.contains(18.0));
        assert!(limits.contains(26.0));
        assert!(!limits.contains(17.99));
        assert!(!limits.contains(26.01));
    }
}
