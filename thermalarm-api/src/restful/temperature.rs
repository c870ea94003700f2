use std::fmt;

use serde::{Deserialize, Serialize};

pub const TEMPERATURE_READ: &str = "temperature/read";
pub const TEMPERATURE_LIMITS: &str = "temperature/limits";
pub const TEMPERATURE_SET_LIMITS: &str = "temperature/setlimits";

/// Query carried by `temperature/setlimits`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SetLimitsQuery {
    /// New lower bound in Celsius.
    pub min: f64,
    /// New upper bound in Celsius.
    pub max: f64,
}

impl fmt::Display for SetLimitsQuery {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "min={}&max={}", self.min, self.max)
    }
}
