use std::fmt;

/// Failure to interpret a payload returned by the alarm device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadError {
    /// Temperature body is not a real number
    Temperature(String),
    /// Limits body is not a `{min, max}` object
    Limits(String),
    /// Query value is not a finite real number
    Bound(String),
}

impl fmt::Display for PayloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Temperature(e) => write!(f, "Invalid temperature: {}", e),
            Self::Limits(e) => write!(f, "Invalid limits: {}", e),
            Self::Bound(e) => write!(f, "Invalid bound: {}", e),
        }
    }
}

impl std::error::Error for PayloadError {}
