use std::fmt;

use thermalarm_api::TemperatureLimits;

/// Where a reading falls relative to the configured safe band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    Cold,
    Warm,
    Hot,
}

impl Zone {
    pub fn is_extreme(&self) -> bool {
        !matches!(self, Zone::Warm)
    }

    pub fn backdrop(&self) -> Backdrop {
        match self {
            Zone::Cold => Backdrop::Cold,
            Zone::Warm => Backdrop::Neutral,
            Zone::Hot => Backdrop::Hot,
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Zone::Cold => write!(f, "cold"),
            Zone::Warm => write!(f, "warm"),
            Zone::Hot => write!(f, "hot"),
        }
    }
}

/// Classifies a reading. Both bounds belong to [`Zone::Warm`].
///
/// Total over all inputs: a NaN reading compares false against both bounds
/// and lands in [`Zone::Hot`].
pub fn classify(temperature: f64, limits: &TemperatureLimits) -> Zone {
    if temperature < limits.min {
        Zone::Cold
    } else if limits.contains(temperature) {
        Zone::Warm
    } else {
        Zone::Hot
    }
}

/// Visual treatment applied to the monitoring surface background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backdrop {
    /// Alarm off or state unknown
    Idle,
    Cold,
    Neutral,
    Hot,
}

impl Backdrop {
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Backdrop::Idle => (255, 255, 255),
            Backdrop::Cold => (0, 128, 255),
            Backdrop::Neutral => (127, 255, 0),
            Backdrop::Hot => (250, 128, 114),
        }
    }
}
