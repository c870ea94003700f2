mod alarm;
mod temperature;

pub use alarm::*;
pub use temperature::*;

use std::fmt;

/// A named operation exposed by the alarm device.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resource {
    AlarmStatus,
    AlarmOn,
    AlarmOff,
    TemperatureRead,
    TemperatureLimits,
    SetLimits(SetLimitsQuery),
}

impl Resource {
    /// Route relative to the device base URL, without a leading slash.
    pub fn path(&self) -> &'static str {
        match self {
            Resource::AlarmStatus => ALARM_STATUS,
            Resource::AlarmOn => ALARM_ON,
            Resource::AlarmOff => ALARM_OFF,
            Resource::TemperatureRead => TEMPERATURE_READ,
            Resource::TemperatureLimits => TEMPERATURE_LIMITS,
            Resource::SetLimits(_) => TEMPERATURE_SET_LIMITS,
        }
    }

    pub fn query(&self) -> Option<String> {
        match self {
            Resource::SetLimits(query) => Some(query.to_string()),
            _ => None,
        }
    }

    /// Route plus query string, ready to be joined onto a base URL.
    pub fn target(&self) -> String {
        match self.query() {
            Some(query) => format!("{}?{}", self.path(), query),
            None => self.path().to_string(),
        }
    }

    pub fn switch(on: bool) -> Self {
        if on { Resource::AlarmOn } else { Resource::AlarmOff }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.target())
    }
}
