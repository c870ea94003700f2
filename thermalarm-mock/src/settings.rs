use std::error::Error;

use serde::{Deserialize, Serialize};
use thermalarm_api::TemperatureLimits;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Logger {
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    pub initial_on: bool,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Simulation {
    /// Mean temperature in Celsius
    pub baseline: f64,
    /// Peak deviation from the baseline
    pub amplitude: f64,
    /// Length of one full swing
    pub period_secs: f64,
    /// Uniform jitter added to every reading
    pub noise: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub logger: Logger,
    pub server: Server,
    pub device: Device,
    pub simulation: Simulation,
}

impl Device {
    pub fn limits(&self) -> TemperatureLimits {
        TemperatureLimits::new(self.min, self.max)
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self {
            baseline: 22.0,
            amplitude: 9.0,
            period_secs: 120.0,
            noise: 0.0,
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, Box<dyn Error>> {
        let settings: Settings = toml::from_str(include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../",
            "configs/mock.toml"
        )))?;

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_settings() {
        let settings = Settings::new().unwrap();
        assert_eq!(settings.device.limits(), TemperatureLimits::new(18.0, 26.0));
        assert!(settings.simulation.period_secs > 0.0);
    }
}
