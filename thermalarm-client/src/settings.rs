use std::env;
use std::time::Duration;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Logger {
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    /// Base URL every resource path is joined onto
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Polling {
    pub interval_ms: u64,
    pub request_timeout_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Haptic {
    pub short_pulse_ms: u64,
    pub long_pulse_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub logger: Logger,
    pub device: Device,
    pub polling: Polling,
    pub haptic: Haptic,
}

impl Default for Polling {
    fn default() -> Self {
        Self {
            interval_ms: 1500,
            request_timeout_ms: 1200,
        }
    }
}

impl Default for Haptic {
    fn default() -> Self {
        Self {
            short_pulse_ms: 500,
            long_pulse_ms: 1500,
        }
    }
}

impl Polling {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Per-request timeout, never longer than one poll interval.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms.min(self.interval_ms))
    }
}

impl Haptic {
    pub fn short_pulse(&self) -> Duration {
        Duration::from_millis(self.short_pulse_ms)
    }

    pub fn long_pulse(&self) -> Duration {
        Duration::from_millis(self.long_pulse_ms)
    }
}

impl Settings {
    pub fn new() -> Result<Self> {
        let run_mode = env::var("RUN_MODE").unwrap_or("development".into());

        let settings = Config::builder()
            .add_source(File::with_name("configs/default"))
            .add_source(File::with_name(&format!("configs/{run_mode}")).required(false))
            .add_source(Environment::default().separator("__"))
            .build()?
            .try_deserialize()?;

        Ok(settings)
    }
}
