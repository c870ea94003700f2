use std::sync::Arc;

use thermalarm_api::TemperatureLimits;
use tokio::sync::RwLock;
use tokio::time::Instant;

use crate::settings::{Device, Simulation};
use crate::simulate::simulated_temperature;

#[derive(Debug)]
struct DeviceState {
    on: bool,
    limits: TemperatureLimits,
    offline: bool,
    /// Fixed reading overriding the simulation
    pinned: Option<f64>,
}

/// Shared state of the simulated alarm device.
#[derive(Debug, Clone)]
pub struct MockDevice {
    state: Arc<RwLock<DeviceState>>,
    simulation: Arc<Simulation>,
    started: Instant,
}

impl MockDevice {
    pub fn new(device: &Device, simulation: Simulation) -> Self {
        Self {
            state: Arc::new(RwLock::new(DeviceState {
                on: device.initial_on,
                limits: device.limits(),
                offline: false,
                pinned: None,
            })),
            simulation: Arc::new(simulation),
            started: Instant::now(),
        }
    }

    pub async fn is_on(&self) -> bool {
        self.state.read().await.on
    }

    pub async fn switch(&self, on: bool) {
        let mut state = self.state.write().await;
        if state.on != on {
            tracing::info!("alarm switched {}", if on { "on" } else { "off" });
        }
        state.on = on;
    }

    pub async fn limits(&self) -> TemperatureLimits {
        self.state.read().await.limits
    }

    pub async fn set_limits(&self, limits: TemperatureLimits) {
        tracing::info!("limits set to [{}, {}]", limits.min, limits.max);
        self.state.write().await.limits = limits;
    }

    pub async fn temperature(&self) -> f64 {
        match self.state.read().await.pinned {
            Some(temperature) => temperature,
            None => simulated_temperature(self.started.elapsed().as_secs_f64(), &self.simulation),
        }
    }

    /// Replaces the simulated reading with a fixed value, or restores it with `None`.
    pub async fn pin_temperature(&self, temperature: Option<f64>) {
        self.state.write().await.pinned = temperature;
    }

    pub async fn is_offline(&self) -> bool {
        self.state.read().await.offline
    }

    /// While offline every device route answers 503.
    pub async fn set_offline(&self, offline: bool) {
        tracing::info!("device {}", if offline { "offline" } else { "online" });
        self.state.write().await.offline = offline;
    }
}
