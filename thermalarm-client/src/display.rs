use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use thermalarm_api::TemperatureLimits;
use tracing::info;

use crate::zone::Backdrop;

pub const TEMPERATURE_NONE: &str = "-- °C";

/// Widgets of the monitoring surface, driven only from its own task.
pub trait Presenter: Send + 'static {
    /// Position of the on/off switch
    fn show_toggle(&mut self, on: bool);

    /// Enables or disables the switch and the configuration entry point
    fn set_interactive(&mut self, enabled: bool);

    fn show_backdrop(&mut self, backdrop: Backdrop);

    /// `None` clears the reading to a placeholder
    fn show_temperature(&mut self, reading: Option<f64>);

    /// Haptic feedback of the given length
    fn pulse(&mut self, duration: Duration);
}

/// Editable fields of the configuration surface.
pub trait ConfigView: Send + 'static {
    fn show_limits(&mut self, limits: &TemperatureLimits);

    /// Leaves the configuration surface
    fn close(&mut self);
}

pub fn format_temperature(reading: Option<f64>) -> String {
    match reading {
        Some(value) => format!("{:.2} °C", value),
        None => TEMPERATURE_NONE.to_string(),
    }
}

/// Presenter rendering every widget change as a log line.
#[derive(Debug, Clone)]
pub struct ConsolePresenter {
    controls: Arc<AtomicBool>,
}

impl Default for ConsolePresenter {
    fn default() -> Self {
        Self {
            controls: Arc::new(AtomicBool::new(true)),
        }
    }
}

impl ConsolePresenter {
    /// Shared flag mirroring whether the controls are enabled.
    pub fn controls(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.controls)
    }
}

impl Presenter for ConsolePresenter {
    fn show_toggle(&mut self, on: bool) {
        info!("alarm switch: {}", if on { "ON" } else { "OFF" });
    }

    fn set_interactive(&mut self, enabled: bool) {
        self.controls.store(enabled, Ordering::SeqCst);
        if enabled {
            info!("controls enabled");
        } else {
            info!("controls disabled, device unreachable");
        }
    }

    fn show_backdrop(&mut self, backdrop: Backdrop) {
        let (r, g, b) = backdrop.rgb();
        info!("background: {:?} #{:02x}{:02x}{:02x}", backdrop, r, g, b);
    }

    fn show_temperature(&mut self, reading: Option<f64>) {
        info!("temperature: {}", format_temperature(reading));
    }

    fn pulse(&mut self, duration: Duration) {
        info!("vibrate for {:?}", duration);
    }
}

#[derive(Debug, Default)]
pub struct ConsoleConfigView;

impl ConfigView for ConsoleConfigView {
    fn show_limits(&mut self, limits: &TemperatureLimits) {
        info!("limits: min = {}, max = {}", limits.min, limits.max);
    }

    fn close(&mut self) {
        info!("configuration closed");
    }
}
