use std::sync::{Arc, Mutex};
use std::time::Duration;

use thermalarm_api::TemperatureLimits;
use thermalarm_client::display::{ConfigView, Presenter};
use thermalarm_client::zone::Backdrop;

#[derive(Debug, Clone, PartialEq)]
pub enum Shown {
    Toggle(bool),
    Interactive(bool),
    Backdrop(Backdrop),
    Temperature(Option<f64>),
    Pulse(Duration),
}

/// Presenter whose widget history stays readable while the surface owns it.
#[derive(Clone, Default)]
pub struct Recorder {
    shown: Arc<Mutex<Vec<Shown>>>,
}

impl Recorder {
    pub fn shown(&self) -> Vec<Shown> {
        self.shown.lock().unwrap().clone()
    }

    pub fn has(&self, shown: &Shown) -> bool {
        self.shown().contains(shown)
    }

    pub fn pulses(&self) -> usize {
        self.shown()
            .iter()
            .filter(|s| matches!(s, Shown::Pulse(_)))
            .count()
    }

    pub fn interactive(&self) -> bool {
        self.shown()
            .iter()
            .rev()
            .find_map(|s| match s {
                Shown::Interactive(enabled) => Some(*enabled),
                _ => None,
            })
            .unwrap_or(true)
    }

    pub fn backdrop(&self) -> Option<Backdrop> {
        self.shown().iter().rev().find_map(|s| match s {
            Shown::Backdrop(backdrop) => Some(*backdrop),
            _ => None,
        })
    }

    fn push(&self, shown: Shown) {
        self.shown.lock().unwrap().push(shown);
    }
}

impl Presenter for Recorder {
    fn show_toggle(&mut self, on: bool) {
        self.push(Shown::Toggle(on));
    }

    fn set_interactive(&mut self, enabled: bool) {
        self.push(Shown::Interactive(enabled));
    }

    fn show_backdrop(&mut self, backdrop: Backdrop) {
        self.push(Shown::Backdrop(backdrop));
    }

    fn show_temperature(&mut self, reading: Option<f64>) {
        self.push(Shown::Temperature(reading));
    }

    fn pulse(&mut self, duration: Duration) {
        self.push(Shown::Pulse(duration));
    }
}

#[derive(Default)]
struct Fields {
    limits: Option<TemperatureLimits>,
    closes: usize,
}

/// Config view recording what the form displayed and how often it closed.
#[derive(Clone, Default)]
pub struct FormRecorder {
    fields: Arc<Mutex<Fields>>,
}

impl FormRecorder {
    pub fn limits(&self) -> Option<TemperatureLimits> {
        self.fields.lock().unwrap().limits
    }

    pub fn closes(&self) -> usize {
        self.fields.lock().unwrap().closes
    }
}

impl ConfigView for FormRecorder {
    fn show_limits(&mut self, limits: &TemperatureLimits) {
        self.fields.lock().unwrap().limits = Some(*limits);
    }

    fn close(&mut self) {
        self.fields.lock().unwrap().closes += 1;
    }
}
