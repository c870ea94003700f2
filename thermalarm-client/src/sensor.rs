/// Proximity listener that forces the alarm off when something covers the sensor.
///
/// Events are only honoured while the surface is in the foreground. There is
/// no debouncing: every near reading asks for the alarm to be switched off.
#[derive(Debug)]
pub struct SensorOverride {
    listening: bool,
}

impl Default for SensorOverride {
    fn default() -> Self {
        Self { listening: true }
    }
}

impl SensorOverride {
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface came to the foreground.
    pub fn resume(&mut self) {
        self.listening = true;
    }

    /// Surface went to the background.
    pub fn pause(&mut self) {
        self.listening = false;
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    /// Whether a proximity `distance` should switch the alarm off.
    pub fn triggers(&self, distance: f32) -> bool {
        self.listening && distance == 0.0
    }
}
