use std::time::Duration;

use crate::settings::Haptic;
use crate::zone::Zone;

/// Vibration requested on entering an extreme zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pulse {
    /// Entering [`Zone::Cold`]
    Short,
    /// Entering [`Zone::Hot`]
    Long,
}

impl Pulse {
    pub fn duration(&self, haptic: &Haptic) -> Duration {
        match self {
            Pulse::Short => haptic.short_pulse(),
            Pulse::Long => haptic.long_pulse(),
        }
    }
}

/// Guards haptic feedback so one stay in the extremes pulses only once.
///
/// Cold and Hot share the guard, so a jump from one extreme to the other
/// stays silent. It is re-armed by [`Zone::Warm`] or by a reset.
#[derive(Debug, Default)]
pub struct HapticDebouncer {
    pulsed: bool,
}

impl HapticDebouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds the zone of the current cycle and returns the pulse to emit, if any.
    pub fn observe(&mut self, zone: Zone) -> Option<Pulse> {
        let pulse = match zone {
            Zone::Warm => {
                self.pulsed = false;
                return None;
            }
            Zone::Cold => Pulse::Short,
            Zone::Hot => Pulse::Long,
        };

        if self.pulsed {
            return None;
        }
        self.pulsed = true;
        Some(pulse)
    }

    pub fn clear(&mut self) {
        self.pulsed = false;
    }
}
