use thermalarm_api::Resource;
use tracing::{debug, info, warn};

use crate::cycle::{CycleId, CycleReport, PartialCycleFailure, Sample};
use crate::display::Presenter;
use crate::error::Result;
use crate::haptic::HapticDebouncer;
use crate::settings::Haptic;
use crate::zone::{Backdrop, Zone, classify};

/// Local view of the alarm switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlarmState {
    /// No poll has answered yet
    Unknown,
    Off,
    /// `zone` is `None` until a complete sample has been classified
    On { zone: Option<Zone> },
}

/// What became of a cycle report handed to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciled {
    Applied,
    /// The report predates the latest cycle or a user command
    Stale,
}

/// Owner of the alarm state, the haptic guard and the displayed zone.
///
/// All methods run on the surface task; remote I/O happens elsewhere and
/// comes back as a [`CycleReport`].
pub struct AlarmStateController<P> {
    state: AlarmState,
    haptics: HapticDebouncer,
    haptic: Haptic,
    interactive: bool,
    /// Switch position last pushed to the presenter
    toggle_shown: Option<bool>,
    /// Latest cycle handed out by `begin_cycle`
    cycle: CycleId,
    /// Cycles up to and including this one started before a user command
    stale_through: CycleId,
    pending_commands: usize,
    /// First cycle to start after a settlement; applied even if newer commands are pending
    owed: Option<CycleId>,
    presenter: P,
}

impl<P: Presenter> AlarmStateController<P> {
    pub fn new(presenter: P, haptic: Haptic) -> Self {
        Self {
            state: AlarmState::Unknown,
            haptics: HapticDebouncer::new(),
            haptic,
            interactive: true,
            toggle_shown: None,
            cycle: CycleId::default(),
            stale_through: CycleId::default(),
            pending_commands: 0,
            owed: None,
            presenter,
        }
    }

    pub fn state(&self) -> AlarmState {
        self.state
    }

    pub fn zone(&self) -> Option<Zone> {
        match self.state {
            AlarmState::On { zone } => zone,
            _ => None,
        }
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Hands out the identity of a new cycle, superseding any earlier one.
    pub fn begin_cycle(&mut self) -> CycleId {
        self.cycle = self.cycle.next();
        self.cycle
    }

    /// Commands mark in-flight cycles stale, so a steady stream of them
    /// would starve polling. The cycle owed after a settlement bounds that
    /// to one poll interval.
    fn is_current(&self, cycle: CycleId) -> bool {
        if cycle != self.cycle {
            return false;
        }
        self.owed == Some(cycle) || (cycle > self.stale_through && self.pending_commands == 0)
    }

    /// Applies a finished cycle, unless something newer already decided the state.
    pub fn reconcile(&mut self, report: CycleReport) -> Reconciled {
        let current = self.is_current(report.cycle);
        if self.owed.is_some_and(|owed| report.cycle >= owed) {
            self.owed = None;
        }

        if !current {
            debug!("discarding stale poll cycle {}", report.cycle);
            return Reconciled::Stale;
        }

        match report.status {
            Err(e) => {
                warn!("alarm status unavailable: {}", e);
                if self.state != AlarmState::Off {
                    self.enter_off();
                }
                self.set_interactive(false);
            }
            Ok(false) => {
                self.set_interactive(true);
                self.enter_off();
            }
            Ok(true) => {
                self.set_interactive(true);
                if !matches!(self.state, AlarmState::On { .. }) {
                    info!("alarm is on");
                    self.state = AlarmState::On { zone: None };
                }
                self.sync_toggle(true);

                match report.sample {
                    Some(Ok(sample)) => self.apply_sample(sample),
                    Some(Err(failure)) => self.hold_zone(failure),
                    None => debug!("cycle {} carried no sample", report.cycle),
                }
            }
        }

        Reconciled::Applied
    }

    /// User or sensor asked to switch the alarm; returns the request to send.
    ///
    /// Switching off is shown at once. Switching on waits for a poll to confirm.
    pub fn request_switch(&mut self, on: bool) -> Resource {
        self.pending_commands += 1;
        self.stale_through = self.cycle;

        if on {
            info!("switch on requested");
            self.sync_toggle(true);
        } else {
            info!("switch off requested");
            self.enter_off();
        }

        Resource::switch(on)
    }

    /// A request from [`request_switch`](Self::request_switch) has been answered.
    pub fn command_settled(&mut self, resource: &Resource, result: Result<()>) {
        self.pending_commands = self.pending_commands.saturating_sub(1);
        // Cycles started while the command was travelling may have read the old state.
        self.stale_through = self.cycle;
        self.owed.get_or_insert(self.cycle.next());

        match result {
            Ok(()) => debug!("{} acknowledged", resource),
            Err(e) => warn!("{} failed: {}", resource, e),
        }
    }

    fn apply_sample(&mut self, sample: Sample) {
        self.presenter.show_temperature(Some(sample.temperature));

        let zone = classify(sample.temperature, &sample.limits);
        if self.zone() != Some(zone) {
            info!(
                "temperature {:.2} is {} for limits [{}, {}]",
                sample.temperature, zone, sample.limits.min, sample.limits.max
            );
            self.presenter.show_backdrop(zone.backdrop());
        }
        self.state = AlarmState::On { zone: Some(zone) };

        if let Some(pulse) = self.haptics.observe(zone) {
            debug!("{:?} pulse on entering {}", pulse, zone);
            self.presenter.pulse(pulse.duration(&self.haptic));
        }
    }

    fn hold_zone(&mut self, failure: PartialCycleFailure) {
        debug!("keeping last zone {:?}: {}", self.zone(), failure);
        if let Some(temperature) = failure.temperature() {
            self.presenter.show_temperature(Some(temperature));
        }
    }

    fn enter_off(&mut self) {
        if self.state != AlarmState::Off {
            info!("alarm is off");
            self.state = AlarmState::Off;
            self.haptics.clear();
            self.presenter.show_backdrop(Backdrop::Idle);
            self.presenter.show_temperature(None);
        }
        self.sync_toggle(false);
    }

    fn sync_toggle(&mut self, on: bool) {
        if self.toggle_shown != Some(on) {
            self.toggle_shown = Some(on);
            self.presenter.show_toggle(on);
        }
    }

    fn set_interactive(&mut self, enabled: bool) {
        if self.interactive != enabled {
            self.interactive = enabled;
            self.presenter.set_interactive(enabled);
        }
    }
}
