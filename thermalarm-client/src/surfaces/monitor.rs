use std::sync::Arc;
use std::time::Duration;

use futures::FutureExt;
use thermalarm_api::Resource;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info};

use super::{SurfaceHandle, channels};
use crate::controller::AlarmStateController;
use crate::cycle::{CycleReport, run_cycle};
use crate::display::Presenter;
use crate::error::Result;
use crate::remote::{RemoteState, fetch_within};
use crate::scheduler::{PollEvent, PollScheduler};
use crate::sensor::SensorOverride;
use crate::settings::{Haptic, Polling};

/// Input from the widgets and sensors of the monitoring surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MonitorCommand {
    /// User flipped the on/off switch
    Toggle(bool),
    /// Proximity sensor reported a distance
    Proximity(f32),
    Foreground,
    Background,
}

type Settled = (Resource, Result<()>);

/// Main monitoring surface: polls the device and keeps the widgets in step.
///
/// Every state change happens on this task. Switch requests travel on
/// their own tasks and report back through `settled`.
pub struct MonitorSurface<P> {
    controller: AlarmStateController<P>,
    sensor: SensorOverride,
    scheduler: PollScheduler<CycleReport>,
    remote: Arc<dyn RemoteState>,
    request_timeout: Duration,
    commands: mpsc::Receiver<MonitorCommand>,
    settled_tx: mpsc::UnboundedSender<Settled>,
    settled_rx: mpsc::UnboundedReceiver<Settled>,
    shutdown: watch::Receiver<bool>,
}

impl<P: Presenter> MonitorSurface<P> {
    /// Starts polling at once; the surface runs until shut down.
    pub fn spawn(
        remote: Arc<dyn RemoteState>,
        presenter: P,
        polling: &Polling,
        haptic: Haptic,
    ) -> SurfaceHandle<MonitorCommand, AlarmStateController<P>> {
        let (command_tx, command_rx, shutdown_tx, shutdown_rx) = channels();
        let (settled_tx, settled_rx) = mpsc::unbounded_channel();

        let surface = Self {
            controller: AlarmStateController::new(presenter, haptic),
            sensor: SensorOverride::new(),
            scheduler: PollScheduler::new(polling.interval()),
            remote,
            request_timeout: polling.request_timeout(),
            commands: command_rx,
            settled_tx,
            settled_rx,
            shutdown: shutdown_rx,
        };

        SurfaceHandle::new(command_tx, shutdown_tx, tokio::spawn(surface.run()))
    }

    async fn run(mut self) -> AlarmStateController<P> {
        info!("monitoring surface started");

        loop {
            tokio::select! {
                _ = self.shutdown.changed() => break,
                command = self.commands.recv() => match command {
                    Some(command) => self.handle(command),
                    None => break,
                },
                Some((resource, result)) = self.settled_rx.recv() => {
                    self.controller.command_settled(&resource, result);
                }
                event = self.scheduler.next() => match event {
                    PollEvent::Due(_) => {
                        let cycle = self.controller.begin_cycle();
                        let remote = Arc::clone(&self.remote);
                        self.scheduler.launch(run_cycle(remote, cycle, self.request_timeout).boxed());
                    }
                    PollEvent::Completed(report) => {
                        self.controller.reconcile(report);
                    }
                },
            }
        }

        info!("monitoring surface stopped");
        self.controller
    }

    fn handle(&mut self, command: MonitorCommand) {
        match command {
            MonitorCommand::Toggle(on) => {
                if self.controller.is_interactive() {
                    self.switch(on);
                } else {
                    debug!("switch is disabled, ignoring toggle");
                }
            }
            MonitorCommand::Proximity(distance) => {
                if self.sensor.triggers(distance) {
                    info!("proximity override, switching alarm off");
                    self.switch(false);
                }
            }
            MonitorCommand::Foreground => self.sensor.resume(),
            MonitorCommand::Background => self.sensor.pause(),
        }
    }

    fn switch(&mut self, on: bool) {
        let resource = self.controller.request_switch(on);
        let remote = Arc::clone(&self.remote);
        let settled = self.settled_tx.clone();
        let limit = self.request_timeout;

        tokio::spawn(async move {
            let result = fetch_within(remote.as_ref(), &resource, limit)
                .await
                .map(|_| ());
            let _ = settled.send((resource, result));
        });
    }
}
