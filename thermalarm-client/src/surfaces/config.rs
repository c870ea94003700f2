use std::sync::Arc;
use std::time::Duration;

use futures::FutureExt;
use thermalarm_api::{Resource, SetLimitsQuery, TemperatureLimits, parse_bound};
use tokio::sync::{mpsc, watch};
use tracing::{info, warn};

use super::{SurfaceHandle, channels};
use crate::display::ConfigView;
use crate::error::{Error, Result};
use crate::remote::{RemoteState, fetch_within};
use crate::scheduler::{PollEvent, PollScheduler};
use crate::settings::Polling;

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigCommand {
    /// Raw text of the min and max fields
    Submit { min: String, max: String },
    /// User left without submitting
    Dismiss,
}

/// Why the configuration surface went away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigExit {
    Submitted,
    DeviceUnreachable,
    Dismissed,
    Shutdown,
}

/// Editing state of the limits form and the one-shot close guard.
pub struct ConfigSyncController<V> {
    view: V,
    closed: bool,
}

impl<V: ConfigView> ConfigSyncController<V> {
    pub fn new(view: V) -> Self {
        Self {
            view,
            closed: false,
        }
    }

    pub fn populate(&mut self, limits: &TemperatureLimits) {
        self.view.show_limits(limits);
    }

    /// Closes the view; only the first call reaches it.
    pub fn close(&mut self) -> bool {
        if self.closed {
            return false;
        }
        self.closed = true;
        self.view.close();
        true
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Builds the update request from the form fields.
    pub fn prepare_update(&self, min: &str, max: &str) -> Result<Resource> {
        let query = SetLimitsQuery {
            min: parse_bound(min)?,
            max: parse_bound(max)?,
        };
        Ok(Resource::SetLimits(query))
    }
}

/// Configuration surface: limits form plus a liveness poll on the device.
///
/// Any transport failure of the liveness poll closes the surface for good.
pub struct ConfigSurface<V> {
    controller: ConfigSyncController<V>,
    scheduler: PollScheduler<Result<String>>,
    remote: Arc<dyn RemoteState>,
    request_timeout: Duration,
    commands: mpsc::Receiver<ConfigCommand>,
    shutdown: watch::Receiver<bool>,
}

impl<V: ConfigView> ConfigSurface<V> {
    pub fn spawn(
        remote: Arc<dyn RemoteState>,
        view: V,
        polling: &Polling,
    ) -> SurfaceHandle<ConfigCommand, ConfigExit> {
        let (command_tx, command_rx, shutdown_tx, shutdown_rx) = channels();

        let surface = Self {
            controller: ConfigSyncController::new(view),
            scheduler: PollScheduler::new(polling.interval()),
            remote,
            request_timeout: polling.request_timeout(),
            commands: command_rx,
            shutdown: shutdown_rx,
        };

        SurfaceHandle::new(command_tx, shutdown_tx, tokio::spawn(surface.run()))
    }

    async fn run(mut self) -> ConfigExit {
        info!("configuration surface opened");
        let exit = self.serve().await;
        info!("configuration surface finished: {:?}", exit);
        exit
    }

    async fn serve(&mut self) -> ConfigExit {
        // The limits load and the first liveness tick start together.
        let remote = Arc::clone(&self.remote);
        let limit = self.request_timeout;
        let initial = async move {
            fetch_within(remote.as_ref(), &Resource::TemperatureLimits, limit).await
        };
        tokio::pin!(initial);
        let mut loading = true;

        loop {
            tokio::select! {
                _ = self.shutdown.changed() => return ConfigExit::Shutdown,
                fetched = &mut initial, if loading => {
                    loading = false;
                    if let Some(exit) = self.limits_loaded(fetched) {
                        return exit;
                    }
                }
                command = self.commands.recv() => match command {
                    Some(ConfigCommand::Submit { min, max }) => {
                        if let Some(exit) = self.submit(&min, &max).await {
                            return exit;
                        }
                    }
                    Some(ConfigCommand::Dismiss) | None => {
                        self.controller.close();
                        return ConfigExit::Dismissed;
                    }
                },
                event = self.scheduler.next() => match event {
                    PollEvent::Due(_) => {
                        let remote = Arc::clone(&self.remote);
                        let limit = self.request_timeout;
                        self.scheduler.launch(
                            async move { fetch_within(remote.as_ref(), &Resource::AlarmStatus, limit).await }
                                .boxed(),
                        );
                    }
                    PollEvent::Completed(Err(e)) => {
                        warn!("device unreachable, closing configuration: {}", e);
                        self.controller.close();
                        return ConfigExit::DeviceUnreachable;
                    }
                    PollEvent::Completed(Ok(_)) => {}
                },
            }
        }
    }

    fn limits_loaded(&mut self, fetched: Result<String>) -> Option<ConfigExit> {
        let resource = Resource::TemperatureLimits;
        match fetched.and_then(|body| {
            TemperatureLimits::from_json(&body).map_err(|e| Error::decode(&resource, e))
        }) {
            Ok(limits) => self.controller.populate(&limits),
            Err(e) if e.is_transport() => {
                warn!("limits unavailable, closing: {}", e);
                self.controller.close();
                return Some(ConfigExit::DeviceUnreachable);
            }
            Err(e) => warn!("limits unreadable, leaving fields empty: {}", e),
        }

        None
    }

    async fn submit(&mut self, min: &str, max: &str) -> Option<ConfigExit> {
        let resource = match self.controller.prepare_update(min, max) {
            Ok(resource) => resource,
            Err(e) => {
                warn!("not sending limits: {}", e);
                return None;
            }
        };

        info!("sending {}", resource);
        if let Err(e) = fetch_within(self.remote.as_ref(), &resource, self.request_timeout).await {
            warn!("limits update not confirmed: {}", e);
        }

        self.controller.close();
        Some(ConfigExit::Submitted)
    }
}
