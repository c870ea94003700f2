mod config;
mod monitor;

pub use config::*;
pub use monitor::*;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

const COMMAND_BUFFER: usize = 32;

/// Running surface task: its command inbox and its teardown signal.
pub struct SurfaceHandle<C, T> {
    commands: mpsc::Sender<C>,
    shutdown: watch::Sender<bool>,
    task: JoinHandle<T>,
}

impl<C, T> SurfaceHandle<C, T> {
    fn new(commands: mpsc::Sender<C>, shutdown: watch::Sender<bool>, task: JoinHandle<T>) -> Self {
        Self {
            commands,
            shutdown,
            task,
        }
    }

    /// Queues a command; `false` once the surface has gone away.
    pub async fn send(&self, command: C) -> bool {
        self.commands.send(command).await.is_ok()
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Stops the scheduler, drops any in-flight cycle and waits for the task.
    pub async fn shutdown(self) -> Option<T> {
        let _ = self.shutdown.send(true);
        self.join().await
    }

    /// Waits for the surface to finish on its own.
    pub async fn join(self) -> Option<T> {
        match self.task.await {
            Ok(output) => Some(output),
            Err(e) => {
                tracing::error!("surface task failed: {}", e);
                None
            }
        }
    }
}

fn channels<C>() -> (
    mpsc::Sender<C>,
    mpsc::Receiver<C>,
    watch::Sender<bool>,
    watch::Receiver<bool>,
) {
    let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER);
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    (command_tx, command_rx, shutdown_tx, shutdown_rx)
}
