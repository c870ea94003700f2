use std::sync::Arc;
use std::sync::atomic::Ordering;

use tokio::io::{AsyncBufReadExt, BufReader};

use thermalarm_client::display::{ConsoleConfigView, ConsolePresenter};
use thermalarm_client::remote::{HttpRemote, RemoteState};
use thermalarm_client::settings::Settings;
use thermalarm_client::surfaces::{
    ConfigCommand, ConfigExit, ConfigSurface, MonitorCommand, MonitorSurface, SurfaceHandle,
};

const HELP: &str = "commands: on | off | near | far | pause | resume | config | limits <min> <max> | back | quit";

#[tokio::main]
async fn main() {
    let settings = Settings::new().expect("Failed to load settings.");

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let app_name = env!("CARGO_PKG_NAME").replace('-', "_");
            let level = settings.logger.level.as_str();

            format!("{app_name}={level}").into()
        }))
        .init();

    let remote: Arc<dyn RemoteState> = Arc::new(
        HttpRemote::new(
            settings.device.base_url.clone(),
            settings.polling.request_timeout(),
        )
        .expect("Failed to build HTTP client."),
    );

    let presenter = ConsolePresenter::default();
    let controls = presenter.controls();
    let monitor = MonitorSurface::spawn(
        Arc::clone(&remote),
        presenter,
        &settings.polling,
        settings.haptic.clone(),
    );
    let mut config: Option<SurfaceHandle<ConfigCommand, ConfigExit>> = None;

    tracing::info!("watching {} ({})", settings.device.base_url, HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            line = lines.next_line() => match line {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(e) => {
                    tracing::error!("stdin: {}", e);
                    break;
                }
            },
        };

        if config.as_ref().is_some_and(|surface| surface.is_finished()) {
            config = None;
        }

        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            ["on"] => {
                monitor.send(MonitorCommand::Toggle(true)).await;
            }
            ["off"] => {
                monitor.send(MonitorCommand::Toggle(false)).await;
            }
            ["near"] => {
                monitor.send(MonitorCommand::Proximity(0.0)).await;
            }
            ["far"] => {
                monitor.send(MonitorCommand::Proximity(5.0)).await;
            }
            ["pause"] => {
                monitor.send(MonitorCommand::Background).await;
            }
            ["resume"] => {
                monitor.send(MonitorCommand::Foreground).await;
            }
            ["config"] => {
                if config.is_some() {
                    tracing::info!("configuration already open");
                } else if !controls.load(Ordering::SeqCst) {
                    tracing::info!("configuration unavailable while the device is unreachable");
                } else {
                    config = Some(ConfigSurface::spawn(
                        Arc::clone(&remote),
                        ConsoleConfigView,
                        &settings.polling,
                    ));
                }
            }
            ["limits", min, max] => match &config {
                Some(surface) => {
                    surface
                        .send(ConfigCommand::Submit {
                            min: min.to_string(),
                            max: max.to_string(),
                        })
                        .await;
                }
                None => tracing::info!("open the configuration first"),
            },
            ["back"] => {
                if let Some(surface) = config.take() {
                    surface.send(ConfigCommand::Dismiss).await;
                    surface.join().await;
                }
            }
            ["quit"] => break,
            [] => {}
            _ => tracing::info!("{}", HELP),
        }
    }

    if let Some(surface) = config.take() {
        surface.shutdown().await;
    }
    monitor.shutdown().await;
}
