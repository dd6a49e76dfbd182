use crate::app_config::AppConfig;
use crate::domain::LocationSource;
use crate::domain::events::Event;
use crate::domain::{Notice, ReportService};
use crate::geofencing::{GeometryFetcher, ReportClient};
use crate::location::RouteLocationSource;
use crate::notice_listener::notice_listener;
use crate::overlay::TracingOverlay;
use crate::report_controller::GeofenceReportController;
use std::sync::Arc;
use tokio::io::BufReader;
use tokio::sync::mpsc;
use tokio::task;
use tracing::{info, warn};

mod app_config;
mod color_deserializer;
mod distance_gate;
mod domain;
mod geofencing;
mod input_listen;
mod location;
mod location_deserializer;
mod notice_listener;
mod overlay;
mod report_controller;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = Arc::new(AppConfig::load()?);
    info!("✅  Loaded configuration");

    let client = geofencing::new_client(&config)?;
    let report_service: Arc<dyn ReportService> = Arc::new(ReportClient::new(client.clone(), config.clone()));
    let geometry_service = Arc::new(GeometryFetcher::new(client, config.clone()));

    let (notice_tx, notice_rx) = mpsc::channel::<Notice>(config.core().notice_buffer_size());
    task::spawn(async move {
        notice_listener(notice_rx).await;
    });
    info!("✅  Initialized notice listener");

    let (tx, rx) = mpsc::channel::<Event>(config.core().event_buffer_size());
    let mut controller = GeofenceReportController::new(
        report_service,
        geometry_service,
        Box::new(TracingOverlay::new()),
        notice_tx.clone(),
        config.clone(),
    );

    let mut location_source = RouteLocationSource::new(&config);
    match location_source.activate() {
        Ok(mut locations) => {
            let location_tx = tx.clone();
            task::spawn(async move {
                while let Some(location) = locations.recv().await {
                    if location_tx.send(Event::LocationUpdated(location)).await.is_err() {
                        return;
                    }
                }
            });
            info!("✅  Activated location source");
        }
        Err(e) => {
            warn!("⚠️ {}", e);
            notice_tx.try_send(Notice::PermissionDenied).ok();
        }
    }

    let input_tx = tx.clone();
    task::spawn(async move {
        input_listen::listen(BufReader::new(tokio::io::stdin()), input_tx).await;
    });

    let shutdown_tx = tx;
    task::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            shutdown_tx.send(Event::Shutdown).await.ok();
        }
    });

    info!("🔥 {} is up and running", env!("CARGO_PKG_NAME"));
    controller.listen(rx).await;
    info!(state = ?controller.state().await, "👋 {} stopped", env!("CARGO_PKG_NAME"));

    Ok(())
}
