use crate::app_config::AppConfig;
use crate::domain::{Location, LocationSource};
use crate::geofencing::GeofenceError;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::sync::mpsc::Receiver;
use tokio_stream::StreamExt;
use tracing::{info, instrument, warn};

/// Replays a configured route, one sample per interval. Stands in for the device's positioning
/// service.
#[derive(Debug)]
pub struct RouteLocationSource {
    route: Vec<Location>,
    interval: Duration,
    permission_granted: bool,
    buffer_size: usize,
}

impl RouteLocationSource {
    pub fn new(config: &AppConfig) -> Self {
        RouteLocationSource {
            route: config.location().route().to_vec(),
            interval: config.location().interval(),
            permission_granted: config.location().permission_granted(),
            buffer_size: config.core().event_buffer_size(),
        }
    }
}

impl LocationSource for RouteLocationSource {
    #[instrument(skip(self), fields(samples = self.route.len()))]
    fn activate(&mut self) -> Result<Receiver<Location>, GeofenceError> {
        if !self.permission_granted {
            warn!("⛔ Location permission not granted, not activating the location source");
            return Err(GeofenceError::PermissionDenied);
        }

        let (tx, rx) = mpsc::channel::<Location>(self.buffer_size.max(1));
        let route = self.route.clone();
        let interval = self.interval;

        tokio::spawn(async move {
            let samples = tokio_stream::iter(route).throttle(interval);
            tokio::pin!(samples);
            while let Some(location) = samples.next().await {
                if tx.send(location).await.is_err() {
                    return;
                }
            }
            info!("📍 Route replay finished");
        });

        info!(interval = ?interval, "📍 Activated location source");
        Ok(rx)
    }
}
