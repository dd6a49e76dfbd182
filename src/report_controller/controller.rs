use crate::app_config::AppConfig;
use crate::distance_gate::DistanceGate;
use crate::domain::events::Event;
use crate::domain::{GeometryService, Location, MapOverlay, Notice, ReportQuery, ReportService};
use crate::geofencing::GeofenceError;
use crate::report_controller::refresh::Refresh;
use crate::report_controller::render_target::{ControllerState, RenderTarget};
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::sync::mpsc::{Receiver, Sender};
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, trace, warn};

/// Turns location samples and user actions into geofencing reports and keeps the map overlay in
/// sync with the most recently started report.
#[derive(Debug)]
pub struct GeofenceReportController {
    report_service: Arc<dyn ReportService>,
    geometry_service: Arc<dyn GeometryService>,
    target: Arc<Mutex<RenderTarget>>,
    notices: Sender<Notice>,
    config: Arc<AppConfig>,
    gate: DistanceGate,
    range_input: String,
    previous_location: Option<Location>,
    in_flight: Option<JoinHandle<()>>,
}

impl GeofenceReportController {
    pub fn new(
        report_service: Arc<dyn ReportService>,
        geometry_service: Arc<dyn GeometryService>,
        overlay: Box<dyn MapOverlay>,
        notices: Sender<Notice>,
        config: Arc<AppConfig>,
    ) -> Self {
        GeofenceReportController {
            report_service,
            geometry_service,
            target: Arc::new(Mutex::new(RenderTarget::new(overlay))),
            notices,
            gate: DistanceGate::new(config.reporting().distance_threshold_m()),
            range_input: config.reporting().range().to_string(),
            previous_location: None,
            in_flight: None,
            config,
        }
    }

    pub async fn state(&self) -> ControllerState {
        self.target.lock().await.state()
    }

    pub fn previous_location(&self) -> Option<&Location> {
        self.previous_location.as_ref()
    }

    pub fn set_range_input(&mut self, range: impl Into<String>) {
        self.range_input = range.into();
        debug!("📏 Range set to '{}'", self.range_input);
    }

    /// Starts a report when the sample moved far enough from the last reported location. Returns
    /// whether a report was started.
    #[instrument(skip(self))]
    pub async fn on_location_update(&mut self, location: Location) -> Result<bool, GeofenceError> {
        if !self.gate.should_trigger(self.previous_location.as_ref(), &location) {
            trace!("Location did not move far enough, skipping report");
            return Ok(false);
        }

        self.previous_location = Some(location);
        self.start_report(location).await
    }

    /// Reports the last known location again, regardless of how far the device moved.
    #[instrument(skip(self))]
    pub async fn refresh(&mut self) -> Result<bool, GeofenceError> {
        match self.previous_location {
            Some(location) => self.start_report(location).await,
            None => {
                info!("🔄 No location known yet, nothing to refresh");
                Ok(false)
            }
        }
    }

    /// Handles events until the channel closes or a shutdown is requested.
    #[instrument(skip_all)]
    pub async fn listen(&mut self, mut rx: Receiver<Event>) {
        while let Some(event) = rx.recv().await {
            debug!("🔵 Received event: {:?}", event);
            let result = match event {
                Event::LocationUpdated(location) => self.on_location_update(location).await,
                Event::RefreshRequested => self.refresh().await,
                Event::RangeChanged(range) => {
                    self.set_range_input(range);
                    Ok(false)
                }
                Event::Shutdown => break,
            };

            if let Err(e) = result {
                debug!("Event not handled: {}", e);
            }
        }

        self.settle().await;
    }

    /// Waits for the report in flight, if any, to be rendered or discarded.
    pub async fn settle(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            if let Err(e) = handle.await {
                if !e.is_cancelled() {
                    warn!("⚠️ Report task failed: {}", e);
                }
            }
        }
    }

    async fn start_report(&mut self, location: Location) -> Result<bool, GeofenceError> {
        let query = ReportQuery::builder(location)
            .project(self.config.geofencing().project_id())
            .range(self.range_input.as_str())
            .build()
            .inspect_err(|e| {
                warn!("⚠️ Not requesting a report: {}", e);
                if self.notices.try_send(Notice::ReportFailed(e.to_string())).is_err() {
                    debug!("Dropped invalid query notice");
                }
            })?;

        if let Some(previous) = self.in_flight.take() {
            previous.abort();
        }

        let generation = self.target.lock().await.begin();
        info!(generation, "🔄 Refreshing geofencing report for ({}, {})...", location.latitude, location.longitude);

        let refresh = Refresh {
            report_service: self.report_service.clone(),
            geometry_service: self.geometry_service.clone(),
            target: self.target.clone(),
            notices: self.notices.clone(),
            config: self.config.clone(),
        };
        self.in_flight = Some(tokio::spawn(refresh.run(query, generation)));

        Ok(true)
    }
}
