use crate::domain::{FenceGeometry, GeometryService, Location, MapOverlay, PolygonStyle, ReportQuery, ReportResult, ReportService};
use crate::geofencing::GeofenceError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub enum OverlayOp {
    Clear,
    Polygon { points: Vec<Location>, style: PolygonStyle },
    Marker(Location),
}

/// Records every overlay call, clones share the same recording.
#[derive(Debug, Clone, Default)]
pub struct RecordingOverlay {
    ops: Arc<Mutex<Vec<OverlayOp>>>,
}

impl RecordingOverlay {
    pub fn ops(&self) -> Vec<OverlayOp> {
        self.ops.lock().unwrap().clone()
    }
}

impl MapOverlay for RecordingOverlay {
    fn clear_overlays(&mut self) {
        self.ops.lock().unwrap().push(OverlayOp::Clear);
    }

    fn add_polygon(&mut self, points: &[Location], style: &PolygonStyle) {
        self.ops.lock().unwrap().push(OverlayOp::Polygon {
            points: points.to_vec(),
            style: style.clone(),
        });
    }

    fn add_marker(&mut self, point: &Location) {
        self.ops.lock().unwrap().push(OverlayOp::Marker(*point));
    }
}

/// Answers every query with the configured report after an optional per-location delay.
#[derive(Debug, Default)]
pub struct FakeReportService {
    reports: Mutex<Vec<(Location, Duration, Result<ReportResult, GeofenceError>)>>,
    queries: Mutex<Vec<ReportQuery>>,
}

impl FakeReportService {
    pub fn respond(self, location: Location, delay: Duration, result: Result<ReportResult, GeofenceError>) -> Self {
        self.reports.lock().unwrap().push((location, delay, result));
        self
    }

    pub fn queries(&self) -> Vec<ReportQuery> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReportService for FakeReportService {
    async fn obtain_report(&self, query: &ReportQuery) -> Result<ReportResult, GeofenceError> {
        self.queries.lock().unwrap().push(query.clone());

        let response = self
            .reports
            .lock()
            .unwrap()
            .iter()
            .find(|(location, _, _)| location == query.location())
            .map(|(_, delay, result)| (*delay, result.clone()));

        match response {
            Some((delay, result)) => {
                tokio::time::sleep(delay).await;
                result
            }
            None => Ok(ReportResult::default()),
        }
    }
}

#[derive(Debug, Default)]
pub struct FakeGeometryService {
    geometries: HashMap<Uuid, Result<FenceGeometry, GeofenceError>>,
}

impl FakeGeometryService {
    pub fn with(mut self, fence_id: Uuid, result: Result<FenceGeometry, GeofenceError>) -> Self {
        self.geometries.insert(fence_id, result);
        self
    }
}

#[async_trait]
impl GeometryService for FakeGeometryService {
    async fn fetch_geometry(&self, fence_id: Uuid) -> Result<FenceGeometry, GeofenceError> {
        self.geometries
            .get(&fence_id)
            .cloned()
            .unwrap_or_else(|| Err(GeofenceError::UnreachableService(format!("no geometry for {}", fence_id))))
    }
}

/// A small triangle with its first corner at `origin`.
pub fn triangle(origin: Location) -> FenceGeometry {
    FenceGeometry::new(vec![
        origin,
        Location::new(origin.latitude + 0.001, origin.longitude),
        Location::new(origin.latitude, origin.longitude + 0.001),
    ])
}
