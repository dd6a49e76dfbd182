use crate::domain::{FenceGeometry, ReportQuery, ReportResult};
use crate::geofencing::GeofenceError;
use async_trait::async_trait;
use std::fmt::Debug;
use uuid::Uuid;

#[async_trait]
pub trait ReportService: Debug + Send + Sync {
    async fn obtain_report(&self, query: &ReportQuery) -> Result<ReportResult, GeofenceError>;
}

#[async_trait]
pub trait GeometryService: Debug + Send + Sync {
    async fn fetch_geometry(&self, fence_id: Uuid) -> Result<FenceGeometry, GeofenceError>;
}
