use crate::app_config::AppConfig;
use crate::domain::{FenceGeometry, GeometryService};
use crate::geofencing::GeofenceError;
use crate::geofencing::domain::{FenceResponse, LonLat};
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use tracing::{debug, instrument};
use uuid::Uuid;

/// Fetches fence polygons one fence at a time. Nothing is cached, every refresh fetches again.
#[derive(Debug, Clone)]
pub struct GeometryFetcher {
    client: Client,
    config: Arc<AppConfig>,
}

impl GeometryFetcher {
    pub fn new(client: Client, config: Arc<AppConfig>) -> Self {
        GeometryFetcher { client, config }
    }

    fn fence_url(&self, fence_id: Uuid) -> String {
        format!("{}/{}", self.config.geofencing().fences_url().trim_end_matches('/'), fence_id)
    }
}

#[async_trait]
impl GeometryService for GeometryFetcher {
    #[instrument(skip(self))]
    async fn fetch_geometry(&self, fence_id: Uuid) -> Result<FenceGeometry, GeofenceError> {
        debug!("Fetching fence geometry...");
        let body = self
            .client
            .get(self.fence_url(fence_id))
            .query(&[("key", self.config.geofencing().api_key())])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let geometry = parse_geometry(fence_id, &body)?;
        debug!("Fetching fence geometry... OK, {} point(s)", geometry.points.len());

        Ok(geometry)
    }
}

/// Decodes the outer ring of a fence. Holes are not part of the result.
fn parse_geometry(fence_id: Uuid, body: &str) -> Result<FenceGeometry, GeofenceError> {
    let malformed = |reason: String| GeofenceError::MalformedGeometry { fence_id, reason };

    let response = serde_json::from_str::<FenceResponse>(body).map_err(|e| malformed(e.to_string()))?;
    let outer_ring = response
        .geometry
        .coordinates
        .into_iter()
        .next()
        .ok_or_else(|| malformed("geometry has no coordinate rings".to_string()))?;

    let points = serde_json::from_value::<Vec<LonLat>>(outer_ring).map_err(|e| malformed(format!("invalid outer ring: {}", e)))?;
    if points.len() < 3 {
        return Err(malformed(format!("outer ring has {} position(s), a polygon needs at least 3", points.len())));
    }

    Ok(FenceGeometry::new(points.into_iter().map(|position| position.0).collect()))
}
