use crate::domain::{Fence, FenceDetails, ReportResult};
use crate::geofencing::domain::LonLat;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct ReportResponse {
    #[serde(default)]
    pub inside: FeatureCollection,
    #[serde(default)]
    pub outside: FeatureCollection,
}

#[derive(Debug, Default, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<FenceFeature>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FenceFeature {
    pub id: Uuid,
    pub name: Option<String>,
    pub distance: Option<f64>,
    pub closest_point: Option<PointGeometry>,
}

#[derive(Debug, Deserialize)]
pub struct PointGeometry {
    pub coordinates: LonLat,
}

impl From<FenceFeature> for FenceDetails {
    fn from(feature: FenceFeature) -> Self {
        FenceDetails {
            fence: Fence {
                id: feature.id,
                name: feature.name,
            },
            closest_point: feature.closest_point.map(|point| point.coordinates.0),
            distance: feature.distance,
        }
    }
}

impl From<ReportResponse> for ReportResult {
    fn from(response: ReportResponse) -> Self {
        ReportResult::new(
            response.inside.features.into_iter().map(FenceDetails::from).collect(),
            response.outside.features.into_iter().map(FenceDetails::from).collect(),
        )
    }
}
