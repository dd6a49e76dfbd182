use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeofenceError {
    #[error("invalid report query: {0}")]
    InvalidQuery(String),
    #[error("geofencing service unreachable: {0}")]
    UnreachableService(String),
    #[error("malformed geometry for fence {fence_id}: {reason}")]
    MalformedGeometry { fence_id: Uuid, reason: String },
    #[error("location permission not granted")]
    PermissionDenied,
}

impl From<reqwest::Error> for GeofenceError {
    fn from(error: reqwest::Error) -> Self {
        GeofenceError::UnreachableService(error.to_string())
    }
}
