use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// A transient, user-visible message.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    ReportFailed(String),
    FenceSkipped { fence_id: Uuid, reason: String },
    PermissionDenied,
}

impl Display for Notice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::ReportFailed(reason) => write!(f, "Unable to refresh the geofencing report: {}", reason),
            Notice::FenceSkipped { fence_id, reason } => write!(f, "Fence {} could not be drawn: {}", fence_id, reason),
            Notice::PermissionDenied => write!(f, "Location permission is not granted, fences will not be tracked"),
        }
    }
}
