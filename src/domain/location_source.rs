use crate::domain::Location;
use crate::geofencing::GeofenceError;
use std::fmt::Debug;
use tokio::sync::mpsc::Receiver;

pub trait LocationSource: Debug {
    /// Starts emitting location samples. Fails with [`GeofenceError::PermissionDenied`]
    /// when the location permission has not been granted.
    fn activate(&mut self) -> Result<Receiver<Location>, GeofenceError>;
}
