use crate::domain::Location;

pub const DEFAULT_THRESHOLD_M: f64 = 10.0;

/// Decides whether a location sample moved far enough from the last reported one to warrant a
/// new report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceGate {
    threshold_m: f64,
}

impl Default for DistanceGate {
    fn default() -> Self {
        DistanceGate::new(DEFAULT_THRESHOLD_M)
    }
}

impl DistanceGate {
    pub fn new(threshold_m: f64) -> Self {
        DistanceGate { threshold_m }
    }

    /// The first sample always triggers. After that only movement strictly beyond the threshold does.
    pub fn should_trigger(&self, previous: Option<&Location>, current: &Location) -> bool {
        match previous {
            None => true,
            Some(previous) => previous.distance_to(current) > self.threshold_m,
        }
    }
}
