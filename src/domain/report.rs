use crate::domain::{FenceDetails, Location};
use crate::geofencing::GeofenceError;
use std::collections::HashSet;
use tracing::warn;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq)]
pub struct ReportQuery {
    location: Location,
    project_id: Uuid,
    range_meters: f64,
}

impl ReportQuery {
    pub fn builder(location: Location) -> ReportQueryBuilder {
        ReportQueryBuilder {
            location,
            project_id: None,
            range: None,
        }
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn project_id(&self) -> Uuid {
        self.project_id
    }

    pub fn range_meters(&self) -> f64 {
        self.range_meters
    }

    pub fn validate(&self) -> Result<(), GeofenceError> {
        validate_range(self.range_meters)
    }
}

/// Builds a [`ReportQuery`] from the raw project id and the raw text of the range input.
#[derive(Debug)]
pub struct ReportQueryBuilder {
    location: Location,
    project_id: Option<String>,
    range: Option<String>,
}

impl ReportQueryBuilder {
    pub fn project(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }

    pub fn range(mut self, range: impl Into<String>) -> Self {
        self.range = Some(range.into());
        self
    }

    pub fn build(self) -> Result<ReportQuery, GeofenceError> {
        let project_id = self.project_id.ok_or_else(|| GeofenceError::InvalidQuery("missing project id".to_string()))?;
        let project_id = Uuid::parse_str(project_id.trim())
            .map_err(|_| GeofenceError::InvalidQuery(format!("project id '{}' is not a valid UUID", project_id)))?;

        let range = self.range.ok_or_else(|| GeofenceError::InvalidQuery("missing range".to_string()))?;
        let range_meters = range
            .trim()
            .parse::<f64>()
            .map_err(|_| GeofenceError::InvalidQuery(format!("range '{}' is not a number", range)))?;
        validate_range(range_meters)?;

        Ok(ReportQuery {
            location: self.location,
            project_id,
            range_meters,
        })
    }
}

fn validate_range(range_meters: f64) -> Result<(), GeofenceError> {
    if range_meters.is_finite() && range_meters > 0.0 {
        Ok(())
    } else {
        Err(GeofenceError::InvalidQuery(format!("range must be a positive number of meters, got {}", range_meters)))
    }
}

/// The fences a location is inside of and the fences within range it is outside of,
/// both in the order the service returned them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReportResult {
    inside: Vec<FenceDetails>,
    outside: Vec<FenceDetails>,
}

impl ReportResult {
    /// A fence reported on both sides is kept as inside only.
    pub fn new(inside: Vec<FenceDetails>, outside: Vec<FenceDetails>) -> Self {
        let inside_ids = inside.iter().map(FenceDetails::id).collect::<HashSet<_>>();
        let outside = outside
            .into_iter()
            .filter(|details| {
                let duplicate = inside_ids.contains(&details.id());
                if duplicate {
                    warn!(fence_id = %details.id(), "⚠️ Fence '{}' reported both inside and outside, keeping it as inside", details.display_name());
                }
                !duplicate
            })
            .collect();

        ReportResult { inside, outside }
    }

    pub fn inside(&self) -> &[FenceDetails] {
        &self.inside
    }

    pub fn outside(&self) -> &[FenceDetails] {
        &self.outside
    }

    pub fn is_empty(&self) -> bool {
        self.inside.is_empty() && self.outside.is_empty()
    }
}
