use crate::domain::Location;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq)]
pub struct Fence {
    pub id: Uuid,
    pub name: Option<String>,
}

/// A fence matched by a containment report. `closest_point` and `distance` are only
/// supplied by the service for fences the location is outside of.
#[derive(Clone, Debug, PartialEq)]
pub struct FenceDetails {
    pub fence: Fence,
    pub closest_point: Option<Location>,
    pub distance: Option<f64>,
}

impl FenceDetails {
    pub fn id(&self) -> Uuid {
        self.fence.id
    }

    pub fn display_name(&self) -> String {
        self.fence.name.clone().unwrap_or_else(|| self.fence.id.to_string())
    }
}

#[cfg(test)]
impl FenceDetails {
    pub fn inside(id: Uuid) -> Self {
        FenceDetails {
            fence: Fence { id, name: None },
            closest_point: None,
            distance: None,
        }
    }

    pub fn outside(id: Uuid, closest_point: Location) -> Self {
        FenceDetails {
            fence: Fence { id, name: None },
            closest_point: Some(closest_point),
            distance: None,
        }
    }
}

/// The polygon of a fence. Only the outer ring is kept, interior rings are dropped.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FenceGeometry {
    pub points: Vec<Location>,
}

impl FenceGeometry {
    pub fn new(points: Vec<Location>) -> Self {
        FenceGeometry { points }
    }
}
