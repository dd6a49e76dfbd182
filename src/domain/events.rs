use crate::domain::Location;

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    LocationUpdated(Location),
    RefreshRequested,
    RangeChanged(String),
    Shutdown,
}
