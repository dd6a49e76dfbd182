mod color;
pub mod events;
mod fence;
mod location;
mod location_source;
mod map_overlay;
mod notice;
mod report;
mod services;

pub use color::Color;
pub use fence::{Fence, FenceDetails, FenceGeometry};
pub use location::Location;
pub use location_source::LocationSource;
pub use map_overlay::{MapOverlay, PolygonStyle};
pub use notice::Notice;
pub use report::{ReportQuery, ReportResult};
pub use services::{GeometryService, ReportService};
