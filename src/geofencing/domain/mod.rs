mod fence_response;
mod lon_lat;
mod report_response;

pub use fence_response::FenceResponse;
pub use lon_lat::LonLat;
pub use report_response::ReportResponse;
