mod client;
mod domain;
mod error;
mod geometry_fetcher;
mod report_client;

pub use client::{ClientError, new_client};
pub use error::GeofenceError;
pub use geometry_fetcher::GeometryFetcher;
pub use report_client::ReportClient;
