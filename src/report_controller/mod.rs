mod controller;
mod refresh;
mod render_target;
#[cfg(test)]
mod test_support;

pub use controller::GeofenceReportController;
pub use render_target::ControllerState;
