mod tracing_overlay;

pub use tracing_overlay::TracingOverlay;
