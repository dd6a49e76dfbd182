use crate::app_config::AppConfig;
use crate::domain::{FenceDetails, GeometryService, Notice, ReportQuery, ReportResult, ReportService};
use crate::report_controller::render_target::{Layer, RenderTarget};
use futures::future::join_all;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::sync::mpsc::Sender;
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Inside,
    Outside,
}

/// Everything a single report refresh needs, detached from the controller so it can run as its
/// own task.
#[derive(Debug, Clone)]
pub struct Refresh {
    pub report_service: Arc<dyn ReportService>,
    pub geometry_service: Arc<dyn GeometryService>,
    pub target: Arc<Mutex<RenderTarget>>,
    pub notices: Sender<Notice>,
    pub config: Arc<AppConfig>,
}

impl Refresh {
    #[instrument(skip_all, fields(generation = generation, project_id = %query.project_id()))]
    pub async fn run(self, query: ReportQuery, generation: u64) {
        let report = match self.report_service.obtain_report(&query).await {
            Ok(report) => report,
            Err(e) => {
                let current = self.target.lock().await.fail(generation);
                if current {
                    warn!("⚠️ Unable to obtain the geofencing report: {}", e);
                    notify(&self.notices, Notice::ReportFailed(e.to_string()));
                } else {
                    debug!("Superseded report failed: {}", e);
                }
                return;
            }
        };

        if !self.target.lock().await.is_current(generation) {
            debug!("🗑️ Report superseded before its fences were fetched");
            return;
        }

        let layers = self.layers(&report).await;
        if self.target.lock().await.render(generation, &layers) {
            info!(
                "✅ Rendered {} inside and {} outside fence(s) as {} shape(s)",
                report.inside().len(),
                report.outside().len(),
                layers.len()
            );
        }
    }

    /// Fetches the geometry of all fences concurrently. A fence whose geometry cannot be fetched
    /// produces no layers, the others are unaffected.
    async fn layers(&self, report: &ReportResult) -> Vec<Layer> {
        let inside = report.inside().iter().map(|details| self.fence_layers(details, Side::Inside));
        let outside = report.outside().iter().map(|details| self.fence_layers(details, Side::Outside));

        join_all(inside.chain(outside)).await.into_iter().flatten().collect()
    }

    async fn fence_layers(&self, details: &FenceDetails, side: Side) -> Vec<Layer> {
        let fence_id = details.id();
        let geometry = match self.geometry_service.fetch_geometry(fence_id).await {
            Ok(geometry) => geometry,
            Err(e) => {
                warn!(%fence_id, "⚠️ Skipping fence '{}': {}", details.display_name(), e);
                notify(
                    &self.notices,
                    Notice::FenceSkipped {
                        fence_id,
                        reason: e.to_string(),
                    },
                );
                return Vec::new();
            }
        };

        let mut layers = Vec::with_capacity(2);
        let style = match side {
            Side::Inside => self.config.overlay().inside().clone(),
            Side::Outside => {
                debug!(%fence_id, distance_m = ?details.distance, "Outside fence '{}'", details.display_name());
                match details.closest_point {
                    Some(point) => layers.push(Layer::Marker { fence_id, point }),
                    None => warn!(%fence_id, "⚠️ No closest point reported for outside fence '{}'", details.display_name()),
                }
                self.config.overlay().outside().clone()
            }
        };

        layers.push(Layer::Polygon {
            fence_id,
            points: geometry.points,
            style,
        });
        layers
    }
}

/// Notices are transient, when nobody keeps up with them they are dropped rather than blocking a refresh.
fn notify(notices: &Sender<Notice>, notice: Notice) {
    if let Err(e) = notices.try_send(notice) {
        debug!("Dropped notice: {}", e);
    }
}
