use crate::domain::{Location, MapOverlay, PolygonStyle};
use tracing::{debug, trace};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Idle,
    Reporting,
    Rendered,
}

/// A single shape produced by a refresh, drawn only once the whole refresh is complete.
#[derive(Debug, Clone, PartialEq)]
pub enum Layer {
    Polygon { fence_id: Uuid, points: Vec<Location>, style: PolygonStyle },
    Marker { fence_id: Uuid, point: Location },
}

/// The overlay together with the generation of the most recently started report. Both live behind
/// one lock so a clear and the redraw that follows it are never interleaved with another refresh.
#[derive(Debug)]
pub struct RenderTarget {
    overlay: Box<dyn MapOverlay>,
    generation: u64,
    state: ControllerState,
    rendered: bool,
}

impl RenderTarget {
    pub fn new(overlay: Box<dyn MapOverlay>) -> Self {
        RenderTarget {
            overlay,
            generation: 0,
            state: ControllerState::Idle,
            rendered: false,
        }
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Starts a new generation, superseding any report still in flight.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.state = ControllerState::Reporting;
        self.generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    /// Returns the state to what it was before the report started. Returns false when the failed
    /// report was already superseded.
    pub fn fail(&mut self, generation: u64) -> bool {
        if !self.is_current(generation) {
            return false;
        }

        self.state = if self.rendered { ControllerState::Rendered } else { ControllerState::Idle };
        true
    }

    /// Replaces everything on the overlay with `layers`. Stale generations are discarded and
    /// leave the overlay untouched.
    pub fn render(&mut self, generation: u64, layers: &[Layer]) -> bool {
        if !self.is_current(generation) {
            debug!(generation, current = self.generation, "🗑️ Discarding layers of a superseded report");
            return false;
        }

        self.overlay.clear_overlays();
        for layer in layers {
            match layer {
                Layer::Polygon { fence_id, points, style } => {
                    trace!(%fence_id, "Drawing fence polygon");
                    self.overlay.add_polygon(points, style);
                }
                Layer::Marker { fence_id, point } => {
                    trace!(%fence_id, "Drawing closest point marker");
                    self.overlay.add_marker(point);
                }
            }
        }

        self.rendered = true;
        self.state = ControllerState::Rendered;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report_controller::test_support::{OverlayOp, RecordingOverlay};
    use pretty_assertions::assert_eq;

    fn polygon() -> Layer {
        Layer::Polygon {
            fence_id: Uuid::nil(),
            points: vec![Location::new(1.0, 1.0), Location::new(1.0, 2.0), Location::new(2.0, 2.0)],
            style: PolygonStyle::inside(),
        }
    }

    #[test]
    fn begin_moves_to_reporting_with_a_new_generation() {
        let mut target = RenderTarget::new(Box::new(RecordingOverlay::default()));

        assert_eq!(target.state(), ControllerState::Idle);
        assert_eq!(target.begin(), 1);
        assert_eq!(target.begin(), 2);
        assert_eq!(target.state(), ControllerState::Reporting);
    }

    #[test]
    fn render_clears_then_draws() {
        let overlay = RecordingOverlay::default();
        let mut target = RenderTarget::new(Box::new(overlay.clone()));
        let generation = target.begin();

        let marker = Layer::Marker {
            fence_id: Uuid::nil(),
            point: Location::new(3.0, 3.0),
        };
        assert!(target.render(generation, &[polygon(), marker]));

        assert_eq!(
            overlay.ops(),
            vec![
                OverlayOp::Clear,
                OverlayOp::Polygon {
                    points: vec![Location::new(1.0, 1.0), Location::new(1.0, 2.0), Location::new(2.0, 2.0)],
                    style: PolygonStyle::inside()
                },
                OverlayOp::Marker(Location::new(3.0, 3.0)),
            ]
        );
        assert_eq!(target.state(), ControllerState::Rendered);
    }

    #[test]
    fn render_discards_a_stale_generation() {
        let overlay = RecordingOverlay::default();
        let mut target = RenderTarget::new(Box::new(overlay.clone()));
        let stale = target.begin();
        let current = target.begin();

        assert!(!target.render(stale, &[polygon()]));
        assert!(overlay.ops().is_empty());
        assert_eq!(target.state(), ControllerState::Reporting);

        assert!(target.render(current, &[polygon()]));
        assert_eq!(overlay.ops().len(), 2);
    }

    #[test]
    fn fail_reverts_to_idle_before_anything_was_rendered() {
        let mut target = RenderTarget::new(Box::new(RecordingOverlay::default()));
        let generation = target.begin();

        assert!(target.fail(generation));
        assert_eq!(target.state(), ControllerState::Idle);
    }

    #[test]
    fn fail_reverts_to_rendered_after_a_render() {
        let mut target = RenderTarget::new(Box::new(RecordingOverlay::default()));
        let first = target.begin();
        target.render(first, &[polygon()]);
        let second = target.begin();

        assert!(target.fail(second));
        assert_eq!(target.state(), ControllerState::Rendered);
    }

    #[test]
    fn fail_ignores_a_stale_generation() {
        let mut target = RenderTarget::new(Box::new(RecordingOverlay::default()));
        let stale = target.begin();
        target.begin();

        assert!(!target.fail(stale));
        assert_eq!(target.state(), ControllerState::Reporting);
    }
}
