use crate::domain::{Location, MapOverlay, PolygonStyle};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Polygon {
        points: Vec<Location>,
        fill: String,
        outline: String,
        opacity: f64,
    },
    Marker(Location),
}

/// Keeps the shapes currently on the map and logs every change to them.
#[derive(Debug, Default)]
pub struct TracingOverlay {
    shapes: Vec<Shape>,
}

impl TracingOverlay {
    pub fn new() -> Self {
        TracingOverlay::default()
    }

    #[cfg(test)]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }
}

impl MapOverlay for TracingOverlay {
    fn clear_overlays(&mut self) {
        debug!("🗺️ Clearing {} shape(s)", self.shapes.len());
        self.shapes.clear();
    }

    fn add_polygon(&mut self, points: &[Location], style: &PolygonStyle) {
        info!(fill = %style.fill.to_hex(), opacity = style.opacity, "🗺️ Polygon with {} point(s)", points.len());
        self.shapes.push(Shape::Polygon {
            points: points.to_vec(),
            fill: style.fill.to_hex(),
            outline: style.outline.to_hex(),
            opacity: style.opacity,
        });
    }

    fn add_marker(&mut self, point: &Location) {
        info!("🗺️ Marker at ({}, {})", point.latitude, point.longitude);
        self.shapes.push(Shape::Marker(*point));
    }
}
