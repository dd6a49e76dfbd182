use crate::domain::{Color, Location};
use serde::Deserialize;
use std::fmt::Debug;

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct PolygonStyle {
    pub fill: Color,
    pub outline: Color,
    pub opacity: f64,
}

impl PolygonStyle {
    pub fn inside() -> Self {
        PolygonStyle {
            fill: Color::GREEN,
            outline: Color::WHITE,
            opacity: 0.7,
        }
    }

    pub fn outside() -> Self {
        PolygonStyle {
            fill: Color::RED,
            outline: Color::WHITE,
            opacity: 0.7,
        }
    }
}

/// Passive rendering target for fences. Implementations draw whatever they are told,
/// ordering and atomicity of updates are the caller's responsibility.
pub trait MapOverlay: Debug + Send {
    fn clear_overlays(&mut self);

    fn add_polygon(&mut self, points: &[Location], style: &PolygonStyle);

    fn add_marker(&mut self, point: &Location);
}
