use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct FenceResponse {
    pub geometry: GeometryGet,
}

/// Rings are kept as raw values, only the outer ring is ever decoded.
#[derive(Debug, Deserialize)]
pub struct GeometryGet {
    pub coordinates: Vec<Value>,
}
