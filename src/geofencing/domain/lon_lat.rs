use crate::domain::Location;
use serde::de::Error;
use serde::{Deserialize, Deserializer};

/// A GeoJSON position. The wire order is `[longitude, latitude, altitude?]`, the wrapped
/// [`Location`] holds the swapped values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LonLat(pub Location);

impl<'de> Deserialize<'de> for LonLat {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let values = Vec::<f64>::deserialize(deserializer)?;
        let (longitude, latitude) = match values.as_slice() {
            [longitude, latitude, ..] => (*longitude, *latitude),
            _ => return Err(Error::invalid_length(values.len(), &"a [longitude, latitude] position")),
        };

        let location = Location::new(latitude, longitude);
        if !location.is_valid() {
            return Err(Error::custom(format!("position [{}, {}] is out of range", longitude, latitude)));
        }

        Ok(LonLat(location))
    }
}
