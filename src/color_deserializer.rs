use crate::domain::Color;
use serde::de::{Error, Unexpected};
use serde::{Deserialize, Deserializer};

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawColor {
            Hex(String),
            Rgb { r: u8, g: u8, b: u8 },
        }

        match RawColor::deserialize(deserializer)? {
            RawColor::Hex(s) => {
                let normalized = s.trim_start_matches('#').to_lowercase();
                if normalized.len() == 6 && normalized.chars().all(|c| c.is_ascii_hexdigit()) {
                    Ok(Color::Hex(format!("#{}", normalized)))
                } else {
                    Err(Error::invalid_value(Unexpected::Str(&s), &"a 6-digit hex color"))
                }
            }
            RawColor::Rgb { r, g, b } => Ok(Color::RGB(r, g, b)),
        }
    }
}
