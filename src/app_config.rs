use crate::domain::{Location, PolygonStyle};
use config::{Config, ConfigError};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    core: Core,
    geofencing: Geofencing,
    reporting: Reporting,
    #[serde(default)]
    overlay: Overlay,
    location: LocationSettings,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::with_prefix("FENCEWATCH").prefix_separator("_").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn core(&self) -> &Core {
        &self.core
    }

    pub fn geofencing(&self) -> &Geofencing {
        &self.geofencing
    }

    pub fn reporting(&self) -> &Reporting {
        &self.reporting
    }

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    pub fn location(&self) -> &LocationSettings {
        &self.location
    }
}

#[derive(Debug, Deserialize)]
pub struct Core {
    event_buffer_size: usize,
    notice_buffer_size: usize,
}

impl Core {
    pub fn event_buffer_size(&self) -> usize {
        self.event_buffer_size
    }

    pub fn notice_buffer_size(&self) -> usize {
        self.notice_buffer_size
    }
}

#[derive(Debug, Deserialize)]
pub struct Geofencing {
    project_id: String,
    api_key: String,
    report_url: String,
    fences_url: String,
    #[serde(with = "humantime_serde")]
    request_timeout: Duration,
}

impl Geofencing {
    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn report_url(&self) -> &str {
        &self.report_url
    }

    pub fn fences_url(&self) -> &str {
        &self.fences_url
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
}

#[derive(Debug, Deserialize)]
pub struct Reporting {
    distance_threshold_m: f64,
    range: String,
}

impl Reporting {
    pub fn distance_threshold_m(&self) -> f64 {
        self.distance_threshold_m
    }

    /// The initial content of the range input, in meters.
    pub fn range(&self) -> &str {
        &self.range
    }
}

#[derive(Debug, Deserialize)]
pub struct Overlay {
    #[serde(default = "PolygonStyle::inside")]
    inside: PolygonStyle,
    #[serde(default = "PolygonStyle::outside")]
    outside: PolygonStyle,
}

impl Default for Overlay {
    fn default() -> Self {
        Overlay {
            inside: PolygonStyle::inside(),
            outside: PolygonStyle::outside(),
        }
    }
}

impl Overlay {
    pub fn inside(&self) -> &PolygonStyle {
        &self.inside
    }

    pub fn outside(&self) -> &PolygonStyle {
        &self.outside
    }
}

#[derive(Debug, Deserialize)]
pub struct LocationSettings {
    permission_granted: bool,
    #[serde(with = "humantime_serde")]
    interval: Duration,
    route: Vec<Location>,
}

impl LocationSettings {
    pub fn permission_granted(&self) -> bool {
        self.permission_granted
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn route(&self) -> &[Location] {
        &self.route
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                core: Core {
                    event_buffer_size: 8,
                    notice_buffer_size: 8,
                },
                geofencing: Geofencing {
                    project_id: "7d6e9f3a-52c4-4b8a-9d41-0a3c5e2b1f60".to_string(),
                    api_key: "key".to_string(),
                    report_url: "https://geofencing.url/report".to_string(),
                    fences_url: "https://geofencing.url/fences".to_string(),
                    request_timeout: Duration::from_secs(5),
                },
                reporting: Reporting {
                    distance_threshold_m: 10.0,
                    range: "100".to_string(),
                },
                overlay: Overlay::default(),
                location: LocationSettings {
                    permission_granted: true,
                    interval: Duration::from_millis(10),
                    route: vec![Location::new(52.0, 21.0), Location::new(52.001, 21.0)],
                },
            },
        }
    }

    pub fn geofencing_url(mut self, url: String) -> Self {
        self.config.geofencing.report_url = format!("{}/report", url);
        self.config.geofencing.fences_url = format!("{}/fences", url);
        self
    }

    pub fn permission_granted(mut self, granted: bool) -> Self {
        self.config.location.permission_granted = granted;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Color;
    use config::FileFormat;
    use pretty_assertions::assert_eq;

    const CONFIG: &str = r##"
        [core]
        event_buffer_size = 32
        notice_buffer_size = 16

        [geofencing]
        project_id = "7d6e9f3a-52c4-4b8a-9d41-0a3c5e2b1f60"
        api_key = "secret"
        report_url = "https://api.tomtom.com/geofencing/1/report"
        fences_url = "https://api.tomtom.com/geofencing/1/fences"
        request_timeout = "10s"

        [reporting]
        distance_threshold_m = 10.0
        range = "500"

        [overlay.inside]
        fill = "#00FF00"
        outline = { r = 255, g = 255, b = 255 }
        opacity = 0.5

        [location]
        permission_granted = true
        interval = "5s"
        route = [ { latitude = 52.2319, longitude = 21.0067 } ]
    "##;

    fn parse(toml: &str) -> Result<AppConfig, ConfigError> {
        Config::builder()
            .add_source(config::File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    #[test]
    fn deserializes_the_configuration() {
        let config = parse(CONFIG).unwrap();

        assert_eq!(config.core().event_buffer_size(), 32);
        assert_eq!(config.geofencing().api_key(), "secret");
        assert_eq!(config.geofencing().request_timeout(), Duration::from_secs(10));
        assert_eq!(config.reporting().range(), "500");
        assert_eq!(config.location().interval(), Duration::from_secs(5));
        assert_eq!(config.location().route(), &[Location::new(52.2319, 21.0067)]);
        assert_eq!(
            config.overlay().inside(),
            &PolygonStyle {
                fill: Color::Hex("#00ff00".to_string()),
                outline: Color::RGB(255, 255, 255),
                opacity: 0.5,
            }
        );
        assert_eq!(config.overlay().outside(), &PolygonStyle::outside());
    }

    #[test]
    fn rejects_a_route_with_an_invalid_location() {
        let toml = CONFIG.replace("latitude = 52.2319", "latitude = 152.2319");

        assert!(parse(&toml).is_err());
    }
}
