use anyhow::{anyhow, Result};

use tripboard_boundary::{Coordinate, PlaceSource};

use crate::{chart::ChartKind, geo};

mod raw;

pub use raw::DEFAULT_CONFIG_FILE;

/// Highest zoom level of the OpenStreetMap tile servers.
const MAX_ZOOM: u8 = 19;

#[derive(Debug, Clone)]
pub struct Config {
    pub api: Api,
    pub map: Map,
    pub places: Places,
    pub weather: Weather,
    pub travel: Travel,
}

impl Config {
    /// Parses a TOML document; missing sections are taken from the defaults.
    pub fn from_toml_str(cfg_string: &str) -> Result<Self> {
        let raw_config: raw::Config = toml::from_str(cfg_string)?;
        Self::try_from(raw_config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::try_from(raw::Config::default()).expect("Valid default configuration")
    }
}

#[derive(Debug, Clone)]
pub struct Api {
    pub base_url: String,
}

#[derive(Debug, Clone)]
pub struct Map {
    pub default_center: Coordinate,
    pub default_zoom: u8,
    pub search_zoom: u8,
    pub bookmark_zoom: u8,
    /// Relative padding around fitted bounds.
    pub fit_padding: f64,
    pub tile_url: String,
    pub attribution: String,
}

#[derive(Debug, Clone)]
pub struct Places {
    pub default_category: Option<String>,
    pub default_source: PlaceSource,
}

#[derive(Debug, Clone)]
pub struct Weather {
    pub fallback_icon: String,
    /// URL template, `{icon}` is replaced by the icon code.
    pub icon_url: String,
}

#[derive(Debug, Clone)]
pub struct Travel {
    pub default_mode: String,
    pub cost_chart: ChartKind,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            api,
            map,
            places,
            weather,
            travel,
        } = from;

        let raw::Api { base_url } = api.unwrap_or_default();
        let base_url = base_url.trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(anyhow!("Missing API base URL"));
        }
        let api = Api { base_url };

        let raw::Map {
            default_center,
            default_zoom,
            search_zoom,
            bookmark_zoom,
            fit_padding,
            tile_url,
            attribution,
        } = map.unwrap_or_default();

        let raw::LatLng { lat, lng } = default_center;
        let default_center = Coordinate::new(lat, lng);
        if !geo::is_valid(&default_center) {
            return Err(anyhow!("Invalid default map center ({lat}, {lng})"));
        }
        for (name, zoom) in [
            ("default-zoom", default_zoom),
            ("search-zoom", search_zoom),
            ("bookmark-zoom", bookmark_zoom),
        ] {
            if zoom > MAX_ZOOM {
                return Err(anyhow!("The {name} must not exceed {MAX_ZOOM}"));
            }
        }
        if !fit_padding.is_finite() || fit_padding < 0.0 {
            return Err(anyhow!("Invalid fit padding {fit_padding}"));
        }
        let map = Map {
            default_center,
            default_zoom,
            search_zoom,
            bookmark_zoom,
            fit_padding,
            tile_url,
            attribution,
        };

        let raw::Places {
            default_category,
            default_source,
        } = places.unwrap_or_default();
        let default_category = default_category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());
        let places = Places {
            default_category,
            default_source,
        };

        let raw::Weather {
            fallback_icon,
            icon_url,
        } = weather.unwrap_or_default();
        if !icon_url.contains("{icon}") {
            log::warn!("The weather icon URL has no {{icon}} placeholder");
        }
        let weather = Weather {
            fallback_icon,
            icon_url,
        };

        let raw::Travel {
            default_mode,
            cost_chart,
        } = travel.unwrap_or_default();
        if cost_chart == ChartKind::Line {
            return Err(anyhow!("A line chart cannot show cost components"));
        }
        let travel = Travel {
            default_mode,
            cost_chart,
        };

        Ok(Self {
            api,
            map,
            places,
            weather,
            travel,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_default_config() {
        let cfg = Config::default();
        assert_eq!(cfg.api.base_url, "/api");
        assert_eq!(cfg.map.default_center, Coordinate::new(40.7128, -74.0060));
        assert_eq!(cfg.places.default_source, PlaceSource::Auto);
        assert_eq!(cfg.travel.cost_chart, ChartKind::Bar);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let cfg = Config::from_toml_str(
            r#"
            [api]
            base-url = "https://example.org/api/"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.api.base_url, "https://example.org/api");
        assert_eq!(cfg.map.search_zoom, 12);
        assert_eq!(cfg.weather.fallback_icon, "01d");
    }

    #[test]
    fn reject_invalid_zoom() {
        let toml = DEFAULT_CONFIG_FILE.replace("search-zoom = 12", "search-zoom = 23");
        assert!(Config::from_toml_str(&toml).is_err());
    }

    #[test]
    fn reject_invalid_center() {
        let toml = DEFAULT_CONFIG_FILE.replace("lat = 40.7128", "lat = 140.7128");
        assert!(Config::from_toml_str(&toml).is_err());
    }

    #[test]
    fn reject_line_cost_chart() {
        let toml = DEFAULT_CONFIG_FILE.replace(r#"cost-chart = "bar""#, r#"cost-chart = "line""#);
        assert!(Config::from_toml_str(&toml).is_err());
    }

    #[test]
    fn blank_category_means_none() {
        let toml = DEFAULT_CONFIG_FILE.replace(
            r#"default-category = "attraction""#,
            r#"default-category = " ""#,
        );
        let cfg = Config::from_toml_str(&toml).unwrap();
        assert!(cfg.places.default_category.is_none());
    }
}
