use serde::Deserialize;

use tripboard_boundary::PlaceSource;

use crate::chart::ChartKind;

pub const DEFAULT_CONFIG_FILE: &str = include_str!("tripboard.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub api: Option<Api>,
    pub map: Option<Map>,
    pub places: Option<Places>,
    pub weather: Option<Weather>,
    pub travel: Option<Travel>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Api {
    pub base_url: String,
}

impl Default for Api {
    fn default() -> Self {
        Config::default().api.expect("API configuration")
    }
}

#[derive(Clone, Copy, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Map {
    pub default_center: LatLng,
    pub default_zoom: u8,
    pub search_zoom: u8,
    pub bookmark_zoom: u8,
    pub fit_padding: f64,
    pub tile_url: String,
    pub attribution: String,
}

impl Default for Map {
    fn default() -> Self {
        Config::default().map.expect("Map configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Places {
    pub default_category: Option<String>,
    #[serde(default)]
    pub default_source: PlaceSource,
}

impl Default for Places {
    fn default() -> Self {
        Config::default().places.expect("Places configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Weather {
    pub fallback_icon: String,
    pub icon_url: String,
}

impl Default for Weather {
    fn default() -> Self {
        Config::default().weather.expect("Weather configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Travel {
    pub default_mode: String,
    pub cost_chart: ChartKind,
}

impl Default for Travel {
    fn default() -> Self {
        Config::default().travel.expect("Travel configuration")
    }
}
