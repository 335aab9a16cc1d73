use std::fmt;

use serde::{Deserialize, Serialize};

mod de;

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq))]
pub struct Coordinate {
    #[serde(alias = "latitude")]
    pub lat: f64,
    #[serde(alias = "lon", alias = "longitude")]
    pub lng: f64,
}

impl Coordinate {
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq))]
pub struct MapBbox {
    pub sw: Coordinate,
    pub ne: Coordinate,
}

// -- geocode -- //

/// The geocoding endpoints answer in one of three shapes.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
#[serde(untagged)]
pub enum GeocodeResponse {
    Results {
        results: Vec<GeocodeHit>,
    },
    Centered {
        center: Coordinate,
        label: Option<String>,
    },
    Single(GeocodeHit),
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct GeocodeHit {
    #[serde(deserialize_with = "de::number_or_string")]
    pub lat          : f64,
    #[serde(deserialize_with = "de::number_or_string")]
    pub lon          : f64,
    pub display_name : Option<String>,
    pub name         : Option<String>,
    pub country      : Option<String>,
}

// -- weather -- //

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct WeatherReport {
    pub current: Option<CurrentWeather>,
    pub daily: Option<DailySeries>,
    pub forecast: Option<Forecast>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct CurrentWeather {
    pub main: Option<MainReadings>,
    #[serde(default)]
    pub weather: Vec<Condition>,
    pub wind: Option<Wind>,
    pub name: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy))]
pub struct MainReadings {
    pub temp: Option<f64>,
    pub humidity: Option<f64>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Condition {
    pub main: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy))]
pub struct Wind {
    pub speed: Option<f64>,
}

/// Forecast aggregated to daily averages by the backend.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct DailySeries {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub temp: Vec<f64>,
    #[serde(default)]
    pub wind: Vec<f64>,
    #[serde(default)]
    pub humidity: Vec<f64>,
}

/// Raw 3-hourly forecast.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct Forecast {
    #[serde(default)]
    pub list: Vec<ForecastItem>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct ForecastItem {
    pub dt: Option<i64>,
    pub dt_txt: Option<String>,
    pub main: Option<MainReadings>,
}

// -- places -- //

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct PlacesResponse {
    #[serde(alias = "places", default)]
    pub results: Vec<PlaceRecord>,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct PlaceRecord {
    pub id         : Option<ExternalId>,
    pub name       : Option<String>,
    pub address    : Option<String>,
    #[serde(alias = "lat")]
    pub latitude   : Option<f64>,
    #[serde(alias = "lon")]
    pub longitude  : Option<f64>,
    pub categories : Option<String>,
    pub category   : Option<String>,
    pub source     : Option<String>,
    pub distance   : Option<f64>,
}

/// Foursquare ids are strings, OpenStreetMap ids are numbers.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(untagged)]
pub enum ExternalId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ExternalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "lowercase")]
pub enum PlaceSource {
    /// Foursquare if the backend has a key, OpenStreetMap otherwise.
    #[default]
    Auto,
    Osm,
}

impl PlaceSource {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Osm => "osm",
        }
    }
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct PlacesQuery {
    pub at: Coordinate,
    pub query: Option<String>,
    pub source: PlaceSource,
}

// -- travel -- //

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct TravelQuery {
    pub origin: Coordinate,
    pub destination: Coordinate,
    pub mode: String,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct TravelEstimate {
    #[serde(default)]
    pub distance_km    : f64,
    #[serde(default)]
    pub duration_min   : f64,
    pub mode           : Option<String>,
    pub cost_usd       : Option<f64>,
    pub cost_breakdown : Option<CostBreakdown>,
    pub cost           : Option<CostModel>,
    #[serde(default, deserialize_with = "de::ok_or_none")]
    pub geometry       : Option<RouteGeometry>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq))]
pub struct CostBreakdown {
    pub fuel: f64,
    pub time: f64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq))]
pub struct CostModel {
    pub base_fee_usd: f64,
    pub variable_usd: f64,
    pub total_usd: f64,
}

/// GeoJSON `LineString`, positions as `[lon, lat]`.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct RouteGeometry {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub coordinates: Vec<Vec<f64>>,
}

// -- bookmarks -- //

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Bookmark {
    pub id         : i64,
    pub name       : String,
    #[serde(alias = "lat")]
    pub latitude   : f64,
    #[serde(alias = "lon")]
    pub longitude  : f64,
    pub address    : Option<String>,
    pub city       : Option<String>,
    pub country    : Option<String>,
    #[serde(alias = "note")]
    pub notes      : Option<String>,
    pub category   : Option<String>,
    pub created_at : Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct BookmarksResponse {
    #[serde(alias = "bookmarks", default)]
    pub results: Vec<Bookmark>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct NewBookmark {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
}

// -- errors -- //

/// Error body of a failed API call.
#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, PartialEq, thiserror::Error)
)]
#[cfg_attr(feature = "extra-derive", error("{error}"))]
pub struct Error {
    pub error: String,
}
