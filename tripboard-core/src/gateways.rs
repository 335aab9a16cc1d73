use async_trait::async_trait;
use thiserror::Error;

use tripboard_boundary::{
    Bookmark, Coordinate, GeocodeResponse, NewBookmark, PlaceRecord, PlacesQuery, TravelEstimate,
    TravelQuery, WeatherReport,
};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("{0}")]
    Fetch(String),
    #[error("{0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Backend API of the travel dashboard.
#[async_trait(?Send)]
pub trait TravelGateway {
    async fn geocode(&self, query: &str) -> Result<GeocodeResponse>;
    async fn weather(&self, at: Coordinate) -> Result<WeatherReport>;
    async fn places(&self, query: &PlacesQuery) -> Result<Vec<PlaceRecord>>;
    async fn travel(&self, query: &TravelQuery) -> Result<TravelEstimate>;
    async fn bookmarks(&self) -> Result<Vec<Bookmark>>;
    async fn create_bookmark(&self, bookmark: &NewBookmark) -> Result<()>;
    async fn delete_bookmark(&self, id: i64) -> Result<()>;
}
