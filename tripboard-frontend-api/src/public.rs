use async_trait::async_trait;
use gloo_net::http::Request;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use tripboard_boundary::{
    Bookmark, BookmarksResponse, Coordinate, GeocodeResponse, NewBookmark, PlaceRecord,
    PlacesQuery, PlacesResponse, TravelEstimate, TravelQuery, WeatherReport,
};
use tripboard_core::{gateways, TravelGateway};

use crate::{into_ack, into_json, Result};

/// Public Tripboard API
#[derive(Clone)]
pub struct PublicApi {
    url: String,
}

pub fn geocode_url(base: &str, query: &str) -> String {
    let encoded_query = utf8_percent_encode(query, NON_ALPHANUMERIC);
    format!("{base}/geocode?q={encoded_query}")
}

pub fn weather_url(base: &str, at: Coordinate) -> String {
    format!("{base}/weather?lat={}&lon={}", at.lat, at.lng)
}

pub fn places_url(base: &str, query: &PlacesQuery) -> String {
    let PlacesQuery { at, query, source } = query;
    let encoded_query = utf8_percent_encode(query.as_deref().unwrap_or_default(), NON_ALPHANUMERIC);
    format!(
        "{base}/places?lat={}&lon={}&query={encoded_query}&source={}",
        at.lat,
        at.lng,
        source.as_str()
    )
}

pub fn travel_url(base: &str, query: &TravelQuery) -> String {
    let TravelQuery {
        origin,
        destination,
        mode,
    } = query;
    let encoded_mode = utf8_percent_encode(mode, NON_ALPHANUMERIC);
    format!(
        "{base}/travel?origin_lat={}&origin_lon={}&dest_lat={}&dest_lon={}&mode={encoded_mode}",
        origin.lat, origin.lng, destination.lat, destination.lng
    )
}

pub fn bookmarks_url(base: &str) -> String {
    format!("{base}/bookmarks")
}

pub fn bookmark_url(base: &str, id: i64) -> String {
    format!("{base}/bookmarks/{id}")
}

impl PublicApi {
    #[must_use]
    pub const fn new(url: String) -> Self {
        Self { url }
    }

    pub async fn geocode(&self, query: &str) -> Result<GeocodeResponse> {
        let url = geocode_url(&self.url, query);
        let response = Request::get(&url).send().await?;
        into_json(response).await
    }

    pub async fn weather(&self, at: Coordinate) -> Result<WeatherReport> {
        let url = weather_url(&self.url, at);
        let response = Request::get(&url).send().await?;
        into_json(response).await
    }

    pub async fn places(&self, query: &PlacesQuery) -> Result<Vec<PlaceRecord>> {
        let url = places_url(&self.url, query);
        let response = Request::get(&url).send().await?;
        let PlacesResponse { results } = into_json(response).await?;
        Ok(results)
    }

    pub async fn travel(&self, query: &TravelQuery) -> Result<TravelEstimate> {
        let url = travel_url(&self.url, query);
        let response = Request::get(&url).send().await?;
        into_json(response).await
    }

    pub async fn bookmarks(&self) -> Result<Vec<Bookmark>> {
        let url = bookmarks_url(&self.url);
        let response = Request::get(&url).send().await?;
        let BookmarksResponse { results } = into_json(response).await?;
        Ok(results)
    }

    pub async fn create_bookmark(&self, bookmark: &NewBookmark) -> Result<()> {
        let url = bookmarks_url(&self.url);
        let response = Request::post(&url).json(bookmark)?.send().await?;
        into_ack(response).await
    }

    pub async fn delete_bookmark(&self, id: i64) -> Result<()> {
        let url = bookmark_url(&self.url, id);
        let response = Request::delete(&url).send().await?;
        into_ack(response).await
    }
}

#[async_trait(?Send)]
impl TravelGateway for PublicApi {
    async fn geocode(&self, query: &str) -> gateways::Result<GeocodeResponse> {
        Ok(Self::geocode(self, query).await?)
    }

    async fn weather(&self, at: Coordinate) -> gateways::Result<WeatherReport> {
        Ok(Self::weather(self, at).await?)
    }

    async fn places(&self, query: &PlacesQuery) -> gateways::Result<Vec<PlaceRecord>> {
        Ok(Self::places(self, query).await?)
    }

    async fn travel(&self, query: &TravelQuery) -> gateways::Result<TravelEstimate> {
        Ok(Self::travel(self, query).await?)
    }

    async fn bookmarks(&self) -> gateways::Result<Vec<Bookmark>> {
        Ok(Self::bookmarks(self).await?)
    }

    async fn create_bookmark(&self, bookmark: &NewBookmark) -> gateways::Result<()> {
        log::debug!("Create bookmark {}", bookmark.name);
        Ok(Self::create_bookmark(self, bookmark).await?)
    }

    async fn delete_bookmark(&self, id: i64) -> gateways::Result<()> {
        log::debug!("Delete bookmark #{id}");
        Ok(Self::delete_bookmark(self, id).await?)
    }
}
