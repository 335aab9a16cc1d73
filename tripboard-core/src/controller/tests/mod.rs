use super::*;

use std::{
    cell::{Cell, RefCell},
    collections::{HashMap, HashSet, VecDeque},
};

use async_trait::async_trait;
use futures::channel::oneshot;

use crate::{
    chart::ChartSpec,
    gateways::{self, Result as GatewayResult},
    map::MapMarker,
    render::{BookmarkList, PlacesGrid, WeatherCard},
};
use tripboard_boundary::{
    Bookmark, Coordinate, GeocodeResponse, MapBbox, NewBookmark, PlaceRecord, PlacesQuery,
    TravelEstimate, TravelQuery, WeatherReport,
};


#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Geocode(String),
    Weather(Coordinate),
    Places(PlacesQuery),
    Travel(TravelQuery),
    Bookmarks,
    CreateBookmark(NewBookmark),
    DeleteBookmark(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Geocode,
    Weather,
    Places,
    Travel,
    Bookmarks,
    CreateBookmark,
    DeleteBookmark,
}

#[derive(Default)]
pub struct MockGateway {
    pub geocode: RefCell<HashMap<String, GeocodeResponse>>,
    pub pending_geocode: RefCell<VecDeque<oneshot::Receiver<GeocodeResponse>>>,
    pub weather: RefCell<Option<WeatherReport>>,
    pub pending_weather: RefCell<VecDeque<oneshot::Receiver<WeatherReport>>>,
    pub places: RefCell<Vec<PlaceRecord>>,
    pub travel: RefCell<Option<TravelEstimate>>,
    pub bookmarks: RefCell<Vec<Bookmark>>,
    pub last_bookmark_id: Cell<i64>,
    pub failing: RefCell<HashSet<Endpoint>>,
    pub calls: RefCell<Vec<Call>>,
}

impl MockGateway {
    fn record(&self, call: Call, endpoint: Endpoint) -> GatewayResult<()> {
        self.calls.borrow_mut().push(call);
        if self.failing.borrow().contains(&endpoint) {
            return Err(gateways::Error::Fetch(format!("{endpoint:?} failed")));
        }
        Ok(())
    }

    pub fn fail(&self, endpoint: Endpoint) {
        self.failing.borrow_mut().insert(endpoint);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }
}

#[async_trait(?Send)]
impl TravelGateway for MockGateway {
    async fn geocode(&self, query: &str) -> GatewayResult<GeocodeResponse> {
        self.record(Call::Geocode(query.to_string()), Endpoint::Geocode)?;
        let pending = self.pending_geocode.borrow_mut().pop_front();
        if let Some(rx) = pending {
            return rx
                .await
                .map_err(|_| gateways::Error::Fetch("Canceled".into()));
        }
        Ok(self
            .geocode
            .borrow()
            .get(query)
            .cloned()
            .unwrap_or(GeocodeResponse::Results { results: vec![] }))
    }

    async fn weather(&self, at: Coordinate) -> GatewayResult<WeatherReport> {
        self.record(Call::Weather(at), Endpoint::Weather)?;
        let pending = self.pending_weather.borrow_mut().pop_front();
        if let Some(rx) = pending {
            return rx
                .await
                .map_err(|_| gateways::Error::Fetch("Canceled".into()));
        }
        self.weather
            .borrow()
            .clone()
            .ok_or_else(|| gateways::Error::Api("No weather".into()))
    }

    async fn places(&self, query: &PlacesQuery) -> GatewayResult<Vec<PlaceRecord>> {
        self.record(Call::Places(query.clone()), Endpoint::Places)?;
        Ok(self.places.borrow().clone())
    }

    async fn travel(&self, query: &TravelQuery) -> GatewayResult<TravelEstimate> {
        self.record(Call::Travel(query.clone()), Endpoint::Travel)?;
        self.travel
            .borrow()
            .clone()
            .ok_or_else(|| gateways::Error::Api("No route".into()))
    }

    async fn bookmarks(&self) -> GatewayResult<Vec<Bookmark>> {
        self.record(Call::Bookmarks, Endpoint::Bookmarks)?;
        Ok(self.bookmarks.borrow().clone())
    }

    async fn create_bookmark(&self, bookmark: &NewBookmark) -> GatewayResult<()> {
        self.record(Call::CreateBookmark(bookmark.clone()), Endpoint::CreateBookmark)?;
        let id = self.last_bookmark_id.get() + 1;
        self.last_bookmark_id.set(id);
        self.bookmarks.borrow_mut().push(Bookmark {
            id,
            name: bookmark.name.clone(),
            latitude: bookmark.latitude,
            longitude: bookmark.longitude,
            address: bookmark.address.clone(),
            city: bookmark.city.clone(),
            country: bookmark.country.clone(),
            notes: bookmark.notes.clone(),
            category: bookmark.category.clone(),
            created_at: None,
        });
        Ok(())
    }

    async fn delete_bookmark(&self, id: i64) -> GatewayResult<()> {
        self.record(Call::DeleteBookmark(id), Endpoint::DeleteBookmark)?;
        self.bookmarks.borrow_mut().retain(|b| b.id != id);
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingView {
    pub updates: RefCell<Vec<ViewUpdate>>,
}

impl View for RecordingView {
    fn apply(&self, update: ViewUpdate) {
        self.updates.borrow_mut().push(update);
    }
}

impl RecordingView {
    pub fn alerts(&self) -> Vec<String> {
        self.updates
            .borrow()
            .iter()
            .filter_map(|u| match u {
                ViewUpdate::Alert(msg) => Some(msg.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn busy_changes(&self) -> Vec<bool> {
        self.updates
            .borrow()
            .iter()
            .filter_map(|u| match u {
                ViewUpdate::Busy(busy) => Some(*busy),
                _ => None,
            })
            .collect()
    }

    pub fn last_weather(&self) -> Option<PanelContent<WeatherCard>> {
        self.updates.borrow().iter().rev().find_map(|u| match u {
            ViewUpdate::Weather(content) => Some(content.clone()),
            _ => None,
        })
    }

    pub fn last_places(&self) -> Option<PanelContent<PlacesGrid>> {
        self.updates.borrow().iter().rev().find_map(|u| match u {
            ViewUpdate::Places(content) => Some(content.clone()),
            _ => None,
        })
    }

    pub fn last_bookmarks(&self) -> Option<PanelContent<BookmarkList>> {
        self.updates.borrow().iter().rev().find_map(|u| match u {
            ViewUpdate::Bookmarks(content) => Some(content.clone()),
            _ => None,
        })
    }

    pub fn count(&self, pred: impl Fn(&ViewUpdate) -> bool) -> usize {
        self.updates.borrow().iter().filter(|u| pred(u)).count()
    }
}

#[derive(Default)]
pub struct FakeMap {
    pub views: Vec<(Coordinate, u8)>,
    pub fits: Vec<MapBbox>,
    pub markers: HashMap<usize, MapMarker>,
    pub route: Option<(usize, Vec<Coordinate>)>,
    next_handle: usize,
}

impl FakeMap {
    fn handle(&mut self) -> usize {
        self.next_handle += 1;
        self.next_handle
    }
}

impl MapLayer for FakeMap {
    type Marker = usize;
    type Route = usize;

    fn set_view(&mut self, center: Coordinate, zoom: u8) {
        self.views.push((center, zoom));
    }
    fn add_marker(&mut self, marker: &MapMarker) -> usize {
        let handle = self.handle();
        self.markers.insert(handle, marker.clone());
        handle
    }
    fn remove_marker(&mut self, marker: usize) {
        assert!(self.markers.remove(&marker).is_some(), "unknown marker");
    }
    fn add_route(&mut self, path: &[Coordinate]) -> usize {
        assert!(self.route.is_none(), "second route");
        let handle = self.handle();
        self.route = Some((handle, path.to_vec()));
        handle
    }
    fn remove_route(&mut self, route: usize) {
        assert_eq!(self.route.take().map(|(h, _)| h), Some(route));
    }
    fn fit_bounds(&mut self, bbox: &MapBbox) {
        self.fits.push(*bbox);
    }
}

#[derive(Default)]
pub struct FakeCharts {
    pub live: HashMap<Canvas, usize>,
    pub created: Vec<(Canvas, ChartSpec)>,
    pub destroyed: usize,
}

impl ChartBackend for FakeCharts {
    type Handle = (Canvas, usize);

    fn create(&mut self, canvas: Canvas, spec: &ChartSpec) -> Self::Handle {
        assert!(
            !self.live.contains_key(&canvas),
            "second live chart on {canvas:?}"
        );
        self.created.push((canvas, spec.clone()));
        let handle = self.created.len();
        self.live.insert(canvas, handle);
        (canvas, handle)
    }

    fn destroy(&mut self, (canvas, handle): Self::Handle) {
        assert_eq!(self.live.remove(&canvas), Some(handle));
        self.destroyed += 1;
    }
}

impl FakeCharts {
    pub fn created_on(&self, canvas: Canvas) -> Vec<&ChartSpec> {
        self.created
            .iter()
            .filter(|(c, _)| *c == canvas)
            .map(|(_, spec)| spec)
            .collect()
    }
}

pub type TestController = ViewController<MockGateway, RecordingView, FakeMap, FakeCharts>;

pub fn controller(gateway: MockGateway) -> TestController {
    ViewController::new(
        Config::default(),
        gateway,
        RecordingView::default(),
        FakeMap::default(),
        FakeCharts::default(),
    )
}

pub fn json<T: serde::de::DeserializeOwned>(json: &str) -> T {
    serde_json::from_str(json).unwrap()
}

pub fn paris_gateway() -> MockGateway {
    let gateway = MockGateway::default();
    gateway.geocode.borrow_mut().insert(
        "Paris".into(),
        json(r#"{"results":[{"lat":48.85,"lon":2.35,"display_name":"Paris, France"}]}"#),
    );
    *gateway.weather.borrow_mut() = Some(weather_report(18.4));
    *gateway.places.borrow_mut() = places(3);
    gateway
}

pub fn weather_report(temp: f64) -> WeatherReport {
    json(&format!(
        r#"{{
          "current": {{
            "main": {{"temp": {temp}, "humidity": 70}},
            "weather": [{{"main": "Clear", "icon": "01d"}}],
            "wind": {{"speed": 2.0}}
          }},
          "daily": {{"labels": ["Mon", "Tue"], "temp": [18, 19], "wind": [2, 3], "humidity": [70, 60]}}
        }}"#
    ))
}

pub fn places(n: usize) -> Vec<PlaceRecord> {
    (0..n)
        .map(|i| {
            json(&format!(
                r#"{{"id":{i},"name":"Place {i}","lat":{},"lon":{},"category":"museum"}}"#,
                48.80 + i as f64 * 0.01,
                2.30 + i as f64 * 0.01
            ))
        })
        .collect()
}

#[test]
fn report_routes_failures_to_their_surface() {
    let c = controller(MockGateway::default());
    let err = Error::Gateway(gateways::Error::Fetch("offline".into()));
    c.report(Surface::Panel(Panel::Places), &err);
    c.report(Surface::Background, &err);
    c.report(Surface::Flow, &err);
    assert_eq!(
        c.view().last_places(),
        Some(PanelContent::Failed("Failed to load places: offline".into()))
    );
    assert_eq!(c.view().alerts(), vec!["offline"]);
    assert_eq!(c.view().updates.borrow().len(), 2);
}

#[tokio::test]
async fn init_shows_default_center_and_bookmarks() {
    let c = controller(MockGateway::default());
    c.init(None).await;
    assert_eq!(
        c.map().layer().views,
        vec![(Coordinate::new(40.7128, -74.0060), 11)]
    );
    assert_eq!(c.gateway().calls(), vec![Call::Bookmarks]);
    let Some(PanelContent::Ready(list)) = c.view().last_bookmarks() else {
        panic!("no bookmarks shown");
    };
    assert_eq!(list.placeholder(), Some("No bookmarks yet"));
}

#[tokio::test]
async fn init_with_query_searches() {
    let c = controller(paris_gateway());
    c.init(Some("Paris")).await;
    let calls = c.gateway().calls();
    assert!(calls.contains(&Call::Bookmarks));
    assert!(calls.contains(&Call::Geocode("Paris".into())));
    assert_eq!(
        c.map().layer().views.last(),
        Some(&(Coordinate::new(48.85, 2.35), 12))
    );
}
