use tripboard_boundary::{Coordinate, PlaceSource};

use super::{Surface, ViewController};
use crate::{
    chart::{Canvas, ChartBackend},
    error::{Error, GeolocationError},
    gateways::TravelGateway,
    map::MapLayer,
    render::{weather_panel, PanelContent, Place, PlacesGrid},
    state::{Panel, ResolvedLocation},
    usecases,
    view::{View, ViewUpdate},
};

const DEVICE_LOCATION_LABEL: &str = "Your location";

impl<G, V, M, C> ViewController<G, V, M, C>
where
    G: TravelGateway,
    V: View,
    M: MapLayer,
    C: ChartBackend,
{
    pub async fn search(&self, text: &str) {
        if usecases::normalize_query(text).is_none() {
            return;
        }
        let _busy = self.busy();
        let ticket = self.issue(Panel::Location);
        let result = usecases::resolve_query(&self.gateway, text).await;
        if self.is_stale(ticket) {
            return;
        }
        match result {
            Ok(Some(location)) => self.show_location(location).await,
            Ok(None) => {}
            Err(err) => self.report(Surface::Flow, &err),
        }
    }

    /// Handles the outcome of a device position request.
    pub async fn use_device_position(&self, position: Result<Coordinate, GeolocationError>) {
        match position {
            Ok(coordinate) => {
                // Supersedes a search that is still waiting for its location
                self.issue(Panel::Location);
                let location = ResolvedLocation {
                    coordinate,
                    label: DEVICE_LOCATION_LABEL.to_string(),
                };
                self.show_location(location).await;
            }
            Err(err) => self.report(Surface::Flow, &Error::from(err)),
        }
    }

    pub async fn show_location(&self, location: ResolvedLocation) {
        let ResolvedLocation { coordinate, label } = location.clone();
        log::info!("Show {label} at ({}, {})", coordinate.lat, coordinate.lng);
        self.state.borrow_mut().set_location(location);
        self.map
            .borrow_mut()
            .set_center(coordinate, self.config.map.search_zoom);
        futures::join!(
            self.load_weather(coordinate, label),
            self.load_places(coordinate)
        );
    }

    pub async fn load_weather(&self, at: Coordinate, label: String) {
        let ticket = self.issue(Panel::Weather);
        self.view.apply(ViewUpdate::WeatherLocation(label));
        self.view.apply(ViewUpdate::Weather(PanelContent::Loading));
        let result = self.gateway.weather(at).await;
        if self.is_stale(ticket) {
            return;
        }
        let panel = result
            .map_err(Error::from)
            .and_then(|report| weather_panel(&report, &self.config.weather).map_err(Error::from));
        match panel {
            Ok(panel) => {
                self.view
                    .apply(ViewUpdate::Weather(PanelContent::Ready(panel.card)));
                let mut charts = self.charts.borrow_mut();
                match panel.chart {
                    Some(spec) => charts.replace(Canvas::Weather, &spec),
                    None => charts.clear(Canvas::Weather),
                }
            }
            Err(err) => self.report(Surface::Panel(Panel::Weather), &err),
        }
    }

    pub async fn load_places(&self, at: Coordinate) {
        let ticket = self.issue(Panel::Places);
        let query = {
            let state = self.state.borrow();
            usecases::places_query(at, state.category(), state.source())
        };
        self.view.apply(ViewUpdate::Places(PanelContent::Loading));
        let result = usecases::places_for(&self.gateway, &query).await;
        if self.is_stale(ticket) {
            return;
        }
        match result {
            Ok(places) => {
                log::debug!("Loaded {} places", places.len());
                let grid = PlacesGrid::new(places);
                self.map.borrow_mut().replace_markers(grid.markers());
                self.view.apply(ViewUpdate::Places(PanelContent::Ready(grid)));
            }
            Err(err) => self.report(Surface::Panel(Panel::Places), &err),
        }
    }

    /// Changes the category and reloads the places of the current location.
    pub async fn filter_places(&self, category: Option<String>) {
        let category = category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());
        let at = {
            let mut state = self.state.borrow_mut();
            state.set_category(category);
            state.location().map(|l| l.coordinate)
        };
        let Some(at) = at else {
            log::debug!("No location to filter places for");
            return;
        };
        self.load_places(at).await;
    }

    pub fn set_place_source(&self, source: PlaceSource) {
        self.state.borrow_mut().set_source(source);
    }

    pub fn center_on(&self, place: &Place) {
        self.map
            .borrow_mut()
            .set_center(place.coordinate, self.config.map.search_zoom);
    }
}
