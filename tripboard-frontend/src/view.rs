use leptos::*;

use tripboard_core::{
    render::{BookmarkList, PanelContent, PlacesGrid, TravelSummary, WeatherCard},
    state::SelectedDestination,
    View, ViewUpdate,
};

/// Presents controller updates through Leptos signals.
#[derive(Clone, Copy)]
pub struct SignalView {
    pub busy: RwSignal<bool>,
    pub weather_location: RwSignal<String>,
    pub weather: RwSignal<Option<PanelContent<WeatherCard>>>,
    pub places: RwSignal<Option<PanelContent<PlacesGrid>>>,
    pub bookmarks: RwSignal<Option<PanelContent<BookmarkList>>>,
    pub travel: RwSignal<Option<TravelSummary>>,
    pub destination: RwSignal<Option<SelectedDestination>>,
}

impl SignalView {
    pub fn new() -> Self {
        Self {
            busy: RwSignal::new(false),
            weather_location: RwSignal::new(String::new()),
            weather: RwSignal::new(None),
            places: RwSignal::new(None),
            bookmarks: RwSignal::new(None),
            travel: RwSignal::new(None),
            destination: RwSignal::new(None),
        }
    }
}

impl View for SignalView {
    fn apply(&self, update: ViewUpdate) {
        match update {
            ViewUpdate::Busy(busy) => self.busy.set(busy),
            ViewUpdate::Alert(msg) => {
                if window().alert_with_message(&msg).is_err() {
                    log::error!("Unable to show alert: {msg}");
                }
            }
            ViewUpdate::WeatherLocation(label) => self.weather_location.set(label),
            ViewUpdate::Weather(content) => self.weather.set(Some(content)),
            ViewUpdate::Places(content) => self.places.set(Some(content)),
            ViewUpdate::Bookmarks(content) => self.bookmarks.set(Some(content)),
            ViewUpdate::Travel(summary) => self.travel.set(Some(summary)),
            ViewUpdate::Destination(destination) => self.destination.set(Some(destination)),
        }
    }
}
