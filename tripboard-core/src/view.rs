use crate::{
    render::{BookmarkList, PanelContent, PlacesGrid, TravelSummary, WeatherCard},
    state::SelectedDestination,
};

/// Presentation updates emitted by the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewUpdate {
    Busy(bool),
    /// Blocking message box.
    Alert(String),
    WeatherLocation(String),
    Weather(PanelContent<WeatherCard>),
    Places(PanelContent<PlacesGrid>),
    Bookmarks(PanelContent<BookmarkList>),
    Travel(TravelSummary),
    Destination(SelectedDestination),
}

pub trait View {
    fn apply(&self, update: ViewUpdate);
}
