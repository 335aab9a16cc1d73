//! The view controller: reacts to user actions, talks to the backend
//! and feeds the map, the charts and the view.

use std::cell::{Ref, RefCell};

use crate::{
    chart::{Canvas, ChartBackend, ChartRegistry},
    config::Config,
    error::Error,
    gateways::TravelGateway,
    map::{MapLayer, MapPresenter},
    render::PanelContent,
    state::{Panel, Ticket, ViewState},
    view::{View, ViewUpdate},
};

mod bookmarks;
mod search;
mod travel;

#[cfg(test)]
mod tests;

/// Where a failure is shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// Inline in the panel.
    Panel(Panel),
    /// Blocking alert.
    Flow,
    /// Log only.
    Background,
}

pub struct ViewController<G, V, M, C>
where
    M: MapLayer,
    C: ChartBackend,
{
    config: Config,
    gateway: G,
    view: V,
    map: RefCell<MapPresenter<M>>,
    charts: RefCell<ChartRegistry<C>>,
    state: RefCell<ViewState>,
}

impl<G, V, M, C> ViewController<G, V, M, C>
where
    G: TravelGateway,
    V: View,
    M: MapLayer,
    C: ChartBackend,
{
    pub fn new(config: Config, gateway: G, view: V, layer: M, charts: C) -> Self {
        let state = ViewState::new(
            config.places.default_category.clone(),
            config.places.default_source,
        );
        let map = MapPresenter::new(layer, config.map.fit_padding);
        Self {
            config,
            gateway,
            view,
            map: RefCell::new(map),
            charts: RefCell::new(ChartRegistry::new(charts)),
            state: RefCell::new(state),
        }
    }

    /// Shows the default map section and the bookmarks, then searches
    /// `initial_query` if one is given.
    pub async fn init(&self, initial_query: Option<&str>) {
        let center = self.config.map.default_center;
        self.map
            .borrow_mut()
            .set_center(center, self.config.map.default_zoom);
        match initial_query {
            Some(query) => {
                futures::join!(self.load_bookmarks(), self.search(query));
            }
            None => self.load_bookmarks().await,
        }
    }

    /// Maps a failure to the way it is presented.
    pub fn report(&self, surface: Surface, err: &Error) {
        match surface {
            Surface::Panel(Panel::Weather) => {
                log::warn!("Weather unavailable: {err}");
                self.charts.borrow_mut().clear(Canvas::Weather);
                self.view.apply(ViewUpdate::Weather(PanelContent::Failed(format!(
                    "Weather unavailable: {err}"
                ))));
            }
            Surface::Panel(Panel::Places) => {
                log::warn!("Failed to load places: {err}");
                self.view.apply(ViewUpdate::Places(PanelContent::Failed(format!(
                    "Failed to load places: {err}"
                ))));
            }
            Surface::Panel(Panel::Bookmarks) => {
                log::warn!("Failed to load bookmarks: {err}");
                self.view.apply(ViewUpdate::Bookmarks(PanelContent::Failed(format!(
                    "Failed to load bookmarks: {err}"
                ))));
            }
            Surface::Panel(Panel::Location | Panel::Travel) | Surface::Flow => {
                log::warn!("{err}");
                self.view.apply(ViewUpdate::Alert(err.to_string()));
            }
            Surface::Background => {
                log::warn!("{err}");
            }
        }
    }

    fn issue(&self, panel: Panel) -> Ticket {
        self.state.borrow_mut().issue(panel)
    }

    fn is_stale(&self, ticket: Ticket) -> bool {
        let stale = !self.state.borrow().is_latest(ticket);
        if stale {
            log::debug!(
                "Discard stale {:?} response #{}",
                ticket.panel,
                ticket.generation
            );
        }
        stale
    }

    fn busy(&self) -> Busy<'_, V> {
        if self.state.borrow_mut().begin_busy() {
            self.view.apply(ViewUpdate::Busy(true));
        }
        Busy {
            state: &self.state,
            view: &self.view,
        }
    }

    pub const fn config(&self) -> &Config {
        &self.config
    }

    pub const fn gateway(&self) -> &G {
        &self.gateway
    }

    pub const fn view(&self) -> &V {
        &self.view
    }

    pub fn map(&self) -> Ref<'_, MapPresenter<M>> {
        self.map.borrow()
    }

    pub fn charts(&self) -> Ref<'_, ChartRegistry<C>> {
        self.charts.borrow()
    }

    pub fn state(&self) -> Ref<'_, ViewState> {
        self.state.borrow()
    }
}

/// Keeps the busy indicator on until dropped.
struct Busy<'a, V: View> {
    state: &'a RefCell<ViewState>,
    view: &'a V,
}

impl<V: View> Drop for Busy<'_, V> {
    fn drop(&mut self) {
        let idle = self.state.borrow_mut().end_busy();
        if idle {
            self.view.apply(ViewUpdate::Busy(false));
        }
    }
}
