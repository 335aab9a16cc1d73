use super::{Surface, ViewController};
use crate::{
    chart::{Canvas, ChartBackend},
    error::Error,
    gateways::TravelGateway,
    map::MapLayer,
    render::{cost_chart, Place, TravelSummary},
    state::{Panel, SelectedDestination},
    usecases,
    view::{View, ViewUpdate},
};

impl<G, V, M, C> ViewController<G, V, M, C>
where
    G: TravelGateway,
    V: View,
    M: MapLayer,
    C: ChartBackend,
{
    pub fn select_destination(&self, place: &Place) {
        let destination = SelectedDestination {
            name: place.name.clone(),
            address: place.address.clone(),
            coordinate: place.coordinate,
        };
        self.set_destination(destination);
    }

    fn set_destination(&self, destination: SelectedDestination) {
        log::debug!("Destination: {}", destination.name);
        self.state.borrow_mut().set_destination(destination.clone());
        self.view.apply(ViewUpdate::Destination(destination));
    }

    /// Estimates the trip from the map center to the selected destination.
    pub async fn estimate_travel(&self, mode: &str) {
        let mode = match mode.trim() {
            "" => self.config.travel.default_mode.as_str(),
            mode => mode,
        };
        let origin = self.map.borrow().view_state().center;
        let query = {
            let state = self.state.borrow();
            usecases::travel_query(origin, state.destination(), mode)
        };
        let query = match query {
            Ok(query) => query,
            Err(err) => {
                self.report(Surface::Flow, &err);
                return;
            }
        };
        let _busy = self.busy();
        let ticket = self.issue(Panel::Travel);
        let result = self.gateway.travel(&query).await;
        if self.is_stale(ticket) {
            return;
        }
        let estimate = match result {
            Ok(estimate) => estimate,
            Err(err) => {
                self.report(Surface::Panel(Panel::Travel), &Error::from(err));
                return;
            }
        };
        let summary = TravelSummary::new(&estimate);
        log::info!("{}", summary.text());
        self.view.apply(ViewUpdate::Travel(summary));
        {
            let mut charts = self.charts.borrow_mut();
            match cost_chart(&estimate, self.config.travel.cost_chart) {
                Some(spec) => charts.replace(Canvas::Cost, &spec),
                None => charts.clear(Canvas::Cost),
            }
        }
        self.map.borrow_mut().draw_route(estimate.geometry.as_ref());
    }

    /// Geocodes a destination typed by name and estimates the trip to it.
    pub async fn estimate_travel_to(&self, text: &str, mode: &str) {
        if usecases::normalize_query(text).is_none() {
            return;
        }
        let _busy = self.busy();
        match usecases::destination_by_name(&self.gateway, text).await {
            Ok(Some(destination)) => {
                self.set_destination(destination);
                self.estimate_travel(mode).await;
            }
            Ok(None) => {}
            Err(err) => self.report(Surface::Flow, &err),
        }
    }
}
