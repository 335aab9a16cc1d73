use tripboard_boundary::{Coordinate, MapBbox, RouteGeometry};

use crate::geo;

#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker {
    pub at: Coordinate,
    pub title: String,
    pub detail: Option<String>,
}

/// The mapping library.
pub trait MapLayer {
    type Marker;
    type Route;

    fn set_view(&mut self, center: Coordinate, zoom: u8);
    fn add_marker(&mut self, marker: &MapMarker) -> Self::Marker;
    fn remove_marker(&mut self, marker: Self::Marker);
    fn add_route(&mut self, path: &[Coordinate]) -> Self::Route;
    fn remove_route(&mut self, route: Self::Route);
    fn fit_bounds(&mut self, bbox: &MapBbox);
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MapViewState {
    pub center: Option<Coordinate>,
    pub zoom: Option<u8>,
    pub markers: Vec<MapMarker>,
    pub route: Option<Vec<Coordinate>>,
}

/// Owns the viewport, the marker layer and the route overlay.
pub struct MapPresenter<L: MapLayer> {
    layer: L,
    padding: f64,
    view: MapViewState,
    marker_handles: Vec<L::Marker>,
    route_handle: Option<L::Route>,
}

impl<L: MapLayer> MapPresenter<L> {
    pub fn new(layer: L, padding: f64) -> Self {
        Self {
            layer,
            padding,
            view: MapViewState::default(),
            marker_handles: vec![],
            route_handle: None,
        }
    }

    pub fn set_center(&mut self, center: Coordinate, zoom: u8) {
        self.layer.set_view(center, zoom);
        self.view.center = Some(center);
        self.view.zoom = Some(zoom);
    }

    pub fn replace_markers(&mut self, markers: Vec<MapMarker>) {
        for handle in self.marker_handles.drain(..) {
            self.layer.remove_marker(handle);
        }
        self.marker_handles = markers.iter().map(|m| self.layer.add_marker(m)).collect();
        let bbox = geo::bounds_of(markers.iter().map(|m| &m.at));
        self.view.markers = markers;
        if let Some(bbox) = bbox {
            self.fit(&bbox);
        }
    }

    /// Returns `false` and keeps the current route if the geometry is
    /// absent or malformed.
    pub fn draw_route(&mut self, geometry: Option<&RouteGeometry>) -> bool {
        let Some(path) = geometry.and_then(|g| geo::path_from_lon_lat(&g.coordinates)) else {
            log::debug!("No drawable route geometry");
            return false;
        };
        if let Some(handle) = self.route_handle.take() {
            self.layer.remove_route(handle);
        }
        self.route_handle = Some(self.layer.add_route(&path));
        if let Some(bbox) = geo::bounds_of(&path) {
            self.fit(&bbox);
        }
        self.view.route = Some(path);
        true
    }

    /// Fitting moves the viewport only; the remembered center stays
    /// where `set_center` put it.
    fn fit(&mut self, bbox: &MapBbox) {
        if geo::is_degenerate(bbox) {
            log::debug!("Skip fitting degenerate bounds");
            return;
        }
        let padded = geo::pad_bbox(bbox, self.padding);
        self.layer.fit_bounds(&padded);
    }

    pub const fn view_state(&self) -> &MapViewState {
        &self.view
    }

    pub const fn layer(&self) -> &L {
        &self.layer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Call {
        View(Coordinate, u8),
        AddMarker(usize),
        RemoveMarker(usize),
        AddRoute(usize),
        RemoveRoute(usize),
        Fit(MapBbox),
    }

    #[derive(Default)]
    struct Recorder {
        next: usize,
        calls: Vec<Call>,
    }

    impl Recorder {
        fn handle(&mut self) -> usize {
            self.next += 1;
            self.next
        }
    }

    impl MapLayer for Recorder {
        type Marker = usize;
        type Route = usize;
        fn set_view(&mut self, center: Coordinate, zoom: u8) {
            self.calls.push(Call::View(center, zoom));
        }
        fn add_marker(&mut self, _: &MapMarker) -> usize {
            let h = self.handle();
            self.calls.push(Call::AddMarker(h));
            h
        }
        fn remove_marker(&mut self, marker: usize) {
            self.calls.push(Call::RemoveMarker(marker));
        }
        fn add_route(&mut self, _: &[Coordinate]) -> usize {
            let h = self.handle();
            self.calls.push(Call::AddRoute(h));
            h
        }
        fn remove_route(&mut self, route: usize) {
            self.calls.push(Call::RemoveRoute(route));
        }
        fn fit_bounds(&mut self, bbox: &MapBbox) {
            self.calls.push(Call::Fit(*bbox));
        }
    }

    fn marker(lat: f64, lng: f64) -> MapMarker {
        MapMarker {
            at: Coordinate::new(lat, lng),
            title: "Place".into(),
            detail: None,
        }
    }

    #[test]
    fn markers_are_replaced_and_fitted() {
        let mut map = MapPresenter::new(Recorder::default(), 0.2);
        map.replace_markers(vec![marker(10.0, 20.0), marker(20.0, 40.0)]);
        map.replace_markers(vec![marker(10.0, 20.0), marker(20.0, 40.0)]);
        let calls = &map.layer().calls;
        assert_eq!(calls[3], Call::RemoveMarker(1));
        assert_eq!(calls[4], Call::RemoveMarker(2));
        assert_eq!(calls[5], Call::AddMarker(3));
        let Call::Fit(bbox) = &calls[7] else {
            panic!("expected fit");
        };
        assert!((bbox.sw.lat - 8.0).abs() < 1e-9);
        assert!((bbox.ne.lng - 44.0).abs() < 1e-9);
        assert_eq!(map.view_state().markers.len(), 2);
    }

    #[test]
    fn single_or_no_marker_keeps_viewport() {
        let mut map = MapPresenter::new(Recorder::default(), 0.2);
        map.set_center(Coordinate::new(1.0, 1.0), 12);
        map.replace_markers(vec![marker(10.0, 20.0)]);
        map.replace_markers(vec![]);
        assert!(!map.layer().calls.iter().any(|c| matches!(c, Call::Fit(_))));
        assert_eq!(map.view_state().center, Some(Coordinate::new(1.0, 1.0)));
        assert!(map.view_state().markers.is_empty());
    }

    #[test]
    fn fitting_keeps_the_center() {
        let mut map = MapPresenter::new(Recorder::default(), 0.2);
        let center = Coordinate::new(48.85, 2.35);
        map.set_center(center, 12);
        map.replace_markers(vec![marker(48.80, 2.30), marker(48.90, 2.40)]);
        let geometry = RouteGeometry {
            kind: None,
            coordinates: vec![vec![2.35, 48.85], vec![2.5, 49.0]],
        };
        assert!(map.draw_route(Some(&geometry)));
        assert_eq!(
            map.layer()
                .calls
                .iter()
                .filter(|c| matches!(c, Call::Fit(_)))
                .count(),
            2
        );
        assert_eq!(map.view_state().center, Some(center));
        assert_eq!(map.view_state().zoom, Some(12));
    }

    #[test]
    fn route_is_drawn_in_map_order() {
        let mut map = MapPresenter::new(Recorder::default(), 0.2);
        let geometry = RouteGeometry {
            kind: Some("LineString".into()),
            coordinates: vec![vec![-74.0, 40.7], vec![-73.9, 40.8]],
        };
        assert!(map.draw_route(Some(&geometry)));
        assert_eq!(
            map.view_state().route,
            Some(vec![Coordinate::new(40.7, -74.0), Coordinate::new(40.8, -73.9)])
        );
        assert!(map.draw_route(Some(&geometry)));
        assert!(map.layer().calls.contains(&Call::RemoveRoute(1)));
    }

    #[test]
    fn malformed_route_keeps_previous() {
        let mut map = MapPresenter::new(Recorder::default(), 0.2);
        let good = RouteGeometry {
            kind: None,
            coordinates: vec![vec![2.0, 48.0], vec![2.1, 48.1]],
        };
        let bad = RouteGeometry {
            kind: None,
            coordinates: vec![vec![2.0]],
        };
        map.draw_route(Some(&good));
        assert!(!map.draw_route(Some(&bad)));
        assert!(!map.draw_route(None));
        assert_eq!(map.view_state().route.as_ref().map(Vec::len), Some(2));
        assert!(!map.layer().calls.iter().any(|c| matches!(c, Call::RemoveRoute(_))));
    }
}
