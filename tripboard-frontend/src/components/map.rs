use js_sys::Array;
use leaflet::{
    LatLng, LatLngBounds, MapOptions, Marker, Polyline, Popup, PopupOptions, TileLayer,
    TileLayerOptions,
};
use leptos::*;
use wasm_bindgen::JsValue;

use tripboard_boundary::{Coordinate, MapBbox};
use tripboard_core::{
    config,
    map::{MapLayer, MapMarker},
};

/// Map section of the page, handed to Leaflet once mounted.
#[component]
pub fn Map(node_ref: NodeRef<html::Div>) -> impl IntoView {
    view! {
      <div id="map" class="rounded border" style="height: 420px" node_ref=node_ref></div>
    }
}

pub struct LeafletLayer {
    map: leaflet::Map,
}

impl LeafletLayer {
    pub fn new(element: &web_sys::HtmlElement, cfg: &config::Map) -> Self {
        let map = leaflet::Map::new_with_element(element, &MapOptions::default());
        let options = TileLayerOptions::default();
        options.set_attribution(cfg.attribution.clone());
        TileLayer::new_options(&cfg.tile_url, &options).add_to(&map);
        Self { map }
    }
}

fn lat_lng(pos: Coordinate) -> LatLng {
    let Coordinate { lat, lng } = pos;
    LatLng::new(lat, lng)
}

/// Popup body; marker texts end up as text nodes.
fn popup_content(marker: &MapMarker) -> HtmlElement<html::Div> {
    let MapMarker { title, detail, .. } = marker.clone();
    view! {
      <div>
        <strong>{ title }</strong>
        { detail.map(|d| view! { <br />{ d } }) }
      </div>
    }
}

impl MapLayer for LeafletLayer {
    type Marker = Marker;
    type Route = Polyline;

    fn set_view(&mut self, center: Coordinate, zoom: u8) {
        self.map.set_view(&lat_lng(center), f64::from(zoom));
    }

    fn add_marker(&mut self, marker: &MapMarker) -> Marker {
        let m = Marker::new(&lat_lng(marker.at));
        let popup = Popup::new(&PopupOptions::default(), None);
        let content = popup_content(marker);
        let element: &web_sys::HtmlDivElement = &content;
        popup.set_content(element.as_ref());
        m.bind_popup(&popup);
        m.add_to(&self.map);
        m
    }

    fn remove_marker(&mut self, marker: Marker) {
        self.map.remove_layer(&marker);
    }

    fn add_route(&mut self, path: &[Coordinate]) -> Polyline {
        let positions = path
            .iter()
            .map(|pos| JsValue::from(lat_lng(*pos)))
            .collect::<Array>();
        let line = Polyline::new(&positions);
        line.add_to(&self.map);
        line
    }

    fn remove_route(&mut self, route: Polyline) {
        self.map.remove_layer(&route);
    }

    fn fit_bounds(&mut self, bbox: &MapBbox) {
        let bounds = LatLngBounds::new(&lat_lng(bbox.sw), &lat_lng(bbox.ne));
        self.map.fit_bounds(&bounds);
    }
}
