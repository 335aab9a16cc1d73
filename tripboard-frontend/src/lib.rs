use std::rc::Rc;

use leptos::*;
use leptos_router::*;

use tripboard_core::{Config, ViewController};
use tripboard_frontend_api::PublicApi;

mod chart;
mod components;
mod controller;
mod geolocation;
mod view;

use self::{
    chart::ChartJs,
    components::*,
    controller::ControllerHandle,
    view::SignalView,
};

#[component]
#[must_use]
pub fn App() -> impl IntoView {
    view! {
      <Router>
        <main class="container py-3">
          <Routes>
            <Route path="/" view=Dashboard />
          </Routes>
        </main>
      </Router>
    }
}

#[component]
fn Dashboard() -> impl IntoView {
    let config = Config::default();
    let signals = SignalView::new();
    let handle = ControllerHandle::new();
    provide_context(handle);
    provide_context(signals);

    let query = use_query_map();
    let initial_query = query.with_untracked(|q| q.get("q").cloned());
    let default_category = config.places.default_category.clone();
    let default_source = config.places.default_source;
    let default_mode = config.travel.default_mode.clone();

    // -- init controller -- //

    let map_ref = NodeRef::<html::Div>::new();
    map_ref.on_load(move |element| {
        request_animation_frame(move || {
            log::debug!("Initialize map");
            let layer = LeafletLayer::new(&element, &config.map);
            let api = PublicApi::new(config.api.base_url.clone());
            let controller = Rc::new(ViewController::new(
                config,
                api,
                signals,
                layer,
                ChartJs,
            ));
            handle.set(Rc::clone(&controller));
            spawn_local(async move {
                controller.init(initial_query.as_deref()).await;
            });
        });
    });

    view! {
      <h1 class="h3 mb-3">"Tripboard"</h1>
      <SearchForm default_category default_source />
      <div class="row g-3">
        <div class="col-lg-8">
          <Map node_ref=map_ref />
          <Places />
        </div>
        <div class="col-lg-4">
          <Weather />
          <Travel default_mode />
          <Bookmarks />
        </div>
      </div>
    }
}

pub(crate) fn use_signals() -> SignalView {
    expect_context::<SignalView>()
}
