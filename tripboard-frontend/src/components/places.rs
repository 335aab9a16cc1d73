use leptos::*;

use tripboard_core::render::{PanelContent, Place};

use crate::{controller::use_controller, use_signals};

#[component]
pub fn Places() -> impl IntoView {
    let signals = use_signals();

    let count_label = move || {
        signals.places.with(|content| match content {
            Some(PanelContent::Ready(grid)) => grid.count_label(),
            _ => String::new(),
        })
    };

    view! {
      <div class="d-flex justify-content-between align-items-center mt-3 mb-2">
        <h2 class="h5 mb-0">"Places"</h2>
        <span class="text-muted small">{ count_label }</span>
      </div>
      <div class="row g-2">
        { move || match signals.places.get() {
            None => ().into_view(),
            Some(PanelContent::Loading) => view! {
              <div class="text-muted small">"Loading places..."</div>
            }.into_view(),
            Some(PanelContent::Failed(msg)) => view! {
              <div class="text-danger small">{ msg }</div>
            }.into_view(),
            Some(PanelContent::Ready(grid)) => grid
                .places
                .into_iter()
                .map(|place| view! { <PlaceCard place /> })
                .collect_view(),
        }}
      </div>
    }
}

#[component]
fn PlaceCard(place: Place) -> impl IntoView {
    let controller = use_controller();
    let distance = place.distance_badge();

    let on_center = {
        let place = place.clone();
        move |_| controller.with(|c| c.center_on(&place))
    };
    let on_destination = {
        let place = place.clone();
        move |_| controller.with(|c| c.select_destination(&place))
    };
    let on_bookmark = {
        let place = place.clone();
        move |_| {
            let place = place.clone();
            controller.spawn(move |c| async move { c.bookmark_place(&place).await });
        }
    };

    let Place {
        name,
        address,
        category,
        source,
        ..
    } = place;

    view! {
      <div class="col-md-6">
        <div class="card h-100">
          <div class="card-body">
            <h3 class="h6 card-title">
              { name }
              <span class="badge bg-secondary ms-2 text-uppercase">{ source }</span>
            </h3>
            { address.map(|a| view! { <p class="small mb-1">{ a }</p> }) }
            <div class="small text-muted">
              { category }
              { distance.map(|d| view! { <span class="badge bg-light text-dark ms-2">{ d }</span> }) }
            </div>
          </div>
          <div class="card-footer d-flex gap-2">
            <button type="button" class="btn btn-sm btn-outline-primary" on:click=on_center>
              "Center"
            </button>
            <button type="button" class="btn btn-sm btn-outline-success" on:click=on_destination>
              "Use as Destination"
            </button>
            <button type="button" class="btn btn-sm btn-outline-warning" on:click=on_bookmark>
              "Bookmark"
            </button>
          </div>
        </div>
      </div>
    }
}
