use leptos::*;

use tripboard_boundary::PlaceSource;

use crate::{controller::use_controller, geolocation, use_signals};

const CATEGORIES: &[(&str, &str)] = &[
    ("", "All categories"),
    ("attraction", "Attractions"),
    ("restaurant", "Restaurants"),
    ("cafe", "Cafés"),
    ("museum", "Museums"),
    ("park", "Parks"),
    ("hotel", "Hotels"),
];

#[component]
pub fn SearchForm(default_category: Option<String>, default_source: PlaceSource) -> impl IntoView {
    let controller = use_controller();
    let signals = use_signals();

    // -- signals -- //

    let query = create_rw_signal(String::new());
    let category = create_rw_signal(default_category.unwrap_or_default());
    let prefer_foursquare = create_rw_signal(default_source == PlaceSource::Auto);

    // -- callbacks -- //

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let text = query.get_untracked();
        controller.spawn(move |c| async move { c.search(&text).await });
    };

    let on_locate = move |_| {
        controller.spawn(|c| async move {
            let position = geolocation::current_position().await;
            c.use_device_position(position).await;
        });
    };

    let on_category = move |ev: ev::Event| {
        let value = event_target_value(&ev);
        category.set(value.clone());
        controller.spawn(move |c| async move { c.filter_places(Some(value)).await });
    };

    let on_source = move |ev: ev::Event| {
        let checked = event_target_checked(&ev);
        prefer_foursquare.set(checked);
        let source = if checked {
            PlaceSource::Auto
        } else {
            PlaceSource::Osm
        };
        controller.with(|c| c.set_place_source(source));
    };

    view! {
      <form class="row g-2 align-items-center mb-3" on:submit=on_submit>
        <div class="col-md-5">
          <input
            type="text"
            class="form-control"
            placeholder="Search a city or address"
            prop:value=move || query.get()
            on:input=move |ev| query.set(event_target_value(&ev))
          />
        </div>
        <div class="col-auto">
          <button type="submit" class="btn btn-primary" disabled=move || signals.busy.get()>
            { move || if signals.busy.get() { "Searching..." } else { "Search" } }
          </button>
        </div>
        <div class="col-auto">
          <button type="button" class="btn btn-outline-secondary" on:click=on_locate>
            "Use my location"
          </button>
        </div>
        <div class="col-md-2">
          <select class="form-select" on:change=on_category>
            { CATEGORIES
                .iter()
                .map(|(value, label)| {
                    let selected = category.get_untracked() == *value;
                    view! { <option value=*value selected=selected>{ *label }</option> }
                })
                .collect_view()
            }
          </select>
        </div>
        <div class="col-auto form-check form-switch">
          <input
            id="prefer-foursquare"
            type="checkbox"
            class="form-check-input"
            prop:checked=move || prefer_foursquare.get()
            on:change=on_source
          />
          <label class="form-check-label" for="prefer-foursquare">"Prefer Foursquare"</label>
        </div>
      </form>
    }
}
