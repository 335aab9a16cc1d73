use leptos::*;

use tripboard_core::{
    chart::Canvas,
    render::{PanelContent, WeatherCard},
};

use crate::use_signals;

#[component]
pub fn Weather() -> impl IntoView {
    let signals = use_signals();

    view! {
      <div class="card mb-3">
        <div class="card-body">
          <h2 class="h5">
            "Weather "
            <small class="text-muted">{ move || signals.weather_location.get() }</small>
          </h2>
          { move || match signals.weather.get() {
              None => view! {
                <p class="text-muted small">"Search a place to see its weather."</p>
              }.into_view(),
              Some(PanelContent::Loading) => view! {
                <p class="text-muted small">"Loading weather..."</p>
              }.into_view(),
              Some(PanelContent::Failed(msg)) => view! {
                <div class="text-danger small">{ msg }</div>
              }.into_view(),
              Some(PanelContent::Ready(card)) => view! { <CurrentWeather card /> }.into_view(),
          }}
          <canvas id={ Canvas::Weather.element_id() } height="160"></canvas>
        </div>
      </div>
    }
}

#[component]
fn CurrentWeather(card: WeatherCard) -> impl IntoView {
    let headline = card.headline();
    let details = card.details();
    let WeatherCard {
        description,
        icon_url,
        condition,
        ..
    } = card;

    view! {
      <div class="d-flex align-items-center mb-2">
        <img src=icon_url alt=condition width="64" height="64" />
        <div class="ms-2">
          <div class="fs-4">{ headline }</div>
          { description.map(|d| view! { <div class="text-capitalize">{ d }</div> }) }
          <div class="text-muted small">{ details }</div>
        </div>
      </div>
    }
}
