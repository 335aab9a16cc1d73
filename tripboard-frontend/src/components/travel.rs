use leptos::*;

use tripboard_core::chart::Canvas;

use crate::{controller::use_controller, use_signals};

const MODES: &[(&str, &str)] = &[
    ("driving", "Driving"),
    ("taxi", "Taxi"),
    ("cycling", "Cycling"),
    ("walking", "Walking"),
];

#[component]
pub fn Travel(default_mode: String) -> impl IntoView {
    let controller = use_controller();
    let signals = use_signals();

    // -- signals -- //

    let mode = create_rw_signal(default_mode);
    let destination_name = create_rw_signal(String::new());

    // -- effects -- //

    create_effect(move |_| {
        if let Some(destination) = signals.destination.get() {
            destination_name.set(destination.name);
        }
    });

    // -- callbacks -- //

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let mode = mode.get_untracked();
        let text = destination_name.get_untracked();
        let selected = signals
            .destination
            .with_untracked(|d| d.as_ref().map(|d| d.name.clone()));
        controller.spawn(move |c| async move {
            // A typed name that differs from the picked place is geocoded first
            if text.trim().is_empty() || selected.as_deref() == Some(text.as_str()) {
                c.estimate_travel(&mode).await;
            } else {
                c.estimate_travel_to(&text, &mode).await;
            }
        });
    };

    view! {
      <div class="card mb-3">
        <div class="card-body">
          <h2 class="h5">"Travel"</h2>
          <form class="row g-2 mb-2" on:submit=on_submit>
            <div class="col-12">
              <input
                type="text"
                class="form-control"
                placeholder="Destination"
                prop:value=move || destination_name.get()
                on:input=move |ev| destination_name.set(event_target_value(&ev))
              />
            </div>
            <div class="col">
              <select class="form-select" on:change=move |ev| mode.set(event_target_value(&ev))>
                { MODES
                    .iter()
                    .map(|(value, label)| {
                        let selected = mode.get_untracked() == *value;
                        view! { <option value=*value selected=selected>{ *label }</option> }
                    })
                    .collect_view()
                }
              </select>
            </div>
            <div class="col-auto">
              <button type="submit" class="btn btn-success" disabled=move || signals.busy.get()>
                "Estimate"
              </button>
            </div>
          </form>
          <div class="small mb-2">
            { move || signals.travel.with(|t| t.as_ref().map(|summary| summary.text())) }
          </div>
          <canvas id={ Canvas::Cost.element_id() } height="160"></canvas>
        </div>
      </div>
    }
}
