use leptos::*;

use tripboard_core::render::{BookmarkRow, PanelContent};

use crate::{controller::use_controller, use_signals};

#[component]
pub fn Bookmarks() -> impl IntoView {
    let controller = use_controller();
    let signals = use_signals();

    let on_refresh = move |_| controller.spawn(|c| async move { c.load_bookmarks().await });

    view! {
      <div class="card">
        <div class="card-body">
          <div class="d-flex justify-content-between align-items-center mb-2">
            <h2 class="h5 mb-0">"Bookmarks"</h2>
            <button type="button" class="btn btn-sm btn-outline-secondary" on:click=on_refresh>
              "Refresh"
            </button>
          </div>
          { move || match signals.bookmarks.get() {
              None | Some(PanelContent::Loading) => view! {
                <div class="text-muted small">"Loading bookmarks..."</div>
              }.into_view(),
              Some(PanelContent::Failed(msg)) => view! {
                <div class="text-danger small">{ msg }</div>
              }.into_view(),
              Some(PanelContent::Ready(list)) => match list.placeholder() {
                  Some(text) => view! { <div class="text-muted small">{ text }</div> }.into_view(),
                  None => view! {
                    <ul class="list-group">
                      { list.rows.into_iter().map(|row| view! { <BookmarkItem row /> }).collect_view() }
                    </ul>
                  }.into_view(),
              },
          }}
        </div>
      </div>
    }
}

#[component]
fn BookmarkItem(row: BookmarkRow) -> impl IntoView {
    let controller = use_controller();
    let id = row.id;

    let on_select = {
        let row = row.clone();
        move |_| controller.with(|c| c.recenter_bookmark(&row))
    };
    let on_delete = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        controller.spawn(move |c| async move { c.delete_bookmark(id).await });
    };

    let BookmarkRow { name, subtitle, .. } = row;

    view! {
      <li
        class="list-group-item list-group-item-action d-flex justify-content-between align-items-center"
        style="cursor: pointer"
        on:click=on_select
      >
        <div>
          <div>{ name }</div>
          { subtitle.map(|s| view! { <small class="text-muted">{ s }</small> }) }
        </div>
        <button type="button" class="btn btn-sm btn-outline-danger" on:click=on_delete>
          "Delete"
        </button>
      </li>
    }
}
