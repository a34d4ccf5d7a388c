//! Source-type panels: three structurally parallel list-add-delete views,
//! one per training-source type, plus the pieces they share.

pub mod files;
pub mod text;
pub mod website;

use leptos::prelude::*;

use crate::net::http::ApiClient;
use crate::net::types::SourceKind;
use crate::state::notify::Notifier;
use crate::state::sources::SourceList;
use crate::util::clock::display_date;

/// One row in a source list: name, creation date, and a delete control that
/// turns into a spinner while that item's deletion is in flight.
#[component]
pub fn SourceItemRow(
    id: String,
    filename: String,
    created_at: Option<String>,
    deleting: Signal<bool>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let delete_id = id;
    let created = created_at.map(|ts| display_date(&ts).to_owned());

    view! {
        <div class="source-row">
            <div class="source-row__info">
                <span class="source-row__name">{filename}</span>
                {created.map(|date| view! { <span class="source-row__date">{date}</span> })}
            </div>
            <Show
                when=move || !deleting.get()
                fallback=|| view! { <span class="source-row__spinner">"…"</span> }
            >
                <button
                    class="btn source-row__delete"
                    title="Delete"
                    on:click={
                        let delete_id = delete_id.clone();
                        move |_| on_delete.run(delete_id.clone())
                    }
                >
                    "✕"
                </button>
            </Show>
        </div>
    }
}

/// Kick off a list refetch for one source type. Fetches are sequence-tagged;
/// stale responses are discarded by `SourceList::apply_fetch`.
#[cfg(feature = "hydrate")]
pub(crate) fn fetch_documents(
    client: &ApiClient,
    notify: Notifier,
    list: RwSignal<SourceList>,
    bot_id: &str,
    kind: SourceKind,
) {
    let Some(seq) = list.try_update(SourceList::begin_fetch) else {
        return;
    };
    let client = client.clone();
    let bot_id = bot_id.to_owned();
    leptos::task::spawn_local(async move {
        match client.list_documents(&bot_id, kind).await {
            Ok(envelope) => {
                let items = envelope.data.unwrap_or_default();
                list.update(|l| {
                    l.apply_fetch(seq, items);
                });
            }
            Err(_) => {
                notify.error(format!("Failed to fetch {}s", kind.label()));
                list.update(|l| l.fetch_failed(seq));
            }
        }
    });
}

#[cfg(not(feature = "hydrate"))]
pub(crate) fn fetch_documents(
    _client: &ApiClient,
    _notify: Notifier,
    _list: RwSignal<SourceList>,
    _bot_id: &str,
    _kind: SourceKind,
) {
}
