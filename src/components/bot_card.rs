//! Card for one chatbot on the dashboard grid.

use leptos::prelude::*;

use crate::util::clock::display_date;

/// Chatbot card with open, rename, details, and delete actions. All actions
/// bubble up through callbacks carrying the bot id; the page owns the
/// dialogs and network calls.
#[component]
pub fn BotCard(
    id: String,
    name: String,
    created_at: Option<String>,
    on_open: Callback<String>,
    on_rename: Callback<String>,
    on_details: Callback<String>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let open_id = id.clone();
    let rename_id = id.clone();
    let details_id = id.clone();
    let delete_id = id;

    let created = created_at.map(|ts| display_date(&ts).to_owned());

    view! {
        <div class="bot-card">
            <button class="bot-card__body" on:click=move |_| on_open.run(open_id.clone())>
                <h3 class="bot-card__name">{name}</h3>
                {created.map(|date| view! { <span class="bot-card__date">{date}</span> })}
            </button>
            <div class="bot-card__actions">
                <button class="btn" on:click=move |_| on_details.run(details_id.clone())>
                    "Details"
                </button>
                <button class="btn" on:click=move |_| on_rename.run(rename_id.clone())>
                    "Rename"
                </button>
                <button class="btn btn--danger" on:click=move |_| on_delete.run(delete_id.clone())>
                    "Delete"
                </button>
            </div>
        </div>
    }
}
