//! Website source panel: register page URLs for crawling and manage them.

use leptos::prelude::*;

use crate::components::sources::{SourceItemRow, fetch_documents};
use crate::net::http::ApiClient;
use crate::net::types::SourceKind;
use crate::state::notify::Notifier;
use crate::state::sources::SourceList;
use crate::util::validate::is_valid_url;

#[component]
pub fn WebsiteSourcePanel(bot_id: String) -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let notify = expect_context::<Notifier>();

    let list = RwSignal::new(SourceList::default());
    let title = RwSignal::new(String::new());
    let url = RwSignal::new(String::new());
    let saving = RwSignal::new(false);

    // Initial list load.
    fetch_documents(&client, notify, list, &bot_id, SourceKind::Website);

    let on_add = {
        let client = client.clone();
        let bot_id = bot_id.clone();
        move |_| {
            if saving.get_untracked() {
                return;
            }
            let title_value = title.get_untracked().trim().to_owned();
            let url_value = url.get_untracked().trim().to_owned();
            if title_value.is_empty() {
                notify.error("Please enter a title");
                return;
            }
            if url_value.is_empty() {
                notify.error("Please enter a website URL");
                return;
            }
            if !is_valid_url(&url_value) {
                notify.error("Please enter a valid URL");
                return;
            }
            saving.set(true);

            #[cfg(feature = "hydrate")]
            {
                let client = client.clone();
                let bot_id = bot_id.clone();
                leptos::task::spawn_local(async move {
                    match client.upload_website(&bot_id, &url_value).await {
                        Ok(_) => {
                            notify.success("Website added successfully");
                            title.set(String::new());
                            url.set(String::new());
                            fetch_documents(&client, notify, list, &bot_id, SourceKind::Website);
                        }
                        Err(_) => notify.error("Failed to add website"),
                    }
                    saving.set(false);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&client, &bot_id, title_value, url_value);
            }
        }
    };

    let on_delete = {
        let client = client;
        let bot_id = bot_id;
        Callback::new(move |id: String| {
            let Some(armed) = list.try_update(|l| l.begin_delete(&id)) else {
                return;
            };
            if !armed {
                return;
            }

            #[cfg(feature = "hydrate")]
            {
                let client = client.clone();
                let bot_id = bot_id.clone();
                leptos::task::spawn_local(async move {
                    match client.remove_document_by_id(&bot_id, &id).await {
                        Ok(_) => {
                            notify.success("Website deleted successfully");
                            fetch_documents(&client, notify, list, &bot_id, SourceKind::Website);
                        }
                        Err(_) => notify.error("Failed to delete website"),
                    }
                    list.update(|l| l.finish_delete(&id));
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&client, &bot_id, id);
            }
        })
    };

    view! {
        <div class="source-panel">
            <div class="source-panel__header">
                <h2>"Website"</h2>
                <p class="source-panel__hint">
                    "Crawl web pages to train your AI agent with live site content."
                </p>
            </div>

            <label class="source-panel__label">
                "Title"
                <input
                    class="source-panel__input"
                    type="text"
                    placeholder="Ex: Pricing page"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
            </label>

            <label class="source-panel__label">
                "Website URL"
                <input
                    class="source-panel__input"
                    type="url"
                    placeholder="https://example.com/docs"
                    prop:value=move || url.get()
                    on:input=move |ev| url.set(event_target_value(&ev))
                />
            </label>

            <div class="source-panel__actions">
                <button class="btn btn--primary" disabled=move || saving.get() on:click=on_add>
                    {move || if saving.get() { "Adding..." } else { "Add website" }}
                </button>
            </div>

            <div class="source-panel__list">
                <h3 class="source-panel__list-title">"Added Websites"</h3>
                <Show
                    when=move || !list.get().loading
                    fallback=|| {
                        view! { <p class="source-panel__empty">"Loading websites..."</p> }
                    }
                >
                    <Show
                        when=move || !list.get().items.is_empty()
                        fallback=|| {
                            view! { <p class="source-panel__empty">"No websites added yet"</p> }
                        }
                    >
                        {move || {
                            list.get()
                                .items
                                .into_iter()
                                .map(|doc| {
                                    let row_id = doc.id.clone();
                                    let deleting =
                                        Signal::derive(move || list.get().is_deleting(&row_id));
                                    let display_name = if doc.filename.is_empty() {
                                        doc.url.clone().unwrap_or_default()
                                    } else {
                                        doc.filename.clone()
                                    };
                                    view! {
                                        <SourceItemRow
                                            id=doc.id
                                            filename=display_name
                                            created_at=doc.created_at
                                            deleting=deleting
                                            on_delete=on_delete
                                        />
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </Show>
                </Show>
            </div>
        </div>
    }
}
