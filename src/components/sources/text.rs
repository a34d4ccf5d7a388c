//! Text source panel: add plain-text snippets and manage the existing ones.

use leptos::prelude::*;

use crate::components::sources::{SourceItemRow, fetch_documents};
use crate::net::http::ApiClient;
use crate::net::types::SourceKind;
use crate::state::notify::Notifier;
use crate::state::sources::SourceList;

#[component]
pub fn TextSourcePanel(bot_id: String) -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let notify = expect_context::<Notifier>();

    let list = RwSignal::new(SourceList::default());
    let title = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let saving = RwSignal::new(false);

    // Initial list load.
    fetch_documents(&client, notify, list, &bot_id, SourceKind::Text);

    let on_add = {
        let client = client.clone();
        let bot_id = bot_id.clone();
        move |_| {
            if saving.get_untracked() {
                return;
            }
            let title_value = title.get_untracked().trim().to_owned();
            let content_value = content.get_untracked().trim().to_owned();
            if title_value.is_empty() {
                notify.error("Please enter a title");
                return;
            }
            if content_value.is_empty() {
                notify.error("Please enter some content");
                return;
            }
            saving.set(true);

            #[cfg(feature = "hydrate")]
            {
                let client = client.clone();
                let bot_id = bot_id.clone();
                leptos::task::spawn_local(async move {
                    match client.upload_text(&bot_id, &title_value, &content_value).await {
                        Ok(_) => {
                            notify.success("Text snippet added successfully");
                            title.set(String::new());
                            content.set(String::new());
                            fetch_documents(&client, notify, list, &bot_id, SourceKind::Text);
                        }
                        Err(_) => notify.error("Failed to add text snippet"),
                    }
                    saving.set(false);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&client, &bot_id, title_value, content_value);
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
                            notify.success("Text snippet deleted successfully");
                            fetch_documents(&client, notify, list, &bot_id, SourceKind::Text);
                        }
                        Err(_) => notify.error("Failed to delete text snippet"),
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
                <h2>"Text"</h2>
                <p class="source-panel__hint">
                    "Add and process plain text-based sources to train your AI agent with precise information."
                </p>
            </div>

            <label class="source-panel__label">
                "Title"
                <input
                    class="source-panel__input"
                    type="text"
                    placeholder="Ex: Refund requests"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
            </label>

            <label class="source-panel__label">
                "Text"
                <textarea
                    class="source-panel__editor"
                    placeholder="Paste or write the snippet content..."
                    prop:value=move || content.get()
                    on:input=move |ev| content.set(event_target_value(&ev))
                ></textarea>
            </label>

            <div class="source-panel__actions">
                <button class="btn btn--primary" disabled=move || saving.get() on:click=on_add>
                    {move || if saving.get() { "Adding..." } else { "Add text snippet" }}
                </button>
            </div>

            <div class="source-panel__list">
                <h3 class="source-panel__list-title">"Added Text Sources"</h3>
                <Show
                    when=move || !list.get().loading
                    fallback=|| {
                        view! { <p class="source-panel__empty">"Loading text sources..."</p> }
                    }
                >
                    <Show
                        when=move || !list.get().items.is_empty()
                        fallback=|| {
                            view! { <p class="source-panel__empty">"No text sources added yet"</p> }
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
                                    view! {
                                        <SourceItemRow
                                            id=doc.id
                                            filename=doc.filename
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
