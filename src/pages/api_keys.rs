//! API key management: list, generate, copy, and delete account keys.
//!
//! A key's secret is visible in full exactly once, in the banner shown right
//! after generation; the list always renders the masked form.

#[cfg(test)]
#[path = "api_keys_test.rs"]
mod api_keys_test;

use leptos::prelude::*;

use crate::components::layout::DashboardLayout;
use crate::net::http::ApiClient;
use crate::net::types::ApiKey;
use crate::state::notify::Notifier;
use crate::util::clock::display_date;

/// Mask a key for display: the first half stays visible, the rest becomes
/// asterisks.
pub fn mask_api_key(key: &str) -> String {
    let total = key.chars().count();
    let visible = total.div_ceil(2);
    let mut masked: String = key.chars().take(visible).collect();
    masked.extend(std::iter::repeat_n('*', total - visible));
    masked
}

#[component]
pub fn ApiKeysPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let notify = expect_context::<Notifier>();

    let keys = RwSignal::new(Vec::<ApiKey>::new());
    let loading = RwSignal::new(false);
    let show_create = RwSignal::new(false);
    let new_key_name = RwSignal::new(String::new());
    let generated = RwSignal::new(None::<String>);

    // Initial list load.
    fetch_api_keys(&client, notify, keys, loading);

    let on_create = move |_| {
        new_key_name.set(String::new());
        show_create.set(true);
    };
    let on_create_cancel = Callback::new(move |_: ()| show_create.set(false));

    let generate_client = client.clone();
    let on_generate = Callback::new(move |_: ()| {
        let name = new_key_name.get_untracked().trim().to_owned();
        if name.is_empty() {
            return;
        }
        show_create.set(false);

        #[cfg(feature = "hydrate")]
        {
            let client = generate_client.clone();
            leptos::task::spawn_local(async move {
                match client.generate_api_key(&name).await {
                    Ok(response) => {
                        generated.set(Some(response.api_key));
                        notify.success("API key generated successfully");
                        fetch_api_keys(&client, notify, keys, loading);
                    }
                    Err(_) => notify.error("Failed to generate API key"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&generate_client, name);
        }
    });

    let delete_client = client;
    let on_delete = Callback::new(move |key_id: String| {
        #[cfg(feature = "hydrate")]
        {
            let client = delete_client.clone();
            leptos::task::spawn_local(async move {
                match client.delete_api_key(&key_id).await {
                    Ok(_) => {
                        notify.success("API key deleted successfully");
                        fetch_api_keys(&client, notify, keys, loading);
                    }
                    Err(_) => notify.error("Failed to delete API key"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&delete_client, key_id);
        }
    });

    let on_copy = Callback::new(move |key: String| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let clipboard = window.navigator().clipboard();
                let promise = clipboard.write_text(&key);
                leptos::task::spawn_local(async move {
                    if wasm_bindgen_futures::JsFuture::from(promise).await.is_ok() {
                        notify.success("API key copied to clipboard");
                    }
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    });

    view! {
        <DashboardLayout>
            <div class="panel">
                <div class="panel__header">
                    <h2>"API Keys Management"</h2>
                    <button class="btn btn--primary" on:click=on_create>
                        "Generate New Key"
                    </button>
                </div>

                <Show when=move || generated.get().is_some()>
                    <div class="keys-banner">
                        <p class="keys-banner__note">
                            "Copy this key now — it will not be shown in full again."
                        </p>
                        <code class="keys-banner__value">
                            {move || generated.get().unwrap_or_default()}
                        </code>
                        <button
                            class="btn"
                            on:click=move |_| {
                                if let Some(key) = generated.get_untracked() {
                                    on_copy.run(key);
                                }
                            }
                        >
                            "Copy"
                        </button>
                        <button class="btn" on:click=move |_| generated.set(None)>
                            "Dismiss"
                        </button>
                    </div>
                </Show>

                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <p class="panel__empty">"Loading API keys..."</p> }
                >
                    <Show
                        when=move || !keys.get().is_empty()
                        fallback=|| {
                            view! { <p class="panel__empty">"No API keys generated yet"</p> }
                        }
                    >
                        <div class="keys-list">
                            {move || {
                                keys.get()
                                    .into_iter()
                                    .map(|key| {
                                        let delete_id = key.id.clone();
                                        let created = key
                                            .created_at
                                            .map(|ts| display_date(&ts).to_owned());
                                        view! {
                                            <div class="keys-list__row">
                                                <span class="keys-list__name">{key.name}</span>
                                                <code class="keys-list__value">
                                                    {mask_api_key(&key.api_key)}
                                                </code>
                                                {created
                                                    .map(|date| {
                                                        view! {
                                                            <span class="keys-list__date">{date}</span>
                                                        }
                                                    })}
                                                <button
                                                    class="btn btn--danger"
                                                    on:click=move |_| on_delete.run(delete_id.clone())
                                                >
                                                    "Delete"
                                                </button>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </Show>
                </Show>

                <Show when=move || show_create.get()>
                    <div class="dialog-backdrop" on:click=move |_| on_create_cancel.run(())>
                        <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                            <h2>"Generate API Key"</h2>
                            <label class="dialog__label">
                                "Key Name"
                                <input
                                    class="dialog__input"
                                    type="text"
                                    placeholder="Ex: production"
                                    prop:value=move || new_key_name.get()
                                    on:input=move |ev| new_key_name.set(event_target_value(&ev))
                                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                        if ev.key() == "Enter" {
                                            ev.prevent_default();
                                            on_generate.run(());
                                        }
                                    }
                                />
                            </label>
                            <div class="dialog__actions">
                                <button class="btn" on:click=move |_| on_create_cancel.run(())>
                                    "Cancel"
                                </button>
                                <button
                                    class="btn btn--primary"
                                    on:click=move |_| on_generate.run(())
                                >
                                    "Generate"
                                </button>
                            </div>
                        </div>
                    </div>
                </Show>
            </div>
        </DashboardLayout>
    }
}

/// Kick off a full key-list refetch.
#[cfg(feature = "hydrate")]
fn fetch_api_keys(
    client: &ApiClient,
    notify: Notifier,
    keys: RwSignal<Vec<ApiKey>>,
    loading: RwSignal<bool>,
) {
    loading.set(true);
    let client = client.clone();
    leptos::task::spawn_local(async move {
        match client.list_api_keys().await {
            Ok(envelope) => keys.set(envelope.data.unwrap_or_default().apikeys),
            Err(_) => notify.error("Failed to fetch API keys"),
        }
        loading.set(false);
    });
}

#[cfg(not(feature = "hydrate"))]
fn fetch_api_keys(
    _client: &ApiClient,
    _notify: Notifier,
    _keys: RwSignal<Vec<ApiKey>>,
    _loading: RwSignal<bool>,
) {
}
