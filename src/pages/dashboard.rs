//! Dashboard page listing chatbots with create, rename, details, and delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. Bots are fetched on mount and
//! refetched in full after every successful mutation; the backend owns the
//! records and the page holds only transient copies.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::bot_card::BotCard;
use crate::components::layout::DashboardLayout;
use crate::net::http::ApiClient;
use crate::net::types::Chatbot;
use crate::state::notify::Notifier;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let notify = expect_context::<Notifier>();
    let navigate = use_navigate();

    let bots = RwSignal::new(Vec::<Chatbot>::new());
    let loading = RwSignal::new(false);

    // Dialog state.
    let show_create = RwSignal::new(false);
    let new_bot_name = RwSignal::new(String::new());
    let rename_target = RwSignal::new(None::<Chatbot>);
    let delete_target = RwSignal::new(None::<String>);
    let details_target = RwSignal::new(None::<String>);

    // Initial list load.
    fetch_bots(&client, notify, bots, loading);

    let on_open = Callback::new(move |bot_id: String| {
        navigate(
            &format!("/dashboard/{bot_id}/preview"),
            NavigateOptions::default(),
        );
    });

    let on_create = move |_| {
        new_bot_name.set(String::new());
        show_create.set(true);
    };
    let on_create_cancel = Callback::new(move |_: ()| show_create.set(false));

    let create_client = client.clone();
    let on_create_submit = Callback::new(move |name: String| {
        show_create.set(false);
        #[cfg(feature = "hydrate")]
        {
            let client = create_client.clone();
            leptos::task::spawn_local(async move {
                match client.create_chatbot(&name).await {
                    Ok(_) => {
                        notify.success("Bot created successfully");
                        fetch_bots(&client, notify, bots, loading);
                    }
                    Err(_) => notify.error("Failed to create bot"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&create_client, name);
        }
    });

    let on_rename = Callback::new(move |bot_id: String| {
        let bot = bots.get_untracked().iter().find(|b| b.id == bot_id).cloned();
        rename_target.set(bot);
    });
    let on_rename_cancel = Callback::new(move |_: ()| rename_target.set(None));

    let rename_client = client.clone();
    let on_rename_submit = Callback::new(move |(bot_id, name): (String, String)| {
        rename_target.set(None);
        #[cfg(feature = "hydrate")]
        {
            let client = rename_client.clone();
            leptos::task::spawn_local(async move {
                match client.update_chatbot(&bot_id, &name).await {
                    Ok(_) => {
                        notify.success("Bot updated successfully");
                        fetch_bots(&client, notify, bots, loading);
                    }
                    Err(_) => notify.error("Failed to update bot"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&rename_client, bot_id, name);
        }
    });

    let on_delete = Callback::new(move |bot_id: String| delete_target.set(Some(bot_id)));
    let on_delete_cancel = Callback::new(move |_: ()| delete_target.set(None));

    let delete_client = client;
    let on_delete_confirm = Callback::new(move |_: ()| {
        let Some(bot_id) = delete_target.get_untracked() else {
            return;
        };
        delete_target.set(None);
        #[cfg(feature = "hydrate")]
        {
            let client = delete_client.clone();
            leptos::task::spawn_local(async move {
                match client.delete_chatbot(&bot_id).await {
                    Ok(_) => {
                        notify.success("Bot deleted successfully");
                        fetch_bots(&client, notify, bots, loading);
                    }
                    Err(_) => notify.error("Failed to delete bot"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&delete_client, bot_id);
        }
    });

    let on_details = Callback::new(move |bot_id: String| details_target.set(Some(bot_id)));
    let on_details_cancel = Callback::new(move |_: ()| details_target.set(None));

    view! {
        <DashboardLayout>
            <div class="dashboard">
                <div class="dashboard__header">
                    <h2>"Your Bots"</h2>
                    <button class="btn btn--primary" on:click=on_create>
                        "+ New Bot"
                    </button>
                </div>

                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <p class="dashboard__empty">"Loading bots..."</p> }
                >
                    <Show
                        when=move || !bots.get().is_empty()
                        fallback=|| {
                            view! {
                                <p class="dashboard__empty">
                                    "No bots yet. Create one to get started."
                                </p>
                            }
                        }
                    >
                        <div class="dashboard__grid">
                            {move || {
                                bots.get()
                                    .into_iter()
                                    .map(|bot| {
                                        view! {
                                            <BotCard
                                                id=bot.id
                                                name=bot.name
                                                created_at=bot.created_at
                                                on_open=on_open
                                                on_rename=on_rename
                                                on_details=on_details
                                                on_delete=on_delete
                                            />
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </Show>
                </Show>

                <Show when=move || show_create.get()>
                    <CreateBotDialog
                        name=new_bot_name
                        on_cancel=on_create_cancel
                        on_submit=on_create_submit
                    />
                </Show>
                <Show when=move || rename_target.get().is_some()>
                    <RenameBotDialog
                        target=rename_target
                        on_cancel=on_rename_cancel
                        on_submit=on_rename_submit
                    />
                </Show>
                <Show when=move || delete_target.get().is_some()>
                    <div class="dialog-backdrop" on:click=move |_| on_delete_cancel.run(())>
                        <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                            <h2>"Delete Bot"</h2>
                            <p class="dialog__danger">
                                "This will permanently delete this bot and its training sources."
                            </p>
                            <div class="dialog__actions">
                                <button class="btn" on:click=move |_| on_delete_cancel.run(())>
                                    "Cancel"
                                </button>
                                <button
                                    class="btn btn--danger"
                                    on:click=move |_| on_delete_confirm.run(())
                                >
                                    "Delete"
                                </button>
                            </div>
                        </div>
                    </div>
                </Show>
                <Show when=move || details_target.get().is_some()>
                    <BotDetailsDialog target=details_target on_cancel=on_details_cancel />
                </Show>
            </div>
        </DashboardLayout>
    }
}

/// Modal dialog for naming a new bot.
#[component]
fn CreateBotDialog(
    name: RwSignal<String>,
    on_cancel: Callback<()>,
    on_submit: Callback<String>,
) -> impl IntoView {
    let submit = Callback::new(move |_: ()| {
        let value = name.get_untracked().trim().to_owned();
        if value.is_empty() {
            return;
        }
        on_submit.run(value);
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Create Bot"</h2>
                <label class="dialog__label">
                    "Bot Name"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="Ex: Support Bot"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Create"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Modal dialog for renaming an existing bot.
#[component]
fn RenameBotDialog(
    target: RwSignal<Option<Chatbot>>,
    on_cancel: Callback<()>,
    on_submit: Callback<(String, String)>,
) -> impl IntoView {
    let name = RwSignal::new(
        target
            .get_untracked()
            .map(|bot| bot.name)
            .unwrap_or_default(),
    );

    let submit = Callback::new(move |_: ()| {
        let Some(bot) = target.get_untracked() else {
            return;
        };
        let value = name.get_untracked().trim().to_owned();
        if value.is_empty() {
            return;
        }
        on_submit.run((bot.id, value));
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Rename Bot"</h2>
                <label class="dialog__label">
                    "Bot Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Save"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Modal showing a bot's server-side record, fetched by id when opened.
#[component]
fn BotDetailsDialog(target: RwSignal<Option<String>>, on_cancel: Callback<()>) -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let notify = expect_context::<Notifier>();
    let details = RwSignal::new(None::<Chatbot>);

    #[cfg(feature = "hydrate")]
    {
        if let Some(bot_id) = target.get_untracked() {
            let client = client.clone();
            leptos::task::spawn_local(async move {
                match client.get_chatbot(&bot_id).await {
                    Ok(envelope) => details.set(envelope.data),
                    Err(_) => notify.error("Failed to fetch bot details"),
                }
            });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (&client, &notify);
    }

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Bot Details"</h2>
                <Show
                    when=move || details.get().is_some()
                    fallback=|| view! { <p>"Loading details..."</p> }
                >
                    {move || {
                        details
                            .get()
                            .map(|bot| {
                                view! {
                                    <dl class="dialog__details">
                                        <dt>"Name"</dt>
                                        <dd>{bot.name}</dd>
                                        <dt>"Identifier"</dt>
                                        <dd>{bot.id}</dd>
                                        <dt>"Created"</dt>
                                        <dd>{bot.created_at.unwrap_or_else(|| "—".to_owned())}</dd>
                                    </dl>
                                }
                            })
                    }}
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Kick off a full bot-list refetch.
#[cfg(feature = "hydrate")]
fn fetch_bots(
    client: &ApiClient,
    notify: Notifier,
    bots: RwSignal<Vec<Chatbot>>,
    loading: RwSignal<bool>,
) {
    loading.set(true);
    let client = client.clone();
    leptos::task::spawn_local(async move {
        match client.list_chatbots().await {
            Ok(envelope) => bots.set(envelope.data.unwrap_or_default()),
            Err(_) => notify.error("Failed to fetch bots"),
        }
        loading.set(false);
    });
}

#[cfg(not(feature = "hydrate"))]
fn fetch_bots(
    _client: &ApiClient,
    _notify: Notifier,
    _bots: RwSignal<Vec<Chatbot>>,
    _loading: RwSignal<bool>,
) {
}
