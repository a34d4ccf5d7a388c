//! Bot workspace page: training sources, chat preview, and integration guide
//! for one bot, selected by route parameter.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::chat_preview::ChatPreview;
use crate::components::layout::DashboardLayout;
use crate::components::sources::files::FilesSourcePanel;
use crate::components::sources::text::TextSourcePanel;
use crate::components::sources::website::WebsiteSourcePanel;
use crate::net::api::QA_ASK_QUESTION;
use crate::net::http::ApiClient;
use crate::net::types::SourceKind;
use crate::state::notify::Notifier;

/// Top-level workspace tab.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum WorkspaceTab {
    Sources,
    Preview,
    Integration,
}

#[component]
pub fn BotWorkspacePage() -> impl IntoView {
    let params = use_params_map();
    let bot_id = move || params.read().get("id");

    let active_tab = RwSignal::new(WorkspaceTab::Sources);
    let active_source = RwSignal::new(SourceKind::File);

    let tab_button = move |tab: WorkspaceTab, label: &'static str| {
        view! {
            <button
                class=move || {
                    if active_tab.get() == tab {
                        "workspace__tab workspace__tab--active"
                    } else {
                        "workspace__tab"
                    }
                }
                on:click=move |_| active_tab.set(tab)
            >
                {label}
            </button>
        }
    };

    let source_button = move |kind: SourceKind, label: &'static str| {
        view! {
            <button
                class=move || {
                    if active_source.get() == kind {
                        "workspace__source workspace__source--active"
                    } else {
                        "workspace__source"
                    }
                }
                on:click=move |_| active_source.set(kind)
            >
                {label}
            </button>
        }
    };

    view! {
        <DashboardLayout>
            <div class="workspace">
                <nav class="workspace__tabs">
                    {tab_button(WorkspaceTab::Sources, "Sources")}
                    {tab_button(WorkspaceTab::Preview, "Preview")}
                    {tab_button(WorkspaceTab::Integration, "Integration")}
                </nav>

                {move || {
                    let Some(id) = bot_id() else {
                        return view! { <p class="workspace__empty">"No bot selected."</p> }
                            .into_any();
                    };
                    match active_tab.get() {
                        WorkspaceTab::Sources => {
                            view! {
                                <div class="workspace__sources">
                                    <nav class="workspace__source-menu">
                                        {source_button(SourceKind::File, "Files")}
                                        {source_button(SourceKind::Text, "Text")}
                                        {source_button(SourceKind::Website, "Website")}
                                    </nav>
                                    {match active_source.get() {
                                        SourceKind::File => {
                                            view! { <FilesSourcePanel bot_id=id/> }.into_any()
                                        }
                                        SourceKind::Text => {
                                            view! { <TextSourcePanel bot_id=id/> }.into_any()
                                        }
                                        SourceKind::Website => {
                                            view! { <WebsiteSourcePanel bot_id=id/> }.into_any()
                                        }
                                    }}
                                </div>
                            }
                                .into_any()
                        }
                        WorkspaceTab::Preview => view! { <ChatPreview bot_id=id/> }.into_any(),
                        WorkspaceTab::Integration => {
                            view! { <IntegrationGuide bot_id=id/> }.into_any()
                        }
                    }
                }}
            </div>
        </DashboardLayout>
    }
}

/// Integration guide for the external question-answering endpoint, with a
/// live tester that exercises it using a pasted API key.
#[component]
fn IntegrationGuide(bot_id: String) -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let notify = expect_context::<Notifier>();

    let endpoint = format!("{}{QA_ASK_QUESTION}", client.base_url());
    let body_sample = format!(
        "{{\n  \"botId\": \"{bot_id}\",\n  \"chatHistory\": [\n    {{ \"role\": \"human\", \"content\": \"Previous user message\" }},\n    {{ \"role\": \"assistant\", \"content\": \"Previous bot response\" }}\n  ],\n  \"question\": \"User's current question\"\n}}"
    );

    let api_key = RwSignal::new(String::new());
    let question = RwSignal::new(String::new());
    let answer = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_try = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let key_value = api_key.get().trim().to_owned();
        let question_value = question.get().trim().to_owned();
        if key_value.is_empty() {
            notify.error("Paste an API key first");
            return;
        }
        if question_value.is_empty() {
            notify.error("Enter a question to send");
            return;
        }
        busy.set(true);
        answer.set(None);

        #[cfg(feature = "hydrate")]
        {
            let client = client.clone();
            let bot_id = bot_id.clone();
            leptos::task::spawn_local(async move {
                match client
                    .ask_question(&key_value, &bot_id, Vec::new(), &question_value)
                    .await
                {
                    Ok(envelope) => answer.set(envelope.data),
                    Err(_) => notify.error("Request failed. Check the API key and try again."),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&client, &bot_id, key_value, question_value);
        }
    };

    view! {
        <div class="integration">
            <h2>"Integration Guide"</h2>
            <p>
                "Integrate this bot into your website or application through a simple REST endpoint, authenticated with an API key instead of your session."
            </p>

            <h3>"Endpoint"</h3>
            <pre class="code-block">{format!("POST {endpoint}")}</pre>

            <h3>"Headers"</h3>
            <pre class="code-block">"Content-Type: application/json\napiKey: your_api_key_here"</pre>

            <h3>"Request Body"</h3>
            <pre class="code-block">{body_sample}</pre>

            <h3>"Try it"</h3>
            <form class="integration__tester" on:submit=on_try>
                <input
                    class="integration__input"
                    type="text"
                    placeholder="API key"
                    prop:value=move || api_key.get()
                    on:input=move |ev| api_key.set(event_target_value(&ev))
                />
                <input
                    class="integration__input"
                    type="text"
                    placeholder="Ask this bot a question..."
                    prop:value=move || question.get()
                    on:input=move |ev| question.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Asking..." } else { "Send" }}
                </button>
            </form>
            <Show when=move || answer.get().is_some()>
                <pre class="code-block integration__answer">
                    {move || answer.get().unwrap_or_default()}
                </pre>
            </Show>
        </div>
    }
}
