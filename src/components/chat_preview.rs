//! Chat preview panel for manually testing a configured bot.
//!
//! The transcript model lives in `state::chat`; this component renders it,
//! wires the input form, and issues the playground question-answering call.
//! At most one request is outstanding: the in-flight flag disables the input
//! and further submits are silent no-ops.

use leptos::prelude::*;

use crate::net::http::ApiClient;
use crate::state::chat::{ChatTranscript, Speaker};
use crate::state::notify::Notifier;
use crate::util::clock::display_now;

/// Toast shown when the question-answering call fails.
pub const QA_FAILURE_MESSAGE: &str = "Failed to get response from the agent";

#[component]
pub fn ChatPreview(bot_id: String) -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let notify = expect_context::<Notifier>();

    let chat = RwSignal::new(ChatTranscript::new(display_now()));
    let input = RwSignal::new(String::new());

    let on_send = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(request) = chat.try_update(|c| c.begin_send(&input.get_untracked(), display_now()))
        else {
            return;
        };
        // Empty input or a reply still outstanding: silent no-op.
        let Some(request) = request else {
            return;
        };
        input.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let client = client.clone();
            let bot_id = bot_id.clone();
            leptos::task::spawn_local(async move {
                match client
                    .ask_playground(&bot_id, request.history, &request.question)
                    .await
                {
                    Ok(envelope) => match envelope.data {
                        Some(answer) => chat.update(|c| c.complete(answer, display_now())),
                        None => {
                            notify.error(QA_FAILURE_MESSAGE);
                            chat.update(|c| c.fail(display_now()));
                        }
                    },
                    Err(_) => {
                        notify.error(QA_FAILURE_MESSAGE);
                        chat.update(|c| c.fail(display_now()));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&client, &bot_id, &notify, request);
        }
    };

    let on_reset = move |_| {
        chat.update(|c| c.reset(display_now()));
        input.set(String::new());
    };

    view! {
        <div class="chat-preview">
            <div class="chat-preview__header">
                <h2>"Agent Preview"</h2>
                <button class="btn chat-preview__reset" on:click=on_reset title="Reset conversation">
                    "Reset"
                </button>
            </div>

            <div class="chat-preview__messages">
                {move || {
                    chat.get()
                        .turns
                        .into_iter()
                        .map(|turn| {
                            let side = match turn.speaker {
                                Speaker::Human => "chat-turn chat-turn--human",
                                Speaker::Assistant => "chat-turn chat-turn--assistant",
                            };
                            view! {
                                <div class=side>
                                    <span class="chat-turn__meta">
                                        {turn.speaker.label()} " • " {turn.timestamp.clone()}
                                    </span>
                                    <p class="chat-turn__bubble">{turn.content.clone()}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                <Show when=move || chat.get().awaiting_reply>
                    <div class="chat-turn chat-turn--assistant chat-turn--pending">
                        <p class="chat-turn__bubble">"Generating response..."</p>
                    </div>
                </Show>
            </div>

            <form class="chat-preview__form" on:submit=on_send>
                <input
                    class="chat-preview__input"
                    type="text"
                    placeholder="Type your message..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    disabled=move || chat.get().awaiting_reply
                />
                <button
                    class="btn btn--primary"
                    type="submit"
                    disabled=move || {
                        chat.get().awaiting_reply || input.get().trim().is_empty()
                    }
                >
                    "Send"
                </button>
            </form>
        </div>
    }
}
