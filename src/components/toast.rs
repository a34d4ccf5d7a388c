//! Toast renderer for the shared notification queue.

use leptos::prelude::*;

use crate::state::notify::{Notifier, ToastLevel};

/// Fixed-position stack rendering every live toast. Mounted once in the root
/// `App`; click a toast to dismiss it early.
#[component]
pub fn ToastHost() -> impl IntoView {
    let notify = expect_context::<Notifier>();

    view! {
        <div class="toast-stack">
            {move || {
                notify
                    .state()
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let class = match toast.level {
                            ToastLevel::Success => "toast toast--success",
                            ToastLevel::Error => "toast toast--error",
                        };
                        let id = toast.id.clone();
                        view! {
                            <div class=class role="status" on:click=move |_| notify.dismiss(&id)>
                                {toast.message.clone()}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
