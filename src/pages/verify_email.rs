//! Email verification, run automatically on mount.
//!
//! The signup email links here with `?token=...`; a valid token returns an
//! access token that starts the session and lands on the dashboard.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::http::ApiClient;
use crate::pages::VerifyStatus;
use crate::state::notify::Notifier;

#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let notify = expect_context::<Notifier>();
    let navigate = use_navigate();
    let query = use_query_map();

    let status = RwSignal::new(VerifyStatus::Verifying);
    let attempted = RwSignal::new(false);

    let token = move || query.read().get("token");

    {
        let navigate = navigate.clone();
        Effect::new(move || {
            if attempted.get() {
                return;
            }
            attempted.set(true);
            let Some(token_value) = token() else {
                notify.error("Verification token is missing");
                status.set(VerifyStatus::Failed);
                return;
            };

            #[cfg(feature = "hydrate")]
            {
                let client = client.clone();
                let navigate = navigate.clone();
                leptos::task::spawn_local(async move {
                    match client.verify_email(&token_value).await {
                        Ok(response) => {
                            client.session().set(&response.access_token);
                            notify.success(
                                response
                                    .message
                                    .unwrap_or_else(|| "Email verified successfully".to_owned()),
                            );
                            status.set(VerifyStatus::Success);
                            gloo_timers::future::sleep(std::time::Duration::from_secs(2)).await;
                            navigate("/dashboard", NavigateOptions::default());
                        }
                        Err(_) => {
                            notify.error("Verification failed");
                            status.set(VerifyStatus::Failed);
                            gloo_timers::future::sleep(std::time::Duration::from_secs(2)).await;
                            navigate("/login", NavigateOptions::default());
                        }
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&client, &navigate, token_value);
            }
        });
    }

    let continue_navigate = navigate.clone();
    let back_navigate = navigate;

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Verify Email"</h1>
                {move || match status.get() {
                    VerifyStatus::Verifying => {
                        view! { <p class="auth-card__subtitle">"Verifying your email..."</p> }
                            .into_any()
                    }
                    VerifyStatus::Success => {
                        let continue_navigate = continue_navigate.clone();
                        view! {
                            <div class="auth-card__confirmation">
                                <p>"Email verified. Taking you to your dashboard..."</p>
                                <button
                                    class="btn btn--primary"
                                    on:click=move |_| {
                                        continue_navigate("/dashboard", NavigateOptions::default());
                                    }
                                >
                                    "Go to dashboard"
                                </button>
                            </div>
                        }
                            .into_any()
                    }
                    VerifyStatus::Failed => {
                        let back_navigate = back_navigate.clone();
                        view! {
                            <div class="auth-card__confirmation">
                                <p>"This verification link is invalid or has expired."</p>
                                <button
                                    class="btn"
                                    on:click=move |_| {
                                        back_navigate("/login", NavigateOptions::default());
                                    }
                                >
                                    "Back to sign in"
                                </button>
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}
