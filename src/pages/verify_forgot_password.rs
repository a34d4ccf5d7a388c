//! Forgot-password token verification, run automatically on mount.
//!
//! The reset email links here with `?token=...`; a valid token forwards to
//! the reset form with the token carried along, an invalid one bounces back
//! to the request form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::http::ApiClient;
use crate::pages::VerifyStatus;
use crate::state::notify::Notifier;

#[component]
pub fn VerifyForgotPasswordPage() -> impl IntoView {
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
                    match client.verify_forgot_email(&token_value).await {
                        Ok(envelope) => {
                            notify.success(
                                envelope
                                    .message
                                    .unwrap_or_else(|| "Token verified successfully".to_owned()),
                            );
                            status.set(VerifyStatus::Success);
                            gloo_timers::future::sleep(std::time::Duration::from_secs(2)).await;
                            navigate(
                                &format!("/reset-password?token={token_value}"),
                                NavigateOptions::default(),
                            );
                        }
                        Err(_) => {
                            notify.error("Verification failed");
                            status.set(VerifyStatus::Failed);
                            gloo_timers::future::sleep(std::time::Duration::from_secs(2)).await;
                            navigate("/forgot-password", NavigateOptions::default());
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
                <h1>"Verify Reset Link"</h1>
                {move || match status.get() {
                    VerifyStatus::Verifying => {
                        view! { <p class="auth-card__subtitle">"Verifying your reset link..."</p> }
                            .into_any()
                    }
                    VerifyStatus::Success => {
                        let continue_navigate = continue_navigate.clone();
                        view! {
                            <div class="auth-card__confirmation">
                                <p>"Link verified. Taking you to the reset form..."</p>
                                <button
                                    class="btn btn--primary"
                                    on:click=move |_| {
                                        let target = token()
                                            .map(|t| format!("/reset-password?token={t}"))
                                            .unwrap_or_else(|| "/forgot-password".to_owned());
                                        continue_navigate(&target, NavigateOptions::default());
                                    }
                                >
                                    "Continue now"
                                </button>
                            </div>
                        }
                            .into_any()
                    }
                    VerifyStatus::Failed => {
                        let back_navigate = back_navigate.clone();
                        view! {
                            <div class="auth-card__confirmation">
                                <p>"This reset link is invalid or has expired."</p>
                                <button
                                    class="btn"
                                    on:click=move |_| {
                                        back_navigate("/forgot-password", NavigateOptions::default());
                                    }
                                >
                                    "Request a new link"
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
