//! Forgot-password page: request reset instructions by email.

use leptos::prelude::*;

use crate::net::http::{ApiClient, ApiError};
use crate::state::notify::Notifier;
use crate::util::validate::is_valid_email;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let notify = expect_context::<Notifier>();

    let email = RwSignal::new(String::new());
    let email_error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let sent = RwSignal::new(false);

    let on_submit = Callback::new(move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        email_error.set(None);
        if email_value.is_empty() {
            email_error.set(Some("Email is required".to_owned()));
            return;
        }
        if !is_valid_email(&email_value) {
            email_error.set(Some("Please enter a valid email".to_owned()));
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let client = client.clone();
            leptos::task::spawn_local(async move {
                match client.forgot_password(&email_value).await {
                    Ok(_) => {
                        sent.set(true);
                        notify.success(
                            "Password reset instructions have been sent to your email",
                        );
                    }
                    Err(ApiError::Validation(errors)) => email_error.set(errors.first("email")),
                    Err(ApiError::Server { status: 404, .. }) => {
                        notify.error("No account found with this email address");
                    }
                    Err(_) => {
                        notify.error("Failed to send reset instructions. Please try again.");
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&client, email_value);
        }
    });

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Forgot Password"</h1>
                <Show
                    when=move || !sent.get()
                    fallback=|| {
                        view! {
                            <div class="auth-card__confirmation">
                                <p>
                                    "Check your inbox. If an account exists for that address, a reset link is on its way."
                                </p>
                                <a href="/login">"Back to sign in"</a>
                            </div>
                        }
                    }
                >
                    <p class="auth-card__subtitle">
                        "Enter your email and we'll send you reset instructions"
                    </p>
                    <form class="auth-form" on:submit=move |ev| on_submit.run(ev) novalidate=true>
                        <label class="auth-form__label">
                            "Email Address"
                            <input
                                class="auth-form__input"
                                type="email"
                                autocomplete="email"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                        </label>
                        <Show when=move || email_error.get().is_some()>
                            <p class="auth-form__error">
                                {move || email_error.get().unwrap_or_default()}
                            </p>
                        </Show>
                        <button
                            class="btn btn--primary auth-form__submit"
                            type="submit"
                            disabled=move || busy.get()
                        >
                            {move || if busy.get() { "Sending..." } else { "Send Reset Instructions" }}
                        </button>
                    </form>
                    <div class="auth-card__links">
                        <a href="/login">"Back to sign in"</a>
                    </div>
                </Show>
            </div>
        </div>
    }
}
