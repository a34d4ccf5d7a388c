//! Login page: email + password against `/user/login`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::http::{ApiClient, ApiError};
use crate::net::types::LoginRequest;
use crate::state::notify::Notifier;
use crate::util::validate::is_valid_email;

#[component]
pub fn LoginPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let notify = expect_context::<Notifier>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let email_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();

        email_error.set(None);
        password_error.set(None);
        let mut valid = true;
        if email_value.is_empty() {
            email_error.set(Some("Email is required".to_owned()));
            valid = false;
        } else if !is_valid_email(&email_value) {
            email_error.set(Some("Please enter a valid email".to_owned()));
            valid = false;
        }
        if password_value.is_empty() {
            password_error.set(Some("Password is required".to_owned()));
            valid = false;
        }
        if !valid {
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let client = client.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match client
                    .login(&LoginRequest {
                        email: email_value,
                        password: password_value,
                    })
                    .await
                {
                    Ok(envelope) => {
                        if let Some(data) = envelope.data {
                            client.session().set(&data.access_token);
                        }
                        notify.success(
                            envelope
                                .message
                                .unwrap_or_else(|| "Signed in successfully".to_owned()),
                        );
                        navigate("/dashboard", NavigateOptions::default());
                    }
                    Err(ApiError::Validation(errors)) => {
                        email_error.set(errors.first("email"));
                        password_error.set(errors.first("password"));
                    }
                    Err(ApiError::Unauthorized) => notify.error("Invalid email or password"),
                    Err(_) => {}
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&client, &navigate, email_value, password_value);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome Back"</h1>
                <p class="auth-card__subtitle">"Please sign in to continue"</p>
                <form class="auth-form" on:submit=on_submit novalidate=true>
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
                        <p class="auth-form__error">{move || email_error.get().unwrap_or_default()}</p>
                    </Show>
                    <label class="auth-form__label">
                        "Password"
                        <input
                            class="auth-form__input"
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || password_error.get().is_some()>
                        <p class="auth-form__error">
                            {move || password_error.get().unwrap_or_default()}
                        </p>
                    </Show>
                    <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <div class="auth-card__links">
                    <a href="/forgot-password">"Forgot password?"</a>
                    <a href="/signup">"Don't have an account? Sign Up"</a>
                </div>
            </div>
        </div>
    }
}
