//! Reset-password page: choose a new password using the emailed reset token.
//!
//! The reset token from the query string stands in for the bearer credential
//! on this one call; success returns a fresh access token that starts a
//! normal session.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::http::{ApiClient, ApiError};
use crate::pages::signup::PASSWORD_RULES_MESSAGE;
use crate::state::notify::Notifier;
use crate::util::validate::password_meets_rules;

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let notify = expect_context::<Notifier>();
    let navigate = use_navigate();
    let query = use_query_map();

    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let password_error = RwSignal::new(None::<String>);
    let confirm_error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let token = move || query.read().get("token");

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let navigate = navigate.clone();
        let Some(token_value) = token() else {
            notify.error("Reset password token is missing");
            navigate("/forgot-password", NavigateOptions::default());
            return;
        };
        let password_value = password.get();
        let confirm_value = confirm_password.get();

        password_error.set(None);
        confirm_error.set(None);
        let mut valid = true;
        if password_value.is_empty() {
            password_error.set(Some("Password is required".to_owned()));
            valid = false;
        } else if !password_meets_rules(&password_value) {
            password_error.set(Some(PASSWORD_RULES_MESSAGE.to_owned()));
            valid = false;
        }
        if confirm_value.is_empty() {
            confirm_error.set(Some("Please confirm your password".to_owned()));
            valid = false;
        } else if confirm_value != password_value {
            confirm_error.set(Some("Passwords must match".to_owned()));
            valid = false;
        }
        if !valid {
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let client = client.clone();
            leptos::task::spawn_local(async move {
                match client
                    .change_forgot_password(&password_value, &token_value)
                    .await
                {
                    Ok(response) => {
                        client.session().set(&response.access_token);
                        notify.success(
                            response
                                .message
                                .unwrap_or_else(|| "Password reset successfully".to_owned()),
                        );
                        navigate("/dashboard", NavigateOptions::default());
                    }
                    Err(ApiError::Validation(errors)) => {
                        password_error.set(errors.first("password"));
                    }
                    Err(ApiError::Unauthorized) => {
                        notify.error("Invalid or expired reset token");
                        navigate("/forgot-password", NavigateOptions::default());
                    }
                    Err(_) => {
                        notify.error("Failed to reset password. Please try again.");
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&client, token_value, password_value);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Reset Password"</h1>
                <p class="auth-card__subtitle">"Choose a new password for your account"</p>
                <form class="auth-form" on:submit=on_submit novalidate=true>
                    <label class="auth-form__label">
                        "New Password"
                        <input
                            class="auth-form__input"
                            type="password"
                            autocomplete="new-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || password_error.get().is_some()>
                        <p class="auth-form__error">
                            {move || password_error.get().unwrap_or_default()}
                        </p>
                    </Show>
                    <label class="auth-form__label">
                        "Confirm Password"
                        <input
                            class="auth-form__input"
                            type="password"
                            autocomplete="new-password"
                            prop:value=move || confirm_password.get()
                            on:input=move |ev| confirm_password.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || confirm_error.get().is_some()>
                        <p class="auth-form__error">
                            {move || confirm_error.get().unwrap_or_default()}
                        </p>
                    </Show>
                    <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Resetting..." } else { "Reset Password" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
