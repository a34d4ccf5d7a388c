//! Signup page: account creation against `/user/signUp`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::http::{ApiClient, ApiError};
use crate::net::types::SignupRequest;
use crate::state::notify::Notifier;
use crate::util::validate::{is_valid_email, password_meets_rules};

/// Validation message for the password-rules check.
pub const PASSWORD_RULES_MESSAGE: &str =
    "Password must contain at least 8 characters, one uppercase, one lowercase and one number";

#[component]
pub fn SignupPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let notify = expect_context::<Notifier>();
    let navigate = use_navigate();

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());

    let first_name_error = RwSignal::new(None::<String>);
    let last_name_error = RwSignal::new(None::<String>);
    let email_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);
    let confirm_error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let first_value = first_name.get().trim().to_owned();
        let last_value = last_name.get().trim().to_owned();
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        let confirm_value = confirm_password.get();

        first_name_error.set(None);
        last_name_error.set(None);
        email_error.set(None);
        password_error.set(None);
        confirm_error.set(None);

        let mut valid = true;
        if first_value.is_empty() {
            first_name_error.set(Some("First name is required".to_owned()));
            valid = false;
        }
        if last_value.is_empty() {
            last_name_error.set(Some("Last name is required".to_owned()));
            valid = false;
        }
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
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match client
                    .signup(&SignupRequest {
                        first_name: first_value,
                        last_name: last_value,
                        email: email_value,
                        password: password_value,
                    })
                    .await
                {
                    Ok(envelope) => {
                        notify.success(
                            envelope
                                .message
                                .unwrap_or_else(|| "Account created successfully".to_owned()),
                        );
                        navigate("/login", NavigateOptions::default());
                    }
                    Err(ApiError::Validation(errors)) => {
                        first_name_error.set(errors.first("firstName"));
                        last_name_error.set(errors.first("lastName"));
                        email_error.set(errors.first("email"));
                        password_error.set(errors.first("password"));
                    }
                    Err(_) => {}
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (
                &client,
                &navigate,
                first_value,
                last_value,
                email_value,
                password_value,
            );
        }
    };

    let field = |label: &'static str,
                 kind: &'static str,
                 value: RwSignal<String>,
                 error: RwSignal<Option<String>>| {
        view! {
            <label class="auth-form__label">
                {label}
                <input
                    class="auth-form__input"
                    type=kind
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </label>
            <Show when=move || error.get().is_some()>
                <p class="auth-form__error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create Account"</h1>
                <p class="auth-card__subtitle">"Start building your AI agents"</p>
                <form class="auth-form" on:submit=on_submit novalidate=true>
                    {field("First Name", "text", first_name, first_name_error)}
                    {field("Last Name", "text", last_name, last_name_error)}
                    {field("Email Address", "email", email, email_error)}
                    {field("Password", "password", password, password_error)}
                    {field("Confirm Password", "password", confirm_password, confirm_error)}
                    <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Sign Up" }}
                    </button>
                </form>
                <div class="auth-card__links">
                    <a href="/login">"Already have an account? Sign In"</a>
                </div>
            </div>
        </div>
    }
}
