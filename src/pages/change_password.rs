//! Change-password page for an authenticated session.

use leptos::prelude::*;

use crate::components::layout::DashboardLayout;
use crate::net::http::{ApiClient, ApiError};
use crate::pages::signup::PASSWORD_RULES_MESSAGE;
use crate::state::notify::Notifier;
use crate::util::validate::{password_meets_rules, password_strength, password_strength_text};

#[component]
pub fn ChangePasswordPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let notify = expect_context::<Notifier>();

    let new_password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let password_error = RwSignal::new(None::<String>);
    let confirm_error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let strength = move || password_strength(&new_password.get());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let password_value = new_password.get();
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
        if confirm_value != password_value {
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
                match client.change_password(&password_value).await {
                    Ok(_) => {
                        notify.success("Password updated successfully");
                        new_password.set(String::new());
                        confirm_password.set(String::new());
                    }
                    Err(ApiError::Validation(errors)) => {
                        password_error.set(errors.first("password"));
                    }
                    Err(_) => notify.error("Failed to update password"),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&client, password_value);
        }
    };

    view! {
        <DashboardLayout>
            <div class="panel panel--narrow">
                <h2>"Change Password"</h2>
                <form class="auth-form" on:submit=on_submit novalidate=true>
                    <label class="auth-form__label">
                        "New Password"
                        <input
                            class="auth-form__input"
                            type="password"
                            autocomplete="new-password"
                            prop:value=move || new_password.get()
                            on:input=move |ev| new_password.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || !new_password.get().is_empty()>
                        <div class="strength-meter">
                            <div
                                class="strength-meter__bar"
                                style=move || format!("width: {}%", strength())
                            ></div>
                            <span class="strength-meter__text">
                                {move || password_strength_text(strength())}
                            </span>
                        </div>
                    </Show>
                    <Show when=move || password_error.get().is_some()>
                        <p class="auth-form__error">
                            {move || password_error.get().unwrap_or_default()}
                        </p>
                    </Show>
                    <label class="auth-form__label">
                        "Confirm New Password"
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
                        {move || if busy.get() { "Updating..." } else { "Update Password" }}
                    </button>
                </form>
            </div>
        </DashboardLayout>
    }
}
