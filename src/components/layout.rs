//! Shared chrome for authenticated dashboard views.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionStore;

/// Header-and-content frame used by every authenticated page: brand link back
/// to the dashboard, navigation to API keys and change-password, and logout.
#[component]
pub fn DashboardLayout(children: Children) -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();

    let nav_dashboard = navigate.clone();
    let nav_keys = navigate.clone();
    let nav_password = navigate.clone();
    let nav_logout = navigate.clone();

    let on_logout = move |_| {
        // Wholesale wipe, same as the authentication-failure path.
        session.clear();
        nav_logout("/login", NavigateOptions::default());
    };

    view! {
        <div class="dashboard-shell">
            <header class="dashboard-shell__header toolbar">
                <button
                    class="toolbar__brand"
                    on:click=move |_| nav_dashboard("/dashboard", NavigateOptions::default())
                >
                    "BotForge"
                </button>

                <span class="toolbar__spacer"></span>

                <button
                    class="btn toolbar__link"
                    on:click=move |_| nav_keys("/api-keys", NavigateOptions::default())
                >
                    "API Keys"
                </button>
                <button
                    class="btn toolbar__link"
                    on:click=move |_| nav_password("/change-password", NavigateOptions::default())
                >
                    "Change Password"
                </button>
                <button class="btn toolbar__logout" on:click=on_logout title="Logout">
                    "Logout"
                </button>
            </header>
            <main class="dashboard-shell__content">{children()}</main>
        </div>
    }
}
