//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::guard::RequireAuth;
use crate::components::toast::ToastHost;
use crate::net::http::{ApiClient, api_base_url};
use crate::pages::api_keys::ApiKeysPage;
use crate::pages::bot::BotWorkspacePage;
use crate::pages::change_password::ChangePasswordPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::forgot_password::ForgotPasswordPage;
use crate::pages::login::LoginPage;
use crate::pages::reset_password::ResetPasswordPage;
use crate::pages::signup::SignupPage;
use crate::pages::verify_email::VerifyEmailPage;
use crate::pages::verify_forgot_password::VerifyForgotPasswordPage;
use crate::state::notify::Notifier;
use crate::state::session::SessionStore;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session store, the notifier, and the HTTP client as contexts,
/// and sets up client-side routing. Public auth routes are open; dashboard
/// routes sit behind `RequireAuth`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionStore::new();
    let notify = Notifier::new();
    let client = ApiClient::new(api_base_url(), session.clone(), notify);

    provide_context(session);
    provide_context(notify);
    provide_context(client);

    view! {
        <Stylesheet id="leptos" href="/pkg/botforge-ui.css"/>
        <Title text="BotForge"/>

        <Router>
            <Routes fallback=|| view! { <HomeRedirect/> }>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage/>
                <Route
                    path=StaticSegment("verify-forgot-password")
                    view=VerifyForgotPasswordPage
                />
                <Route path=StaticSegment("reset-password") view=ResetPasswordPage/>
                <Route path=StaticSegment("verify-email") view=VerifyEmailPage/>
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <RequireAuth><DashboardPage/></RequireAuth> }
                />
                <Route
                    path=(
                        StaticSegment("dashboard"),
                        ParamSegment("id"),
                        StaticSegment("preview"),
                    )
                    view=|| view! { <RequireAuth><BotWorkspacePage/></RequireAuth> }
                />
                <Route
                    path=StaticSegment("api-keys")
                    view=|| view! { <RequireAuth><ApiKeysPage/></RequireAuth> }
                />
                <Route
                    path=StaticSegment("change-password")
                    view=|| view! { <RequireAuth><ChangePasswordPage/></RequireAuth> }
                />
                <Route path=StaticSegment("") view=HomeRedirect/>
            </Routes>
        </Router>

        <ToastHost/>
    }
}

/// Credential-presence redirect for `/` and unknown paths: dashboard when a
/// token is present, login otherwise.
#[component]
fn HomeRedirect() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let target = if session.is_authenticated() {
        "/dashboard"
    } else {
        "/login"
    };
    view! { <Redirect path=target/> }
}
