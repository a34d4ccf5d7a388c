//! Route guard for views that require an authenticated session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The guard checks only local presence of the credential, not validity or
//! expiry; an expired-but-present token passes here and fails at the HTTP
//! client on first request. The originally requested location is carried to
//! the login view as a `from` query parameter for a potential post-login
//! return — nothing consumes it yet, and the capture-and-ignore contract is
//! intentional.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::SessionStore;

/// What the guard decided for one render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the wrapped content unchanged.
    Allow,
    /// Redirect to the login view at this target.
    Redirect(String),
}

/// Pure guard contract: presence of a credential admits; absence redirects
/// with the requested location captured.
pub fn decide(authenticated: bool, requested_path: &str) -> GuardDecision {
    if authenticated {
        GuardDecision::Allow
    } else {
        GuardDecision::Redirect(login_redirect_target(requested_path))
    }
}

/// Login target carrying the originating location as redirect state.
pub fn login_redirect_target(from: &str) -> String {
    if from.is_empty() || from == "/login" {
        "/login".to_owned()
    } else {
        format!("/login?from={}", encode_component(from))
    }
}

/// Percent-encode a query-parameter value. Unreserved characters pass
/// through; everything else, `/` included, is escaped.
fn encode_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

/// Gate component wrapping any view that requires an authenticated session.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();
    let location = use_location();

    let authenticated = session.is_authenticated();

    Effect::new(move || {
        if authenticated {
            return;
        }
        let requested = location.pathname.get();
        match decide(false, &requested) {
            GuardDecision::Redirect(target) => {
                navigate(
                    &target,
                    NavigateOptions {
                        replace: true,
                        ..Default::default()
                    },
                );
            }
            GuardDecision::Allow => {}
        }
    });

    view! {
        <Show
            when=move || authenticated
            fallback=|| view! { <p class="guard-redirect">"Redirecting to login..."</p> }
        >
            {children()}
        </Show>
    }
}
