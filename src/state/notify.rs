//! Transient toast notifications.
//!
//! The Rust-native counterpart of the original toaster: a queue of
//! success/error toasts rendered by `components::toast::ToastHost`. The
//! `Notifier` handle is provided via context and injected into the HTTP
//! client so response interception can surface failures from one place.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use leptos::prelude::*;

/// How long a toast stays on screen before auto-dismissal.
pub const TOAST_DURATION_SECS: u64 = 5;

/// Severity of a toast, which controls its styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

/// One queued notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: String,
    pub level: ToastLevel,
    pub message: String,
}

/// Ordered queue of live toasts, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotifyState {
    pub toasts: Vec<Toast>,
}

impl NotifyState {
    /// Append a toast and return its generated id.
    pub fn push(&mut self, level: ToastLevel, message: String) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.toasts.push(Toast {
            id: id.clone(),
            level,
            message,
        });
        id
    }

    /// Remove a toast by id; unknown ids are ignored.
    pub fn dismiss(&mut self, id: &str) {
        self.toasts.retain(|toast| toast.id != id);
    }
}

/// Shared handle for emitting toasts from components and the HTTP client.
#[derive(Clone, Copy)]
pub struct Notifier {
    state: RwSignal<NotifyState>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(NotifyState::default()),
        }
    }

    /// The underlying signal, for the `ToastHost` renderer.
    pub fn state(&self) -> RwSignal<NotifyState> {
        self.state
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastLevel::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastLevel::Error, message.into());
    }

    /// Dismiss a toast early (click-to-dismiss).
    pub fn dismiss(&self, id: &str) {
        self.state.update(|s| s.dismiss(id));
    }

    fn push(&self, level: ToastLevel, message: String) {
        let Some(id) = self.state.try_update(|s| s.push(level, message)) else {
            return;
        };
        // Auto-dismiss after the display window; browser-only.
        #[cfg(feature = "hydrate")]
        {
            let state = self.state;
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_secs(TOAST_DURATION_SECS))
                    .await;
                state.update(|s| s.dismiss(&id));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}
