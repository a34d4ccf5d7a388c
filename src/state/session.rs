//! Persisted session credential.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bearer token is the only process-wide shared mutable resource. It is
//! read immediately before every outbound request and may be wiped by any
//! response's authentication-failure handler; both happen on the single UI
//! thread, so no locking is needed beyond what the backing store provides.
//!
//! `SessionStore` is provided via context and injected into the HTTP client
//! and the route guard instead of being read as ambient global storage. In
//! the browser it is backed by `localStorage` under a fixed key; in native
//! builds (tests, SSR) by in-process shared memory with the same semantics.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Storage key holding the bearer credential.
pub const AUTH_TOKEN_KEY: &str = "authToken";

/// Handle to the persisted session credential.
#[derive(Clone, Default)]
pub struct SessionStore {
    #[cfg(not(feature = "hydrate"))]
    token: std::sync::Arc<std::sync::Mutex<Option<String>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the current credential, if any. Reads the backing store fresh on
    /// every call; there is no cached copy to go stale.
    pub fn get(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(AUTH_TOKEN_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            self.token.lock().ok().and_then(|guard| guard.clone())
        }
    }

    /// Persist a new credential, replacing any previous one.
    pub fn set(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
            else {
                return;
            };
            let _ = storage.set_item(AUTH_TOKEN_KEY, token);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            if let Ok(mut guard) = self.token.lock() {
                *guard = Some(token.to_owned());
            }
        }
    }

    /// Wipe the entire storage area, credential included. Used on logout and
    /// on authentication failure; deliberately not selective.
    pub fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
            else {
                return;
            };
            let _ = storage.clear();
        }
        #[cfg(not(feature = "hydrate"))]
        {
            if let Ok(mut guard) = self.token.lock() {
                *guard = None;
            }
        }
    }

    /// Whether a non-empty credential is currently present. Presence only;
    /// validity is established by the server on first use.
    pub fn is_authenticated(&self) -> bool {
        self.get().is_some_and(|token| !token.is_empty())
    }
}
