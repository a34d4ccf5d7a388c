//! Session-aware HTTP client: the single point of egress for backend calls.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: only the pure pieces (base address,
//! header construction, response triage) are compiled.
//!
//! ERROR HANDLING
//! ==============
//! Response triage is centralized here, by status:
//! - 401: persisted storage is wiped and the browser hard-navigates to the
//!   login view; in-flight application state is discarded.
//! - 403: an "access denied" toast is emitted.
//! - 422: structured field errors are parsed and passed through untouched so
//!   callers can map them onto form state; no toast.
//! - anything else: a toast with the server-provided message when present,
//!   else a generic fallback.
//! Every path re-throws after its side effect, so callers always observe the
//! failure and may layer their own handling on top.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::fmt;

use crate::net::types::FieldErrors;
use crate::state::notify::Notifier;
use crate::state::session::SessionStore;

/// Fallback backend address when `BOTFORGE_API_BASE_URL` is not set at build
/// time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// Toast shown for authorization failures.
pub const ACCESS_DENIED_MESSAGE: &str = "Access denied";

/// Toast shown when a failure carries no server message.
pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred";

/// Backend base address, compiled in from the environment.
pub fn api_base_url() -> String {
    option_env!("BOTFORGE_API_BASE_URL")
        .unwrap_or(DEFAULT_API_BASE_URL)
        .trim_end_matches('/')
        .to_owned()
}

/// Failure taxonomy as observed by callers.
#[derive(Clone, Debug, PartialEq)]
pub enum ApiError {
    /// 401 — the session is invalid or expired. Storage has already been
    /// wiped and navigation to the login view initiated by the time a caller
    /// sees this.
    Unauthorized,
    /// 403 — insufficient privilege; the operation is abandoned.
    Forbidden,
    /// 422 — structured field errors for the originating form.
    Validation(FieldErrors),
    /// Any other non-success response.
    Server { status: u16, message: String },
    /// The request never produced a response.
    Network(String),
}

impl ApiError {
    /// Underlying HTTP status, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::Forbidden => Some(403),
            Self::Validation(_) => Some(422),
            Self::Server { status, .. } => Some(*status),
            Self::Network(_) => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unauthorized => write!(f, "authentication failed"),
            Self::Forbidden => write!(f, "access denied"),
            Self::Validation(_) => write!(f, "validation failed"),
            Self::Server { status, message } => write!(f, "request failed ({status}): {message}"),
            Self::Network(message) => write!(f, "network error: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// `Authorization` header value for the persisted credential, if present.
pub fn authorization_header(token: Option<&str>) -> Option<String> {
    let token = token?;
    if token.is_empty() {
        return None;
    }
    Some(format!("Bearer {token}"))
}

/// Best-effort `message` field from a failure body.
pub fn server_message(body: &serde_json::Value) -> Option<String> {
    body.get("message")
        .and_then(serde_json::Value::as_str)
        .map(str::to_owned)
}

/// Map a failed response onto the error taxonomy.
pub fn error_from_response(status: u16, body: &serde_json::Value) -> ApiError {
    match status {
        401 => ApiError::Unauthorized,
        403 => ApiError::Forbidden,
        422 => {
            let errors: FieldErrors =
                serde_json::from_value(body.clone()).unwrap_or_default();
            ApiError::Validation(errors)
        }
        _ => ApiError::Server {
            status,
            message: server_message(body)
                .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_owned()),
        },
    }
}

/// Session-aware HTTP client. Constructed once in the root `App` and shared
/// via context; holds the base address, the injected session store, and the
/// notifier used for interceptor-emitted toasts.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    session: SessionStore,
    notify: Notifier,
}

impl ApiClient {
    pub fn new(base_url: String, session: SessionStore, notify: Notifier) -> Self {
        Self {
            base_url,
            session,
            notify,
        }
    }

    /// The injected session store (also used by logout and the route guard).
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a backend path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Run the centralized side effects for a failure, then hand it back for
    /// propagation to the caller.
    pub(crate) fn apply_failure_effects(&self, error: &ApiError) {
        match error {
            ApiError::Unauthorized => {
                self.session.clear();
                #[cfg(feature = "hydrate")]
                {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/login");
                    }
                }
            }
            ApiError::Forbidden => self.notify.error(ACCESS_DENIED_MESSAGE),
            ApiError::Validation(_) => {}
            ApiError::Server { message, .. } => self.notify.error(message.clone()),
            ApiError::Network(_) => self.notify.error(GENERIC_FAILURE_MESSAGE),
        }
    }
}

#[cfg(feature = "hydrate")]
impl ApiClient {
    /// GET a JSON resource.
    pub async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, ApiError> {
        let request = self
            .authorized(gloo_net::http::Request::get(&self.url(path)))
            .build()
            .map_err(|e| self.network_error(e))?;
        self.dispatch(request).await
    }

    /// POST a JSON body.
    pub async fn post_json<T: serde::de::DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self
            .authorized(gloo_net::http::Request::post(&self.url(path)))
            .json(body)
            .map_err(|e| self.network_error(e))?;
        self.dispatch(request).await
    }

    /// POST with no body (delete-style endpoints).
    pub async fn post_empty<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, ApiError> {
        let request = self
            .authorized(gloo_net::http::Request::post(&self.url(path)))
            .build()
            .map_err(|e| self.network_error(e))?;
        self.dispatch(request).await
    }

    /// POST a JSON body with an explicit bearer credential instead of the
    /// persisted one (the password-reset token flow).
    pub async fn post_json_with_bearer<T: serde::de::DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
        bearer: &str,
    ) -> Result<T, ApiError> {
        let request = gloo_net::http::Request::post(&self.url(path))
            .header("Authorization", &format!("Bearer {bearer}"))
            .json(body)
            .map_err(|e| self.network_error(e))?;
        self.dispatch(request).await
    }

    /// POST a JSON body authenticated with an `apiKey` header instead of the
    /// bearer token (the external QA integration).
    pub async fn post_json_with_api_key<T: serde::de::DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
        api_key: &str,
    ) -> Result<T, ApiError> {
        let request = gloo_net::http::Request::post(&self.url(path))
            .header("apiKey", api_key)
            .json(body)
            .map_err(|e| self.network_error(e))?;
        self.dispatch(request).await
    }

    /// POST multipart form data (file upload). The browser supplies the
    /// multipart content type and boundary.
    pub async fn post_multipart<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        form: web_sys::FormData,
    ) -> Result<T, ApiError> {
        let request = self
            .authorized_raw(gloo_net::http::Request::post(&self.url(path)))
            .body(form)
            .map_err(|e| self.network_error(e))?;
        self.dispatch(request).await
    }

    /// Attach JSON content typing plus the persisted credential, read fresh
    /// immediately before the request is sent.
    fn authorized(&self, builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
        self.authorized_raw(builder.header("Content-Type", "application/json"))
    }

    /// Credential attachment without content typing (multipart requests).
    fn authorized_raw(
        &self,
        builder: gloo_net::http::RequestBuilder,
    ) -> gloo_net::http::RequestBuilder {
        match authorization_header(self.session.get().as_deref()) {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        }
    }

    async fn dispatch<T: serde::de::DeserializeOwned>(
        &self,
        request: gloo_net::http::Request,
    ) -> Result<T, ApiError> {
        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => return Err(self.network_error(e)),
        };
        let status = response.status();
        if response.ok() {
            return response
                .json::<T>()
                .await
                .map_err(|e| ApiError::Network(e.to_string()));
        }
        let body = response
            .json::<serde_json::Value>()
            .await
            .unwrap_or(serde_json::Value::Null);
        let error = error_from_response(status, &body);
        log::warn!("request failed: {error}");
        self.apply_failure_effects(&error);
        Err(error)
    }

    /// Wrap a transport failure, surfacing the generic toast on the way out.
    fn network_error(&self, e: gloo_net::Error) -> ApiError {
        let error = ApiError::Network(e.to_string());
        self.apply_failure_effects(&error);
        error
    }
}
