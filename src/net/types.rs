//! Wire DTOs for the backend REST surface.
//!
//! DESIGN
//! ======
//! Field names intentionally mirror the backend's JSON (camelCase, Mongo-style
//! `_id`) via serde renames so the structs read idiomatically on the Rust side
//! while round-tripping losslessly.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Standard response envelope: `{ "message": ..., "data": ... }`.
///
/// Both fields are optional because several endpoints return the payload at
/// the top level instead (see [`AuthTokenResponse`]).
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

/// Login payload nested under `data`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginData {
    #[serde(rename = "accessToken")]
    pub access_token: String,
}

/// Top-level token response used by password reset and email verification.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthTokenResponse {
    #[serde(rename = "accessToken")]
    pub access_token: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// A configured chatbot. Fully owned by the backend; the client only holds
/// transient copies fetched per view.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Chatbot {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

/// Discriminator for the three training-source types.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceKind {
    File,
    Text,
    Website,
}

impl SourceKind {
    /// Single-letter wire code used as the `documentType` parameter.
    pub fn code(self) -> &'static str {
        match self {
            Self::File => "D",
            Self::Text => "T",
            Self::Website => "W",
        }
    }

    /// Human label for panel headings and notifications.
    pub fn label(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Text => "text snippet",
            Self::Website => "website",
        }
    }
}

/// One unit of training content attached to a bot.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SourceDocument {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

/// An account API key. The secret value is visible in full once at creation
/// and masked everywhere else.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ApiKey {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "apiKey", default)]
    pub api_key: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

/// `data` payload of the API-key list endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ApiKeyListData {
    #[serde(default)]
    pub apikeys: Vec<ApiKey>,
}

/// Top-level response of the key-generation endpoint; `apiKey` is the one
/// moment the secret is visible in full.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct GenerateApiKeyResponse {
    #[serde(rename = "apiKey")]
    pub api_key: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Structured field errors from a 422 response:
/// `{ "errors": { "email": ["..."], ... } }`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct FieldErrors {
    #[serde(default)]
    pub errors: HashMap<String, Vec<String>>,
}

impl FieldErrors {
    /// First message recorded for a field, if any.
    pub fn first(&self, field: &str) -> Option<String> {
        self.errors.get(field).and_then(|msgs| msgs.first().cloned())
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

/// One prior message in a question-answering request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub role: String,
    pub content: String,
}

// --- request bodies ---

#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct SignupRequest {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Body of both QA endpoints: the playground preview and the external,
/// API-key-authenticated integration.
#[derive(Clone, Debug, Serialize)]
pub struct AskRequest {
    #[serde(rename = "botId")]
    pub bot_id: String,
    #[serde(rename = "chatHistory")]
    pub chat_history: Vec<HistoryEntry>,
    pub question: String,
}
