use super::*;

// =============================================================
// Envelope and auth payloads
// =============================================================

#[test]
fn login_envelope_deserializes_nested_access_token() {
    let body = serde_json::json!({
        "message": "Login successful",
        "data": { "accessToken": "tok-abc" }
    });
    let envelope: Envelope<LoginData> = serde_json::from_value(body).unwrap();
    assert_eq!(envelope.message.as_deref(), Some("Login successful"));
    assert_eq!(envelope.data.unwrap().access_token, "tok-abc");
}

#[test]
fn envelope_tolerates_missing_fields() {
    let envelope: Envelope<LoginData> = serde_json::from_value(serde_json::json!({})).unwrap();
    assert_eq!(envelope.message, None);
    assert!(envelope.data.is_none());
}

#[test]
fn auth_token_response_is_top_level() {
    let body = serde_json::json!({
        "accessToken": "tok-reset",
        "message": "Password reset successfully"
    });
    let resp: AuthTokenResponse = serde_json::from_value(body).unwrap();
    assert_eq!(resp.access_token, "tok-reset");
    assert_eq!(resp.message.as_deref(), Some("Password reset successfully"));
}

// =============================================================
// Chatbots and sources
// =============================================================

#[test]
fn chatbot_list_round_trips_name() {
    let body = serde_json::json!({
        "message": "ok",
        "data": [
            { "_id": "b1", "name": "Support Bot", "createdAt": "2024-11-03T10:15:30Z" }
        ]
    });
    let envelope: Envelope<Vec<Chatbot>> = serde_json::from_value(body).unwrap();
    let bots = envelope.data.unwrap();
    assert_eq!(bots.len(), 1);
    assert_eq!(bots[0].id, "b1");
    assert_eq!(bots[0].name, "Support Bot");
    assert_eq!(bots[0].created_at.as_deref(), Some("2024-11-03T10:15:30Z"));
}

#[test]
fn source_document_defaults_optional_fields() {
    let doc: SourceDocument =
        serde_json::from_value(serde_json::json!({ "_id": "d1" })).unwrap();
    assert_eq!(doc.id, "d1");
    assert_eq!(doc.filename, "");
    assert_eq!(doc.url, None);
    assert_eq!(doc.created_at, None);
}

#[test]
fn source_kind_wire_codes() {
    assert_eq!(SourceKind::File.code(), "D");
    assert_eq!(SourceKind::Text.code(), "T");
    assert_eq!(SourceKind::Website.code(), "W");
}

// =============================================================
// API keys
// =============================================================

#[test]
fn api_key_list_nests_under_apikeys() {
    let body = serde_json::json!({
        "data": {
            "apikeys": [
                { "_id": "k1", "name": "prod", "apiKey": "sk-123", "createdAt": "2024-01-01" }
            ]
        }
    });
    let envelope: Envelope<ApiKeyListData> = serde_json::from_value(body).unwrap();
    let keys = envelope.data.unwrap().apikeys;
    assert_eq!(keys.len(), 1);
    assert_eq!(keys[0].name, "prod");
    assert_eq!(keys[0].api_key, "sk-123");
}

#[test]
fn generated_key_is_top_level() {
    let resp: GenerateApiKeyResponse =
        serde_json::from_value(serde_json::json!({ "apiKey": "sk-new" })).unwrap();
    assert_eq!(resp.api_key, "sk-new");
}

// =============================================================
// Field errors
// =============================================================

#[test]
fn field_errors_expose_first_message_per_field() {
    let errors: FieldErrors = serde_json::from_value(serde_json::json!({
        "errors": {
            "email": ["Email is required", "Email must be valid"],
            "password": ["Password is required"]
        }
    }))
    .unwrap();
    assert_eq!(errors.first("email").as_deref(), Some("Email is required"));
    assert_eq!(errors.first("password").as_deref(), Some("Password is required"));
    assert_eq!(errors.first("name"), None);
    assert!(!errors.is_empty());
}

#[test]
fn empty_field_errors() {
    let errors = FieldErrors::default();
    assert!(errors.is_empty());
    assert_eq!(errors.first("email"), None);
}

// =============================================================
// Request bodies
// =============================================================

#[test]
fn signup_request_serializes_camel_case() {
    let body = serde_json::to_value(SignupRequest {
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        password: "Engine42x".to_owned(),
    })
    .unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "password": "Engine42x"
        })
    );
}

#[test]
fn ask_request_serializes_history_shape() {
    let body = serde_json::to_value(AskRequest {
        bot_id: "b1".to_owned(),
        chat_history: vec![HistoryEntry {
            role: "human".to_owned(),
            content: "Hello".to_owned(),
        }],
        question: "What next?".to_owned(),
    })
    .unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "botId": "b1",
            "chatHistory": [ { "role": "human", "content": "Hello" } ],
            "question": "What next?"
        })
    );
}
