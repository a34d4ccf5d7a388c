use super::*;
use leptos::prelude::*;

// =============================================================
// Base address and header construction
// =============================================================

#[test]
fn api_base_url_has_no_trailing_slash() {
    assert!(!api_base_url().ends_with('/'));
}

#[test]
fn url_joins_base_and_path() {
    let client = ApiClient::new(
        "http://localhost:8080".to_owned(),
        SessionStore::new(),
        Notifier::new(),
    );
    assert_eq!(client.url("/user/login"), "http://localhost:8080/user/login");
}

#[test]
fn authorization_header_present_credential() {
    assert_eq!(
        authorization_header(Some("tok-123")),
        Some("Bearer tok-123".to_owned())
    );
}

#[test]
fn authorization_header_absent_or_empty_credential() {
    assert_eq!(authorization_header(None), None);
    assert_eq!(authorization_header(Some("")), None);
}

// =============================================================
// Response triage
// =============================================================

#[test]
fn status_401_maps_to_unauthorized() {
    let error = error_from_response(401, &serde_json::Value::Null);
    assert_eq!(error, ApiError::Unauthorized);
    assert_eq!(error.status(), Some(401));
}

#[test]
fn status_403_maps_to_forbidden() {
    assert_eq!(
        error_from_response(403, &serde_json::Value::Null),
        ApiError::Forbidden
    );
}

#[test]
fn status_422_carries_field_errors() {
    let body = serde_json::json!({
        "errors": { "email": ["Email is required"] }
    });
    match error_from_response(422, &body) {
        ApiError::Validation(errors) => {
            assert_eq!(errors.first("email").as_deref(), Some("Email is required"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn status_422_with_unparseable_body_yields_empty_field_errors() {
    match error_from_response(422, &serde_json::json!("oops")) {
        ApiError::Validation(errors) => assert!(errors.is_empty()),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn other_statuses_use_the_server_message() {
    let body = serde_json::json!({ "message": "bot not found" });
    assert_eq!(
        error_from_response(404, &body),
        ApiError::Server {
            status: 404,
            message: "bot not found".to_owned(),
        }
    );
}

#[test]
fn other_statuses_fall_back_to_the_generic_message() {
    assert_eq!(
        error_from_response(500, &serde_json::Value::Null),
        ApiError::Server {
            status: 500,
            message: GENERIC_FAILURE_MESSAGE.to_owned(),
        }
    );
}

// =============================================================
// Failure side effects
// =============================================================

#[test]
fn unauthorized_wipes_the_session_store() {
    let session = SessionStore::new();
    session.set("tok-123");
    let client = ApiClient::new(api_base_url(), session.clone(), Notifier::new());

    client.apply_failure_effects(&ApiError::Unauthorized);

    assert_eq!(session.get(), None);
}

#[test]
fn forbidden_emits_the_access_denied_toast() {
    let notify = Notifier::new();
    let client = ApiClient::new(api_base_url(), SessionStore::new(), notify);

    client.apply_failure_effects(&ApiError::Forbidden);

    notify.state().with_untracked(|s| {
        assert_eq!(s.toasts.len(), 1);
        assert_eq!(s.toasts[0].message, ACCESS_DENIED_MESSAGE);
    });
}

#[test]
fn validation_failures_emit_no_toast() {
    let notify = Notifier::new();
    let client = ApiClient::new(api_base_url(), SessionStore::new(), notify);

    client.apply_failure_effects(&ApiError::Validation(FieldErrors::default()));

    notify
        .state()
        .with_untracked(|s| assert!(s.toasts.is_empty()));
}

#[test]
fn server_failures_toast_their_message() {
    let notify = Notifier::new();
    let client = ApiClient::new(api_base_url(), SessionStore::new(), notify);

    client.apply_failure_effects(&ApiError::Server {
        status: 500,
        message: "backend exploded".to_owned(),
    });

    notify.state().with_untracked(|s| {
        assert_eq!(s.toasts.len(), 1);
        assert_eq!(s.toasts[0].message, "backend exploded");
    });
}

#[test]
fn network_failures_toast_the_generic_message() {
    let notify = Notifier::new();
    let client = ApiClient::new(api_base_url(), SessionStore::new(), notify);

    client.apply_failure_effects(&ApiError::Network("connection refused".to_owned()));

    notify.state().with_untracked(|s| {
        assert_eq!(s.toasts.len(), 1);
        assert_eq!(s.toasts[0].message, GENERIC_FAILURE_MESSAGE);
    });
}
