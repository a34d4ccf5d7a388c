use super::*;

#[test]
fn fresh_store_has_no_credential() {
    let store = SessionStore::new();
    assert_eq!(store.get(), None);
    assert!(!store.is_authenticated());
}

#[test]
fn set_then_get_round_trips() {
    let store = SessionStore::new();
    store.set("tok-123");
    assert_eq!(store.get(), Some("tok-123".to_owned()));
    assert!(store.is_authenticated());
}

#[test]
fn set_replaces_previous_credential() {
    let store = SessionStore::new();
    store.set("first");
    store.set("second");
    assert_eq!(store.get(), Some("second".to_owned()));
}

#[test]
fn clear_removes_credential() {
    let store = SessionStore::new();
    store.set("tok-123");
    store.clear();
    assert_eq!(store.get(), None);
    assert!(!store.is_authenticated());
}

#[test]
fn clones_share_the_same_backing_store() {
    let store = SessionStore::new();
    let alias = store.clone();
    store.set("shared");
    assert_eq!(alias.get(), Some("shared".to_owned()));
    alias.clear();
    assert_eq!(store.get(), None);
}

#[test]
fn empty_credential_is_not_authenticated() {
    let store = SessionStore::new();
    store.set("");
    assert!(!store.is_authenticated());
}
