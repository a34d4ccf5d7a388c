use super::*;

#[test]
fn push_appends_in_order() {
    let mut state = NotifyState::default();
    state.push(ToastLevel::Success, "saved".to_owned());
    state.push(ToastLevel::Error, "failed".to_owned());
    assert_eq!(state.toasts.len(), 2);
    assert_eq!(state.toasts[0].message, "saved");
    assert_eq!(state.toasts[0].level, ToastLevel::Success);
    assert_eq!(state.toasts[1].message, "failed");
    assert_eq!(state.toasts[1].level, ToastLevel::Error);
}

#[test]
fn push_assigns_unique_ids() {
    let mut state = NotifyState::default();
    let a = state.push(ToastLevel::Success, "one".to_owned());
    let b = state.push(ToastLevel::Success, "two".to_owned());
    assert_ne!(a, b);
}

#[test]
fn dismiss_removes_only_the_matching_toast() {
    let mut state = NotifyState::default();
    let a = state.push(ToastLevel::Success, "one".to_owned());
    state.push(ToastLevel::Error, "two".to_owned());
    state.dismiss(&a);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].message, "two");
}

#[test]
fn dismiss_of_unknown_id_is_a_no_op() {
    let mut state = NotifyState::default();
    state.push(ToastLevel::Success, "one".to_owned());
    state.dismiss("missing");
    assert_eq!(state.toasts.len(), 1);
}
