use super::*;

#[test]
fn mask_keeps_the_first_half_visible() {
    assert_eq!(mask_api_key("abcd1234"), "abcd****");
}

#[test]
fn mask_rounds_the_visible_half_up_for_odd_lengths() {
    assert_eq!(mask_api_key("abcde"), "abc**");
}

#[test]
fn mask_of_empty_key_is_empty() {
    assert_eq!(mask_api_key(""), "");
}

#[test]
fn mask_never_leaks_the_tail() {
    let masked = mask_api_key("sk-verysecretvalue");
    assert!(!masked.contains("value"));
    assert!(masked.ends_with('*'));
}
