use super::*;

#[test]
fn display_date_truncates_iso_timestamps() {
    assert_eq!(display_date("2024-11-03T10:15:30.000Z"), "2024-11-03");
}

#[test]
fn display_date_passes_through_short_values() {
    assert_eq!(display_date("yesterday"), "yesterday");
    assert_eq!(display_date(""), "");
}

#[test]
fn display_date_passes_through_non_iso_values() {
    assert_eq!(display_date("03/11/2024 10:15"), "03/11/2024 10:15");
}
