use super::*;

fn doc(id: &str, filename: &str) -> SourceDocument {
    SourceDocument {
        id: id.to_owned(),
        filename: filename.to_owned(),
        url: None,
        created_at: None,
    }
}

// =============================================================
// Fetch sequencing
// =============================================================

#[test]
fn begin_fetch_sets_loading_and_increments_sequence() {
    let mut list = SourceList::default();
    let first = list.begin_fetch();
    let second = list.begin_fetch();
    assert!(list.loading);
    assert!(second > first);
}

#[test]
fn apply_fetch_stores_items_and_clears_loading() {
    let mut list = SourceList::default();
    let seq = list.begin_fetch();
    assert!(list.apply_fetch(seq, vec![doc("1", "a.pdf")]));
    assert!(!list.loading);
    assert_eq!(list.items.len(), 1);
}

#[test]
fn stale_fetch_result_is_discarded() {
    let mut list = SourceList::default();
    let old = list.begin_fetch();
    let new = list.begin_fetch();

    // Newer response lands first; the straggler must not clobber it.
    assert!(list.apply_fetch(new, vec![doc("2", "new.pdf")]));
    assert!(!list.apply_fetch(old, vec![doc("1", "old.pdf")]));
    assert_eq!(list.items.len(), 1);
    assert_eq!(list.items[0].filename, "new.pdf");
}

#[test]
fn loading_stays_set_until_the_latest_fetch_resolves() {
    let mut list = SourceList::default();
    let old = list.begin_fetch();
    let new = list.begin_fetch();

    assert!(list.apply_fetch(old, vec![doc("1", "old.pdf")]));
    assert!(list.loading);
    assert!(list.apply_fetch(new, vec![doc("2", "new.pdf")]));
    assert!(!list.loading);
}

#[test]
fn failed_latest_fetch_clears_loading() {
    let mut list = SourceList::default();
    let seq = list.begin_fetch();
    list.fetch_failed(seq);
    assert!(!list.loading);
}

#[test]
fn failed_stale_fetch_keeps_loading_for_the_newer_one() {
    let mut list = SourceList::default();
    let old = list.begin_fetch();
    let _new = list.begin_fetch();
    list.fetch_failed(old);
    assert!(list.loading);
}

// =============================================================
// Deletion markers
// =============================================================

#[test]
fn begin_delete_marks_the_item() {
    let mut list = SourceList::default();
    assert!(list.begin_delete("d1"));
    assert!(list.is_deleting("d1"));
    assert!(!list.is_deleting("d2"));
}

#[test]
fn begin_delete_twice_for_the_same_item_is_refused() {
    let mut list = SourceList::default();
    assert!(list.begin_delete("d1"));
    assert!(!list.begin_delete("d1"));
    assert_eq!(list.deleting_count(), 1);
}

#[test]
fn distinct_items_may_delete_concurrently() {
    let mut list = SourceList::default();
    assert!(list.begin_delete("d1"));
    assert!(list.begin_delete("d2"));
    assert_eq!(list.deleting_count(), 2);
}

#[test]
fn finish_delete_releases_the_marker() {
    let mut list = SourceList::default();
    list.begin_delete("d1");
    list.finish_delete("d1");
    assert!(!list.is_deleting("d1"));
    assert_eq!(list.deleting_count(), 0);
}
