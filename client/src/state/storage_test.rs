use super::*;

#[test]
fn memory_storage_set_get_remove() {
    let store = MemoryStorage::new();
    assert_eq!(store.get("k"), None);
    store.set("k", "v").unwrap();
    assert_eq!(store.get("k").as_deref(), Some("v"));
    store.remove("k");
    assert_eq!(store.get("k"), None);
}

#[test]
fn memory_storage_clones_share_entries() {
    let a = MemoryStorage::new();
    let b = a.clone();
    a.set("shared", "1").unwrap();
    assert_eq!(b.get("shared").as_deref(), Some("1"));
    assert_eq!(b.len(), 1);
}

#[test]
fn memory_storage_with_entries_prepopulates() {
    let store = MemoryStorage::with_entries([("a", "1"), ("b", "2")]);
    assert_eq!(store.len(), 2);
    assert_eq!(store.get("b").as_deref(), Some("2"));
}

#[test]
fn memory_storage_remove_absent_key_is_noop() {
    let store = MemoryStorage::new();
    store.remove("missing");
    assert!(store.is_empty());
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_storage_reads_empty_and_rejects_writes_off_browser() {
    let store = BrowserStorage;
    assert_eq!(store.get("boardgame_token"), None);
    assert_eq!(store.set("boardgame_token", "t"), Err(StorageError::Unavailable));
    store.remove("boardgame_token");
}
