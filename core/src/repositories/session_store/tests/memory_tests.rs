//! Tests for the in-memory key-value store

use crate::repositories::session_store::{InMemoryKeyValueStore, KeyValueStore};

#[tokio::test]
async fn test_set_get_remove() {
    let store = InMemoryKeyValueStore::new();

    store.set("access_token", "abc").await.unwrap();
    assert_eq!(store.get("access_token").await.unwrap().as_deref(), Some("abc"));

    assert!(store.remove("access_token").await.unwrap());
    assert!(!store.remove("access_token").await.unwrap());
    assert_eq!(store.get("access_token").await.unwrap(), None);
}

#[tokio::test]
async fn test_set_overwrites() {
    let store = InMemoryKeyValueStore::new();
    store.set("user_role", "user").await.unwrap();
    store.set("user_role", "admin").await.unwrap();

    assert_eq!(store.get("user_role").await.unwrap().as_deref(), Some("admin"));
    assert_eq!(store.len().await, 1);
}

#[tokio::test]
async fn test_clones_share_entries() {
    let store = InMemoryKeyValueStore::new();
    let other = store.clone();

    other.set("pending_verification_email", "ama@example.com").await.unwrap();
    assert!(!store.is_empty().await);
    assert_eq!(
        store.get("pending_verification_email").await.unwrap().as_deref(),
        Some("ama@example.com")
    );
}
