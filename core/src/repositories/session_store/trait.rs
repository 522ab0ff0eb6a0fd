//! Key-value store trait for client session state.
//!
//! The browser front end keeps its auth flags in ambient storage; here that
//! storage is an injected collaborator so the session logic can run against
//! any backing store.

use async_trait::async_trait;

use crate::errors::DomainError;

/// Repository trait for string key-value session storage
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use li_core::repositories::KeyValueStore;
/// use li_core::errors::DomainError;
///
/// struct NullStore;
///
/// #[async_trait]
/// impl KeyValueStore for NullStore {
///     async fn get(&self, _key: &str) -> Result<Option<String>, DomainError> {
///         Ok(None)
///     }
///     async fn set(&self, _key: &str, _value: &str) -> Result<(), DomainError> {
///         Ok(())
///     }
///     async fn remove(&self, _key: &str) -> Result<bool, DomainError> {
///         Ok(false)
///     }
/// }
/// ```
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read a value
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError>;

    /// Write a value, replacing any previous one
    async fn set(&self, key: &str, value: &str) -> Result<(), DomainError>;

    /// Remove a value; returns whether it existed
    async fn remove(&self, key: &str) -> Result<bool, DomainError>;
}
