//! Typed access to persisted session values

use std::sync::Arc;

use crate::domain::entities::session::{LoginResponse, UserRole};
use crate::errors::DomainResult;
use crate::repositories::session_store::KeyValueStore;

const ACCESS_TOKEN_KEY: &str = "access_token";
const USER_ROLE_KEY: &str = "user_role";
const USER_EMAIL_KEY: &str = "user_email";
const PENDING_EMAIL_KEY: &str = "pending_verification_email";

/// Session values kept in the injected key-value store
pub struct AuthSession<K: KeyValueStore> {
    store: Arc<K>,
}

impl<K: KeyValueStore> Clone for AuthSession<K> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<K: KeyValueStore> AuthSession<K> {
    pub fn new(store: Arc<K>) -> Self {
        Self { store }
    }

    /// Persist a successful login
    pub async fn record_login(&self, response: &LoginResponse) -> DomainResult<()> {
        self.store.set(ACCESS_TOKEN_KEY, &response.access_token).await?;
        self.store.set(USER_ROLE_KEY, response.role.as_str()).await?;
        self.store.set(USER_EMAIL_KEY, &response.email).await?;
        Ok(())
    }

    pub async fn access_token(&self) -> DomainResult<Option<String>> {
        self.store.get(ACCESS_TOKEN_KEY).await
    }

    /// Role of the signed-in user, if any
    pub async fn role(&self) -> DomainResult<Option<UserRole>> {
        let role = self.store.get(USER_ROLE_KEY).await?;
        Ok(role.map(|r| UserRole::from_wire(Some(&r))))
    }

    pub async fn user_email(&self) -> DomainResult<Option<String>> {
        self.store.get(USER_EMAIL_KEY).await
    }

    pub async fn is_authenticated(&self) -> DomainResult<bool> {
        Ok(self.access_token().await?.is_some())
    }

    /// Remember the address awaiting verification
    pub async fn set_pending_verification_email(&self, email: &str) -> DomainResult<()> {
        self.store.set(PENDING_EMAIL_KEY, email).await
    }

    pub async fn pending_verification_email(&self) -> DomainResult<Option<String>> {
        self.store.get(PENDING_EMAIL_KEY).await
    }

    /// Read and forget the pending address (after successful verification)
    pub async fn take_pending_verification_email(&self) -> DomainResult<Option<String>> {
        let email = self.store.get(PENDING_EMAIL_KEY).await?;
        if email.is_some() {
            self.store.remove(PENDING_EMAIL_KEY).await?;
        }
        Ok(email)
    }

    /// Forget everything about the signed-in user
    pub async fn logout(&self) -> DomainResult<()> {
        for key in [ACCESS_TOKEN_KEY, USER_ROLE_KEY, USER_EMAIL_KEY] {
            self.store.remove(key).await?;
        }
        Ok(())
    }
}
