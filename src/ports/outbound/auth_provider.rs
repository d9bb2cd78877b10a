use crate::catalog::domain::{AuthUser, Credentials, Session};
use crate::shared::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// AuthProvider port for the backend's authentication service
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Signs in with email and password
    ///
    /// # Errors
    /// Returns `StoreError::AuthenticationFailed` if the credentials are
    /// rejected, or a transport error if the provider is unreachable
    async fn sign_in_with_password(&self, credentials: &Credentials) -> Result<Session>;

    /// Resolves the user an access token belongs to
    ///
    /// # Errors
    /// Returns `StoreError::AuthenticationFailed` if the token is invalid or expired
    async fn user_for_token(&self, access_token: &str) -> Result<AuthUser>;
}

#[async_trait]
impl<T: AuthProvider + ?Sized> AuthProvider for Arc<T> {
    async fn sign_in_with_password(&self, credentials: &Credentials) -> Result<Session> {
        (**self).sign_in_with_password(credentials).await
    }

    async fn user_for_token(&self, access_token: &str) -> Result<AuthUser> {
        (**self).user_for_token(access_token).await
    }
}
