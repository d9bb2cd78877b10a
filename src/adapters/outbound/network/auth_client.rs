use super::backend_client::{error_message, BackendClient};
use crate::catalog::domain::{AuthUser, Credentials, Session};
use crate::ports::outbound::AuthProvider;
use crate::shared::error::StoreError;
use crate::shared::Result;
use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde::Deserialize;
use serde_json::json;
use tracing::warn;

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    user: AuthUser,
}

/// AuthClient adapter for the backend's password authentication API
pub struct AuthClient {
    client: BackendClient,
}

impl AuthClient {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }

    /// Rejected credentials and expired tokens come back as 400, 401 or 403
    async fn send_auth(
        &self,
        operation: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response> {
        let response = self.client.dispatch(operation, request).await?;

        match response.status() {
            status if status.is_success() => Ok(response),
            status @ (StatusCode::BAD_REQUEST
            | StatusCode::UNAUTHORIZED
            | StatusCode::FORBIDDEN) => {
                let body = response.text().await.unwrap_or_default();
                warn!(
                    status = status.as_u16(),
                    operation,
                    "authentication rejected"
                );
                Err(StoreError::AuthenticationFailed {
                    message: error_message(&body)
                        .unwrap_or_else(|| "Invalid login credentials".to_string()),
                }
                .into())
            }
            _ => Err(BackendClient::failure(operation, response).await),
        }
    }
}

#[async_trait]
impl AuthProvider for AuthClient {
    async fn sign_in_with_password(&self, credentials: &Credentials) -> Result<Session> {
        let request = self
            .client
            .request(Method::POST, "/auth/v1/token?grant_type=password")?
            .json(&json!({
                "email": credentials.email(),
                "password": credentials.password(),
            }));
        let response = self.send_auth("sign in", request).await?;

        let token: TokenResponse = response.json().await?;
        Ok(Session {
            access_token: token.access_token,
            user: token.user,
        })
    }

    async fn user_for_token(&self, access_token: &str) -> Result<AuthUser> {
        let request = self
            .client
            .request_as(Method::GET, "/auth/v1/user", Some(access_token))?;
        let response = self.send_auth("get user", request).await?;

        Ok(response.json().await?)
    }
}
