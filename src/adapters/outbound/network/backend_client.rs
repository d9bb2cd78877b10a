use crate::shared::error::StoreError;
use crate::shared::security::validate_path_component;
use crate::shared::Result;
use reqwest::{Method, RequestBuilder, Response};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Shared HTTP client for the hosted backend
///
/// Every request carries the project's anon key; requests made through a
/// client returned by [`BackendClient::with_access_token`] authenticate as
/// the signed-in user instead. Clones share the connection pool and the
/// closed flag, so closing one handle closes them all.
#[derive(Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
    access_token: Option<String>,
    closed: Arc<AtomicBool>,
}

impl BackendClient {
    /// # Errors
    /// Returns an error if the HTTP client cannot be built
    pub fn new(base_url: &str, anon_key: &str, timeout: Duration) -> Result<Self> {
        let user_agent = format!("intech-storefront/{}", env!("CARGO_PKG_VERSION"));
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
            access_token: None,
            closed: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Handle that sends `token` as the bearer instead of the anon key
    pub fn with_access_token(&self, token: impl Into<String>) -> Self {
        Self {
            access_token: Some(token.into()),
            ..self.clone()
        }
    }

    /// Stops the client; every later request fails with `ClientClosed`
    pub fn close(&self) {
        if !self.closed.swap(true, Ordering::SeqCst) {
            debug!("Backend client closed");
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Starts a request to `path` (which must begin with `/`) with auth headers set
    ///
    /// # Errors
    /// Returns `StoreError::ClientClosed` once the client has been closed
    pub fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        self.request_as(method, path, self.access_token.as_deref())
    }

    /// Like [`Self::request`], authenticating with an explicit bearer token
    pub fn request_as(
        &self,
        method: Method,
        path: &str,
        bearer: Option<&str>,
    ) -> Result<RequestBuilder> {
        if self.is_closed() {
            return Err(StoreError::ClientClosed.into());
        }

        let url = format!("{}{}", self.base_url, path);
        debug!(%method, %url, "backend request");

        Ok(self
            .http
            .request(method, url)
            .header("apikey", &self.anon_key)
            .bearer_auth(bearer.unwrap_or(&self.anon_key)))
    }

    /// Sends a request and turns any non-success status into `StoreError::Backend`
    ///
    /// # Errors
    /// Returns an error on transport failure or a non-success status
    pub async fn send(&self, operation: &str, request: RequestBuilder) -> Result<Response> {
        let response = self.dispatch(operation, request).await?;
        if response.status().is_success() {
            return Ok(response);
        }

        Err(Self::failure(operation, response).await)
    }

    /// Sends a request and returns the response whatever its status
    ///
    /// # Errors
    /// Returns `StoreError::Backend` with status 0 if no response arrives
    pub async fn dispatch(&self, operation: &str, request: RequestBuilder) -> Result<Response> {
        request.send().await.map_err(|e| {
            StoreError::Backend {
                operation: operation.to_string(),
                status: 0,
                message: e.to_string(),
            }
            .into()
        })
    }

    /// Reads the body of a rejected response into `StoreError::Backend`
    pub async fn failure(operation: &str, response: Response) -> anyhow::Error {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = error_message(&body).unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unexpected status")
                .to_string()
        });
        warn!(status = status.as_u16(), operation, %message, "backend request failed");

        StoreError::Backend {
            operation: operation.to_string(),
            status: status.as_u16(),
            message,
        }
        .into()
    }
}

/// Validates a path segment and percent-encodes it for use in a URL
pub(crate) fn encode_segment(segment: &str, segment_type: &str) -> Result<String> {
    validate_path_component(segment, segment_type)?;
    Ok(urlencoding::encode(segment).into_owned())
}

/// Pulls the human readable part out of a backend error body
///
/// The REST, storage and auth services each use a different key.
pub(crate) fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["message", "error_description", "msg", "error"]
        .iter()
        .find_map(|key| value.get(*key).and_then(|v| v.as_str()))
        .map(str::to_string)
}
