//! HTTP client for the upstream ERP REST API.
//!
//! One client instance is shared across handlers. Authenticated calls take
//! the session's bearer token per request - the shell never holds long-lived
//! credentials of its own. Every response funnels through one status-mapping
//! helper so the error taxonomy stays uniform across endpoints.

use std::sync::Arc;

use moka::future::Cache;
use reqwest::header::AUTHORIZATION;
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

use meridian_core::Department;

use crate::config::ErpApiConfig;

use super::error::{ErpError, FieldErrors};

/// Time-to-live for the department list cache.
const DEPARTMENT_CACHE_TTL: std::time::Duration = std::time::Duration::from_secs(60);

/// Upstream ERP API client.
///
/// Cheap to clone; all state lives behind an `Arc`.
#[derive(Clone)]
pub struct ErpClient {
    inner: Arc<ErpClientInner>,
}

pub(super) struct ErpClientInner {
    pub(super) client: reqwest::Client,
    pub(super) base_url: String,
    /// Department list cache - the list changes rarely and is fetched on
    /// most navigation renders.
    pub(super) departments: Cache<(), Arc<Vec<Department>>>,
}

impl ErpClient {
    /// Create a new client from configuration.
    ///
    /// # Errors
    ///
    /// Returns the underlying `reqwest` error if the HTTP client cannot be
    /// constructed (invalid TLS backend, for example).
    pub fn new(config: &ErpApiConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            inner: Arc::new(ErpClientInner {
                client,
                base_url: config.base_url.as_str().trim_end_matches('/').to_owned(),
                departments: Cache::builder()
                    .time_to_live(DEPARTMENT_CACHE_TTL)
                    .max_capacity(1)
                    .build(),
            }),
        })
    }

    pub(super) fn inner(&self) -> &ErpClientInner {
        &self.inner
    }

    /// Build the absolute URL for an API path.
    pub(super) fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.inner.base_url, path.trim_start_matches('/'))
    }

    /// GET a JSON resource with bearer authentication.
    pub(super) async fn get_json<T: DeserializeOwned>(
        &self,
        token: &str,
        path: &str,
    ) -> Result<T, ErpError> {
        let response = self
            .inner
            .client
            .get(self.endpoint(path))
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .send()
            .await?;

        Self::decode_response(response).await
    }

    /// POST a JSON body without authentication (credential exchange).
    pub(super) async fn post_json_unauthenticated<B: serde::Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ErpError> {
        let response = self
            .inner
            .client
            .post(self.endpoint(path))
            .json(body)
            .send()
            .await?;

        Self::decode_response(response).await
    }

    /// Map a response to the error taxonomy, decoding the body on success.
    async fn decode_response<T: DeserializeOwned>(response: Response) -> Result<T, ErpError> {
        match response.status() {
            status if status.is_success() => {
                let bytes = response.bytes().await?;
                serde_json::from_slice(&bytes).map_err(|e| ErpError::Decode(e.to_string()))
            }
            StatusCode::UNAUTHORIZED => Err(ErpError::Unauthorized),
            StatusCode::FORBIDDEN => Err(ErpError::Forbidden),
            StatusCode::NOT_FOUND => Err(ErpError::NotFound),
            StatusCode::BAD_REQUEST => {
                // Field errors are best-effort: a 400 with an unreadable
                // body still reports as a validation failure.
                let fields = response.json::<FieldErrors>().await.unwrap_or_default();
                Err(ErpError::Validation(fields))
            }
            status => Err(ErpError::UnexpectedStatus(status.as_u16())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn config(base: &str) -> ErpApiConfig {
        ErpApiConfig {
            base_url: base.parse().expect("valid url"),
            timeout: Duration::from_secs(5),
        }
    }

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let client = ErpClient::new(&config("http://erp.internal/api/")).expect("client");
        assert_eq!(
            client.endpoint("/users/me/"),
            "http://erp.internal/api/users/me/"
        );
        assert_eq!(
            client.endpoint("hr/departments/"),
            "http://erp.internal/api/hr/departments/"
        );
    }
}
