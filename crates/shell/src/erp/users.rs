//! Auth and user endpoints.

use serde::Serialize;
use tracing::instrument;

use meridian_core::UserProfile;

use super::client::ErpClient;
use super::error::ErpError;
use super::types::{TokenResponse, UserDto};

/// Credential payload for `POST /auth/token/`.
#[derive(Serialize)]
struct TokenRequest<'a> {
    username: &'a str,
    password: &'a str,
}

impl ErpClient {
    /// Exchange credentials for an opaque bearer token.
    ///
    /// # Errors
    ///
    /// `ErpError::Unauthorized` on bad credentials, `ErpError::Validation`
    /// on malformed input, `ErpError::Network` when the upstream is down.
    #[instrument(skip(self, password))]
    pub async fn login(&self, username: &str, password: &str) -> Result<String, ErpError> {
        let response: TokenResponse = self
            .post_json_unauthenticated("auth/token/", &TokenRequest { username, password })
            .await?;
        Ok(response.token)
    }

    /// Fetch the authenticated user's profile from `GET /users/me/`.
    ///
    /// The wire shape's duplicated department fields are resolved during
    /// conversion; callers only ever see the coalesced profile.
    ///
    /// # Errors
    ///
    /// `ErpError::Unauthorized` when the token has expired.
    #[instrument(skip(self, token))]
    pub async fn current_user(&self, token: &str) -> Result<UserProfile, ErpError> {
        let dto: UserDto = self.get_json(token, "users/me/").await?;
        Ok(dto.into())
    }
}
