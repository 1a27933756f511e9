//! Token exchange against the OAuth endpoint (JWT-bearer grant).

use crate::assertion::build_assertion;
use crate::error::{AuthError, Result};
use crate::types::{BearerToken, ServiceAccountCredentials};
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, instrument, warn};

/// Google's OAuth 2.0 token endpoint.
pub const TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

const JWT_BEARER_GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Exchanges a signed service-account assertion for a bearer token.
///
/// One exchange per call; caching and re-acquisition live in
/// [`TokenManager`](crate::manager::TokenManager).
pub struct TokenExchanger {
    http: reqwest::Client,
    credentials: ServiceAccountCredentials,
}

impl TokenExchanger {
    pub fn new(http: reqwest::Client, credentials: ServiceAccountCredentials) -> Self {
        Self { http, credentials }
    }

    /// Signs a fresh assertion and posts it to the token endpoint.
    #[instrument(skip(self))]
    pub async fn exchange(&self) -> Result<BearerToken> {
        let assertion = build_assertion(&self.credentials, TOKEN_URL)?;

        let mut params = HashMap::new();
        params.insert("grant_type", JWT_BEARER_GRANT_TYPE);
        params.insert("assertion", assertion.as_str());

        debug!("Exchanging signed assertion for an access token");

        let response = self
            .http
            .post(TOKEN_URL)
            .form(&params)
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error response".to_string());

            warn!(
                status = status.as_u16(),
                error = %error_body,
                "Token exchange failed"
            );

            return Err(AuthError::TokenEndpoint {
                status: status.as_u16(),
                body: error_body,
            });
        }

        let token_response: TokenResponse = response
            .json()
            .await
            .map_err(|e| AuthError::MalformedResponse(e.to_string()))?;

        tracing::info!(
            "Acquired access token (expires in {}s)",
            token_response.expires_in
        );

        Ok(BearerToken::new(
            token_response.access_token,
            token_response.expires_in,
        ))
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default = "default_expires_in")]
    expires_in: i64,
    #[serde(default)]
    #[allow(dead_code)]
    token_type: String,
}

// Google's responses always carry expires_in, but the grant defines a
// one-hour default if the field is omitted.
fn default_expires_in() -> i64 {
    3600
}
