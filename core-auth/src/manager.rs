//! # Token Manager
//!
//! Hands out a valid bearer token for the run, re-exchanging the credential
//! when the cached token is missing or about to lapse. The importer runs
//! strictly sequentially, so the cache is a plain async mutex with no
//! contention beyond consecutive calls.

use crate::error::Result;
use crate::exchanger::TokenExchanger;
use crate::types::BearerToken;
use tokio::sync::Mutex;
use tracing::debug;

/// Buffer time before token expiration to trigger re-acquisition (5 minutes)
const TOKEN_REFRESH_BUFFER_SECS: i64 = 300;

/// Caching token source backed by a [`TokenExchanger`].
pub struct TokenManager {
    exchanger: TokenExchanger,
    cached: Mutex<Option<BearerToken>>,
}

impl TokenManager {
    pub fn new(exchanger: TokenExchanger) -> Self {
        Self {
            exchanger,
            cached: Mutex::new(None),
        }
    }

    /// Returns a raw access token suitable for an `Authorization: Bearer`
    /// header, exchanging the credential first if no fresh token is cached.
    pub async fn access_token(&self) -> Result<String> {
        let mut cached = self.cached.lock().await;

        if let Some(token) = cached.as_ref() {
            if !token.is_expired_with_buffer(TOKEN_REFRESH_BUFFER_SECS) {
                return Ok(token.access_token.clone());
            }
            debug!("Cached access token is stale, re-exchanging");
        }

        let token = self.exchanger.exchange().await?;
        let access_token = token.access_token.clone();
        *cached = Some(token);
        Ok(access_token)
    }
}
