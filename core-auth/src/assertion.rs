//! Signed JWT assertions for the service-account grant.

use crate::error::{AuthError, Result};
use crate::types::ServiceAccountCredentials;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::Serialize;

/// OAuth scope granting read-only Drive access.
pub const DRIVE_READONLY_SCOPE: &str = "https://www.googleapis.com/auth/drive.readonly";

/// Assertion validity window required by the token endpoint.
const ASSERTION_LIFETIME_SECS: i64 = 3600;

#[derive(Debug, Serialize)]
struct AssertionClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

/// Builds and signs the RS256 assertion presented to the token endpoint.
///
/// `audience` is the token endpoint URL the assertion will be posted to.
///
/// # Errors
///
/// [`AuthError::InvalidKey`] if the PEM private key cannot be parsed,
/// [`AuthError::Signing`] if signing itself fails.
pub fn build_assertion(credentials: &ServiceAccountCredentials, audience: &str) -> Result<String> {
    let key = EncodingKey::from_rsa_pem(credentials.private_key.as_bytes())
        .map_err(|e| AuthError::InvalidKey(e.to_string()))?;

    let iat = chrono::Utc::now().timestamp();
    let claims = AssertionClaims {
        iss: &credentials.client_email,
        scope: DRIVE_READONLY_SCOPE,
        aud: audience,
        iat,
        exp: iat + ASSERTION_LIFETIME_SECS,
    };

    encode(&Header::new(Algorithm::RS256), &claims, &key)
        .map_err(|e| AuthError::Signing(e.to_string()))
}
