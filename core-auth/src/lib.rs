//! # Authentication Module
//!
//! Service-account authentication for the importer.
//!
//! ## Overview
//!
//! This module turns a service-account credential (issuer email + PEM
//! private key) into short-lived bearer tokens via the provider's OAuth 2.0
//! JWT-bearer grant. Tokens are cached for the run and transparently
//! re-acquired shortly before they expire.
//!
//! ## Features
//!
//! - RS256-signed assertions with the standard claim set
//! - Form-encoded exchange against the token endpoint
//! - Expiry-aware token caching with automatic re-acquisition
//! - Redacted `Debug` output for credentials and tokens

pub mod assertion;
pub mod error;
pub mod exchanger;
pub mod manager;
pub mod types;

pub use assertion::{build_assertion, DRIVE_READONLY_SCOPE};
pub use error::{AuthError, Result};
pub use exchanger::{TokenExchanger, TOKEN_URL};
pub use manager::TokenManager;
pub use types::{BearerToken, ServiceAccountCredentials};
