//! Identity claims carried by externally-issued access tokens.

use serde::{Deserialize, Serialize};

/// Claims decoded from a verified access token.
///
/// Tokens are minted by the external identity provider, never by this
/// service. Every field is required: a validly-signed token missing any of
/// them is rejected during verification rather than trusted as a partial
/// identity.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AuthClaims {
    /// Stable external user identifier
    pub sub: String,
    pub email: String,
    /// Authorization tier assigned by the identity provider
    pub role: String,
    /// Must equal [`crate::auth::EXPECTED_AUDIENCE`]
    pub aud: String,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}
