use jsonwebtoken::Algorithm;

/// Configuration for JWT security settings
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// JWT secret key for verifying token signatures. An empty secret is a
    /// configuration fault surfaced on every verification attempt.
    pub jwt_secret: Vec<u8>,
    /// JWT algorithm to use (fixed to HS256, never negotiated per request)
    pub algorithm: Algorithm,
}

impl SecurityConfig {
    /// Create a new SecurityConfig with the given JWT secret
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
        }
    }

    /// Read the signing secret from `BACKEND_JWT_SECRET`.
    ///
    /// A missing secret does not abort startup: verification then fails with
    /// a 500-class configuration error instead of silently accepting tokens.
    pub fn from_env() -> Self {
        let secret = std::env::var("BACKEND_JWT_SECRET").unwrap_or_default();
        if secret.is_empty() {
            tracing::warn!("BACKEND_JWT_SECRET is not set; token verification will fail");
        }
        Self::new(secret.into_bytes())
    }
}
