use jsonwebtoken::{decode, DecodingKey, Validation};

use crate::auth::claims::AuthClaims;
use crate::state::security_config::SecurityConfig;
use crate::AppError;

/// Audience value the identity provider stamps on user tokens.
pub const EXPECTED_AUDIENCE: &str = "authenticated";

/// Verify a bearer token locally and return its claims.
///
/// Verification never contacts the issuing authority: signature, expiry and
/// audience are all checked against process-local configuration.
///
/// Errors:
/// - Empty configured secret → `AppError::Config` (500, not a silent bypass)
/// - Expired token → `AppError::UnauthorizedExpiredJwt`
/// - Audience mismatch → `AppError::UnauthorizedInvalidAudience`
/// - Anything else (bad signature, malformed structure, missing claim
///   fields even under a valid signature) → `AppError::UnauthorizedInvalidJwt`
pub fn verify_access_token(token: &str, security: &SecurityConfig) -> Result<AuthClaims, AppError> {
    if security.jwt_secret.is_empty() {
        return Err(AppError::config(
            "BACKEND_JWT_SECRET is not configured".to_string(),
        ));
    }

    // Default Validation already checks exp; pin algorithm to configured
    // algorithm so the token header can never negotiate a weaker one.
    let mut validation = Validation::new(security.algorithm);
    validation.set_audience(&[EXPECTED_AUDIENCE]);

    decode::<AuthClaims>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::unauthorized_expired_jwt(),
        jsonwebtoken::errors::ErrorKind::InvalidAudience => {
            AppError::unauthorized_invalid_audience()
        }
        _ => AppError::unauthorized_invalid_jwt(),
    })
}
