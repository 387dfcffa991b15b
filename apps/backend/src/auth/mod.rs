pub mod claims;
pub mod jwt;

pub use claims::AuthClaims;
pub use jwt::{verify_access_token, EXPECTED_AUDIENCE};
