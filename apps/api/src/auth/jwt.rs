// JWT token creation and verification
// Tokens are HS256-signed and carry the caller identity in `sub`

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// JWT claims structure
///
/// # Fields
/// * `sub` - Subject (caller identity)
/// * `exp` - Expiry time (seconds since epoch)
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
}

/// Creates a token for `subject` that expires after 8 hours
///
/// Tokens are normally issued by the identity provider in front of this
/// service; this is used by local tooling and tests.
///
/// # Example
/// ```
/// use items_api::auth::jwt::{create_token, verify_token};
///
/// let token = create_token("gardener", "your-secret-key").expect("valid token");
/// let claims = verify_token(&token, "your-secret-key").expect("valid token");
/// assert_eq!(claims.sub, "gardener");
/// ```
pub fn create_token(subject: &str, secret: &str) -> Result<String, String> {
    let expiry = Utc::now() + Duration::hours(8);
    let claims = Claims {
        sub: subject.to_string(),
        exp: expiry.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .map_err(|e| e.to_string())
}

/// Verifies and decodes a JWT token
///
/// # Returns
/// * `Ok(Claims)` - The decoded claims if token is valid
/// * `Err(String)` - If token is invalid or expired
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, String> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| e.to_string())
}
