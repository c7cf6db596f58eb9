//! Access and refresh tokens.
//!
//! Access tokens are short-lived HS256 JWTs carrying [`Claims`] and are
//! issued/verified through methods on [`JwtConfig`]. Refresh tokens are
//! opaque random strings; the database only ever sees their SHA-256
//! digest, so leaking the sessions table does not leak usable tokens.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use npc_core::types::DbId;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::config::JwtConfig;

/// Claims carried by every access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// The user's database id.
    pub sub: DbId,
    /// `"admin"` or `"user"`.
    pub role: String,
    /// Expiry, Unix seconds.
    pub exp: i64,
    /// Issued at, Unix seconds.
    pub iat: i64,
    /// Per-token UUID.
    pub jti: String,
}

impl JwtConfig {
    /// Sign a fresh access token for the given user and role.
    pub fn issue_access_token(
        &self,
        user_id: DbId,
        role: &str,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let iat = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: user_id,
            role: role.to_string(),
            exp: iat + self.access_token_expiry_mins * 60,
            iat,
            jti: Uuid::new_v4().to_string(),
        };

        let key = EncodingKey::from_secret(self.secret.as_bytes());
        encode(&Header::default(), &claims, &key)
    }

    /// Check signature and expiry, returning the embedded [`Claims`].
    pub fn verify_access_token(
        &self,
        token: &str,
    ) -> Result<Claims, jsonwebtoken::errors::Error> {
        let key = DecodingKey::from_secret(self.secret.as_bytes());
        decode::<Claims>(token, &key, &Validation::default()).map(|data| data.claims)
    }
}

/// Mint an opaque refresh token.
///
/// Returns `(plaintext, sha256_hex)`; the plaintext goes to the client,
/// the digest to the sessions table.
pub fn generate_refresh_token() -> (String, String) {
    let plaintext = Uuid::new_v4().to_string();
    let digest = hash_refresh_token(&plaintext);
    (plaintext, digest)
}

/// SHA-256 hex digest of a refresh token, as stored in `sessions`.
pub fn hash_refresh_token(token: &str) -> String {
    format!("{:x}", Sha256::digest(token.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        }
    }

    #[test]
    fn test_access_token_round_trip() {
        let config = test_config();
        let token = config
            .issue_access_token(42, "admin")
            .expect("token issuance should succeed");

        let claims = config
            .verify_access_token(&token)
            .expect("verification should succeed");
        assert_eq!(claims.sub, 42);
        assert_eq!(claims.role, "admin");
        assert!(claims.exp > claims.iat);
        assert!(!claims.jti.is_empty());
    }

    #[test]
    fn test_expired_token_fails() {
        let config = test_config();

        // Hand-build a token expired well past the default leeway.
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: 1,
            role: "user".to_string(),
            exp: now - 300,
            iat: now - 600,
            jti: Uuid::new_v4().to_string(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .expect("encoding should succeed");

        assert!(config.verify_access_token(&token).is_err());
    }

    #[test]
    fn test_wrong_secret_fails() {
        let config = test_config();
        let token = config
            .issue_access_token(1, "user")
            .expect("token issuance should succeed");

        let other = JwtConfig {
            secret: "a-different-secret-entirely".to_string(),
            ..test_config()
        };
        assert!(other.verify_access_token(&token).is_err());
    }

    #[test]
    fn test_refresh_token_hash_is_stable() {
        let (plaintext, digest) = generate_refresh_token();

        assert_eq!(digest, hash_refresh_token(&plaintext));
        assert_eq!(digest.len(), 64, "SHA-256 hex digest is 64 chars");
    }
}
