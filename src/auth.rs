use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::config::Config;

// The catalog issues a single synthetic identity; there are no user accounts.
const STATIC_SUBJECT: &str = "usuario-123";
const STATIC_EMAIL: &str = "admin@ucn.cl";
const STATIC_ROLE: &str = "admin";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub email: String,
    pub role: String,
    pub iat: i64,
    pub exp: i64,
}

/// Signs and verifies the bearer tokens that gate every catalog operation.
///
/// HS256 against a shared secret. `issue_static_token` always mints the same
/// fixed identity; `verify_token` checks signature and expiration only.
pub struct AuthManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_ttl_days: i64,
}

impl AuthManager {
    pub fn new(config: &Config) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            token_ttl_days: config.jwt_expires_in_days,
        }
    }

    /// Creates a signed token for the fixed catalog identity.
    pub fn issue_static_token(&self) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now();
        let claims = Claims {
            sub: STATIC_SUBJECT.to_string(),
            email: STATIC_EMAIL.to_string(),
            role: STATIC_ROLE.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::days(self.token_ttl_days)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
    }

    /// Verifies signature and expiration, returning the decoded claims.
    pub fn verify_token(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let validation = Validation::new(Algorithm::HS256);
        let data = decode::<Claims>(token, &self.decoding_key, &validation)?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(secret: &str, ttl_days: i64) -> Config {
        Config {
            port: 0,
            database_url: String::new(),
            jwt_secret: secret.to_string(),
            jwt_expires_in_days: ttl_days,
            db_max_connections: 1,
            rust_log: "info".to_string(),
        }
    }

    #[test]
    fn issue_and_verify_round_trip() {
        let manager = AuthManager::new(&test_config(
            "test-secret-that-is-long-enough-0123456789",
            60,
        ));

        let token = manager.issue_static_token().unwrap();
        let claims = manager.verify_token(&token).unwrap();

        assert_eq!(claims.sub, "usuario-123");
        assert_eq!(claims.email, "admin@ucn.cl");
        assert_eq!(claims.role, "admin");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn rejects_token_signed_with_different_secret() {
        let issuer = AuthManager::new(&test_config(
            "first-secret-that-is-long-enough-0123456789",
            60,
        ));
        let verifier = AuthManager::new(&test_config(
            "other-secret-that-is-long-enough-0123456789",
            60,
        ));

        let token = issuer.issue_static_token().unwrap();
        assert!(verifier.verify_token(&token).is_err());
    }

    #[test]
    fn rejects_expired_token() {
        let manager = AuthManager::new(&test_config(
            "test-secret-that-is-long-enough-0123456789",
            60,
        ));

        // Craft a token whose exp is well in the past (beyond validation leeway)
        let now = Utc::now();
        let claims = Claims {
            sub: STATIC_SUBJECT.to_string(),
            email: STATIC_EMAIL.to_string(),
            role: STATIC_ROLE.to_string(),
            iat: (now - Duration::days(2)).timestamp(),
            exp: (now - Duration::days(1)).timestamp(),
        };
        let token = encode(&Header::default(), &claims, &manager.encoding_key).unwrap();

        assert!(manager.verify_token(&token).is_err());
    }

    #[test]
    fn rejects_garbage_token() {
        let manager = AuthManager::new(&test_config(
            "test-secret-that-is-long-enough-0123456789",
            60,
        ));

        assert!(manager.verify_token("not-a-jwt").is_err());
    }
}
