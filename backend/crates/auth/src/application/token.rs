//! Session Token Issuer
//!
//! Mints and verifies the stateless signed session token (JWT, HS256).
//! The token is derived state: nothing is stored server-side, so there is
//! no revocation list and a token stays valid until its fixed expiry.

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::application::config::AuthConfig;
use crate::domain::provider::AuthIdentity;
use crate::error::{AuthError, AuthResult};

/// Claims carried by the session token
///
/// `role` is the raw claim string exactly as minted; normalization is the
/// reader's job (see [`crate::application::session`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// User identifier
    pub sub: String,
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Role claim (raw string)
    pub role: String,
    /// Active flag
    pub is_active: bool,
    /// Issued-at (Unix seconds)
    pub iat: usize,
    /// Expiry (Unix seconds)
    pub exp: usize,
}

/// Session token issuer
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_secs: usize,
}

impl TokenIssuer {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding: EncodingKey::from_secret(&config.session_secret),
            decoding: DecodingKey::from_secret(&config.session_secret),
            ttl_secs: config.session_ttl.as_secs() as usize,
        }
    }

    /// Mint a signed session token for an authorized identity
    pub fn sign(&self, identity: &AuthIdentity) -> AuthResult<String> {
        let iat = Utc::now().timestamp() as usize;

        let claims = SessionClaims {
            sub: identity.user_id.clone(),
            name: identity.name.clone(),
            email: identity.email.clone(),
            role: identity.role.clone(),
            is_active: identity.is_active,
            iat,
            exp: iat + self.ttl_secs,
        };

        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| AuthError::Internal(format!("Failed to sign session token: {e}")))
    }

    /// Verify signature and expiry, returning the raw claims
    pub fn verify(&self, token: &str) -> AuthResult<SessionClaims> {
        decode::<SessionClaims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|_| AuthError::SessionInvalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AuthConfig {
        AuthConfig::new(b"unit-test-signing-secret".to_vec())
    }

    fn identity() -> AuthIdentity {
        AuthIdentity {
            user_id: "8f2b7d9a-13aa-4a08-9e6d-0f5a8f1c2d3e".to_string(),
            email: "seller1@blocal.bt".to_string(),
            name: "Test Seller".to_string(),
            role: "SELLER".to_string(),
            is_active: true,
        }
    }

    #[test]
    fn test_sign_and_verify_roundtrip() {
        let issuer = TokenIssuer::new(&config());

        let token = issuer.sign(&identity()).unwrap();
        let claims = issuer.verify(&token).unwrap();

        assert_eq!(claims.sub, identity().user_id);
        assert_eq!(claims.email, "seller1@blocal.bt");
        assert_eq!(claims.role, "SELLER");
        assert!(claims.is_active);
        assert_eq!(claims.exp, claims.iat + 30 * 24 * 60 * 60);
    }

    #[test]
    fn test_role_claim_is_carried_verbatim() {
        // Minting does not normalize; the reader does.
        let issuer = TokenIssuer::new(&config());
        let mut id = identity();
        id.role = "  seller ".to_string();

        let token = issuer.sign(&id).unwrap();
        assert_eq!(issuer.verify(&token).unwrap().role, "  seller ");
    }

    #[test]
    fn test_tampered_token_rejected() {
        let issuer = TokenIssuer::new(&config());
        let token = issuer.sign(&identity()).unwrap();

        let mut tampered = token.clone();
        tampered.pop();
        assert!(matches!(
            issuer.verify(&tampered),
            Err(AuthError::SessionInvalid)
        ));

        assert!(matches!(
            issuer.verify("not-a-token"),
            Err(AuthError::SessionInvalid)
        ));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = TokenIssuer::new(&config()).sign(&identity()).unwrap();

        let other = TokenIssuer::new(&AuthConfig::new(b"another-secret".to_vec()));
        assert!(matches!(
            other.verify(&token),
            Err(AuthError::SessionInvalid)
        ));
    }

    #[test]
    fn test_expired_token_rejected() {
        let cfg = config();
        let now = Utc::now().timestamp() as usize;

        // Hand-craft claims whose validity window closed an hour ago
        // (well past the default verification leeway).
        let claims = SessionClaims {
            sub: "expired".to_string(),
            name: "Expired".to_string(),
            email: "expired@blocal.bt".to_string(),
            role: "BUYER".to_string(),
            is_active: true,
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(&cfg.session_secret),
        )
        .unwrap();

        let issuer = TokenIssuer::new(&cfg);
        assert!(matches!(
            issuer.verify(&token),
            Err(AuthError::SessionInvalid)
        ));
    }
}
