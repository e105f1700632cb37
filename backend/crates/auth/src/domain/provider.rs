//! Authentication Provider Contract
//!
//! A named, pluggable provider turns submitted credentials into an identity
//! (or rejects them). The session issuer only talks to this trait; the
//! credentials provider in the application layer is the single registered
//! implementation.

use crate::error::AuthResult;

/// Credentials submitted on sign-in
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Identity resolved by a provider on successful authorization
///
/// The identifier is a provider-scoped string, not necessarily a UUID
/// (dev test accounts use the email address itself). The role is carried
/// as the raw claim string; normalization happens at every session read.
#[derive(Debug, Clone)]
pub struct AuthIdentity {
    pub user_id: String,
    pub email: String,
    pub name: String,
    pub role: String,
    pub is_active: bool,
}

/// Authentication provider trait
///
/// `authorize` returns `Ok(None)` for every rejection: wrong password,
/// unknown user, or a lookup failure (fail-closed). Only infrastructure
/// that is unrelated to the credential check may surface as `Err`.
#[trait_variant::make(AuthProvider: Send)]
pub trait LocalAuthProvider {
    /// Provider name (e.g. "credentials")
    fn name(&self) -> &'static str;

    /// Validate credentials and resolve the identity
    async fn authorize(&self, credentials: Credentials) -> AuthResult<Option<AuthIdentity>>;
}
