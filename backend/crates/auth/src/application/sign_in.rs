//! Sign In Use Case
//!
//! The session issuer: delegates the credential check to the registered
//! authentication provider and, on success, mints the signed session token.
//! The returned session view is produced by reading the freshly minted
//! token back, so it goes through the same role normalization as every
//! other read.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::session::{CheckSessionUseCase, SessionUser};
use crate::application::token::TokenIssuer;
use crate::domain::provider::{AuthProvider, Credentials};
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

/// Sign in output
#[derive(Debug)]
pub struct SignInOutput {
    /// Signed session token for the cookie / Authorization header
    pub token: String,
    /// Normalized session view
    pub session: SessionUser,
}

/// Sign in use case
pub struct SignInUseCase<P>
where
    P: AuthProvider + Send + Sync,
{
    provider: Arc<P>,
    config: Arc<AuthConfig>,
}

impl<P> SignInUseCase<P>
where
    P: AuthProvider + Send + Sync,
{
    pub fn new(provider: Arc<P>, config: Arc<AuthConfig>) -> Self {
        Self { provider, config }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        let credentials = Credentials {
            email: input.email,
            password: input.password,
        };

        let identity = self
            .provider
            .authorize(credentials)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let token = TokenIssuer::new(&self.config).sign(&identity)?;
        let session = CheckSessionUseCase::new(self.config.clone()).resolve(&token)?;

        tracing::info!(
            user_id = %session.user_id,
            provider = self.provider.name(),
            "User signed in"
        );

        Ok(SignInOutput { token, session })
    }
}
