//! Credentials Provider
//!
//! The credential verifier behind the provider contract. Resolves a user
//! record by email and validates the password against the stored Argon2id
//! hash.
//!
//! Lookup is fail-closed: a database error during sign-in is logged and
//! treated as a rejection, never surfaced to the caller as a distinct
//! error kind.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::domain::provider::{AuthIdentity, AuthProvider, Credentials};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;

/// Provider name, as registered with the session issuer
pub const PROVIDER_NAME: &str = "credentials";

/// Built-in accounts for local development and manual testing.
///
/// Only reachable when `AuthConfig::allow_test_accounts` is set, which the
/// release configuration never does.
struct TestAccount {
    email: &'static str,
    password: &'static str,
    name: &'static str,
    role: &'static str,
}

const TEST_ACCOUNTS: [TestAccount; 3] = [
    TestAccount {
        email: "admin@blocal.bt",
        password: "admin123",
        name: "Admin User",
        role: "ADMIN",
    },
    TestAccount {
        email: "seller1@blocal.bt",
        password: "seller123",
        name: "Test Seller",
        role: "SELLER",
    },
    TestAccount {
        email: "buyer1@blocal.bt",
        password: "buyer123",
        name: "Test Buyer",
        role: "BUYER",
    },
];

/// Credential-based authentication provider
#[derive(Clone)]
pub struct CredentialsProvider<R>
where
    R: UserRepository + Send + Sync,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
}

impl<R> CredentialsProvider<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }

    fn test_account(&self, email: &str, password: &str) -> Option<AuthIdentity> {
        if !self.config.allow_test_accounts {
            return None;
        }

        let account = TEST_ACCOUNTS.iter().find(|a| a.email == email)?;

        if account.password != password {
            tracing::warn!(email = %email, "Invalid password for test account");
            return None;
        }

        tracing::info!(email = %email, "Authenticated test account");

        Some(AuthIdentity {
            user_id: account.email.to_string(),
            email: account.email.to_string(),
            name: account.name.to_string(),
            role: account.role.to_string(),
            is_active: true,
        })
    }
}

impl<R> AuthProvider for CredentialsProvider<R>
where
    R: UserRepository + Send + Sync,
{
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    async fn authorize(&self, credentials: Credentials) -> AuthResult<Option<AuthIdentity>> {
        if credentials.email.trim().is_empty() || credentials.password.is_empty() {
            tracing::debug!("Missing email or password");
            return Ok(None);
        }

        if let Some(identity) = self.test_account(&credentials.email, &credentials.password) {
            return Ok(Some(identity));
        }

        let Ok(email) = Email::new(&credentials.email) else {
            tracing::debug!("Sign-in with malformed email");
            return Ok(None);
        };

        // Fail-closed: lookup errors reject the sign-in.
        let user = match self.repo.find_by_email(&email).await {
            Ok(user) => user,
            Err(e) => {
                tracing::error!(error = %e, "Database error when finding user");
                return Ok(None);
            }
        };

        let Some(user) = user else {
            tracing::debug!(email = %email, "User not found");
            return Ok(None);
        };

        let Ok(password) = ClearTextPassword::new(credentials.password) else {
            return Ok(None);
        };

        if !user.password_hash.verify(&password) {
            tracing::warn!(email = %email, "Invalid password");
            return Ok(None);
        }

        Ok(Some(AuthIdentity {
            user_id: user.user_id.to_string(),
            email: user.email.to_string(),
            name: user.name,
            role: user.role.as_str().to_string(),
            is_active: user.is_active,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::user::User;
    use crate::domain::value_object::user_role::UserRole;
    use crate::infra::memory::MemoryUserRepository;

    fn creds(email: &str, password: &str) -> Credentials {
        Credentials {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    fn stored_user(email: &str, password: &str, role: UserRole) -> User {
        let hash = ClearTextPassword::new(password.to_string())
            .unwrap()
            .hash()
            .unwrap();
        User::new("Karma Dorji".to_string(), Email::new(email).unwrap(), hash, role)
    }

    fn provider(repo: MemoryUserRepository) -> CredentialsProvider<MemoryUserRepository> {
        CredentialsProvider::new(
            Arc::new(repo),
            Arc::new(AuthConfig::new(b"provider-test-secret".to_vec())),
        )
    }

    #[tokio::test]
    async fn test_missing_credentials_rejected() {
        let p = provider(MemoryUserRepository::new());

        assert!(p.authorize(creds("", "pw")).await.unwrap().is_none());
        assert!(
            p.authorize(creds("buyer1@blocal.bt", ""))
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_unknown_user_rejected() {
        let p = provider(MemoryUserRepository::new());
        assert!(
            p.authorize(creds("nobody@blocal.bt", "whatever"))
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_wrong_password_rejected() {
        let repo = MemoryUserRepository::new();
        repo.insert(stored_user("karma@blocal.bt", "right-password", UserRole::Buyer));

        let p = provider(repo);
        assert!(
            p.authorize(creds("karma@blocal.bt", "wrong-password"))
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_valid_credentials_resolve_identity() {
        let repo = MemoryUserRepository::new();
        repo.insert(stored_user("karma@blocal.bt", "tashi-delek", UserRole::Seller));

        let p = provider(repo);
        let identity = p
            .authorize(creds("karma@blocal.bt", "tashi-delek"))
            .await
            .unwrap()
            .expect("identity");

        assert_eq!(identity.email, "karma@blocal.bt");
        assert_eq!(identity.name, "Karma Dorji");
        assert_eq!(identity.role, "SELLER");
        assert!(identity.is_active);
    }

    #[tokio::test]
    async fn test_lookup_errors_fail_closed() {
        let p = provider(MemoryUserRepository::failing());

        // Database failure is a rejection, not an error.
        let result = p.authorize(creds("karma@blocal.bt", "tashi-delek")).await;
        assert!(result.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_test_accounts_disabled_by_default() {
        let p = provider(MemoryUserRepository::new());
        assert!(
            p.authorize(creds("admin@blocal.bt", "admin123"))
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_test_accounts_enabled_in_development() {
        let p = CredentialsProvider::new(
            Arc::new(MemoryUserRepository::new()),
            Arc::new(AuthConfig::development()),
        );

        let identity = p
            .authorize(creds("admin@blocal.bt", "admin123"))
            .await
            .unwrap()
            .expect("identity");
        assert_eq!(identity.role, "ADMIN");
        assert_eq!(identity.user_id, "admin@blocal.bt");

        assert!(
            p.authorize(creds("admin@blocal.bt", "wrong"))
                .await
                .unwrap()
                .is_none()
        );
    }
}
