//! Register Use Case
//!
//! Creates a new marketplace account. The stored secret is the Argon2id
//! hash of the submitted password; the plaintext is zeroized after hashing.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_role::UserRole};
use crate::error::{AuthError, AuthResult};

/// Registration input
pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Registration output
#[derive(Debug)]
pub struct RegisterOutput {
    pub user_id: String,
}

/// Register use case
pub struct RegisterUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> RegisterUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<RegisterOutput> {
        let name = input.name.trim();

        // Validate required fields before touching storage
        if name.is_empty() || input.email.trim().is_empty() || input.password.is_empty() {
            return Err(AuthError::MissingFields);
        }

        let email = Email::new(&input.email).map_err(|e| AuthError::Validation(e.message().to_string()))?;

        if self.repo.exists_by_email(&email).await? {
            tracing::debug!(email = %email, "Registration for existing email");
            return Err(AuthError::UserExists);
        }

        let password = ClearTextPassword::new(input.password)
            .map_err(|_| AuthError::MissingFields)?;
        let password_hash = password
            .hash()
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        // Self-registered accounts start as buyers
        let user = User::new(name.to_string(), email, password_hash, UserRole::default());

        self.repo.create(&user).await?;

        tracing::info!(
            user_id = %user.user_id,
            email = %user.email,
            "User created"
        );

        Ok(RegisterOutput {
            user_id: user.user_id.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::memory::MemoryUserRepository;

    fn input(name: &str, email: &str, password: &str) -> RegisterInput {
        RegisterInput {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_missing_fields_rejected_and_nothing_stored() {
        let repo = Arc::new(MemoryUserRepository::new());
        let use_case = RegisterUseCase::new(repo.clone());

        for bad in [
            input("", "a@x.com", "p"),
            input("A", "", "p"),
            input("A", "a@x.com", ""),
            input("   ", "a@x.com", "p"),
        ] {
            let err = use_case.execute(bad).await.unwrap_err();
            assert!(matches!(err, AuthError::MissingFields));
        }

        assert_eq!(repo.count(), 0);
    }

    #[tokio::test]
    async fn test_successful_registration() {
        let repo = Arc::new(MemoryUserRepository::new());
        let use_case = RegisterUseCase::new(repo.clone());

        use_case.execute(input("A", "a@x.com", "p")).await.unwrap();

        assert_eq!(repo.count(), 1);
        let stored = repo.find("a@x.com").expect("stored user");
        assert_eq!(stored.name, "A");
        assert_eq!(stored.role, UserRole::Buyer);
        assert!(stored.is_active);
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected_with_single_record() {
        let repo = Arc::new(MemoryUserRepository::new());
        let use_case = RegisterUseCase::new(repo.clone());

        use_case.execute(input("A", "a@x.com", "p")).await.unwrap();

        let err = use_case
            .execute(input("A", "a@x.com", "p"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::UserExists));
        assert_eq!(err.to_string(), "User already exists");
        assert_eq!(repo.count(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_detection_ignores_email_case() {
        let repo = Arc::new(MemoryUserRepository::new());
        let use_case = RegisterUseCase::new(repo.clone());

        use_case
            .execute(input("A", "pema@blocal.bt", "p"))
            .await
            .unwrap();

        let err = use_case
            .execute(input("B", "Pema@BLocal.BT", "q"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::UserExists));
        assert_eq!(repo.count(), 1);
    }

    #[tokio::test]
    async fn test_stored_secret_is_not_the_plaintext() {
        let repo = Arc::new(MemoryUserRepository::new());
        let use_case = RegisterUseCase::new(repo.clone());

        use_case
            .execute(input("Pema", "pema@blocal.bt", "druk-yul-11"))
            .await
            .unwrap();

        let stored = repo.find("pema@blocal.bt").expect("stored user");
        assert_ne!(stored.password_hash.as_phc_string(), "druk-yul-11");

        // Verifiable only via the one-way comparison
        let right = ClearTextPassword::new("druk-yul-11".to_string()).unwrap();
        let wrong = ClearTextPassword::new("druk-yul-12".to_string()).unwrap();
        assert!(stored.password_hash.verify(&right));
        assert!(!stored.password_hash.verify(&wrong));
    }

    #[tokio::test]
    async fn test_invalid_email_rejected() {
        let repo = Arc::new(MemoryUserRepository::new());
        let use_case = RegisterUseCase::new(repo.clone());

        let err = use_case
            .execute(input("A", "not-an-email", "p"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Validation(_)));
        assert_eq!(repo.count(), 0);
    }
}
