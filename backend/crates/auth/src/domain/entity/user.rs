//! User Entity
//!
//! A marketplace account. The secret is stored only as an Argon2id hash;
//! the plaintext never reaches this type. Accounts are created on
//! registration and never deleted.

use chrono::{DateTime, Utc};
use platform::password::HashedPassword;

use crate::domain::value_object::{email::Email, user_id::UserId, user_role::UserRole};

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// Display name
    pub name: String,
    /// Email address (unique, lowercased)
    pub email: Email,
    /// Hashed secret (Argon2id PHC string)
    pub password_hash: HashedPassword,
    /// Role (Admin, Seller, Buyer)
    pub role: UserRole,
    /// Whether the account is active
    pub is_active: bool,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new active user
    pub fn new(name: String, email: Email, password_hash: HashedPassword, role: UserRole) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            name,
            email,
            password_hash,
            role,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Update the role
    pub fn set_role(&mut self, role: UserRole) {
        self.role = role;
        self.updated_at = Utc::now();
    }

    /// Activate or deactivate the account
    pub fn set_active(&mut self, active: bool) {
        self.is_active = active;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::password::ClearTextPassword;

    fn hashed(raw: &str) -> HashedPassword {
        ClearTextPassword::new(raw.to_string()).unwrap().hash().unwrap()
    }

    #[test]
    fn test_new_user_is_active() {
        let user = User::new(
            "Test Buyer".to_string(),
            Email::new("buyer1@blocal.bt").unwrap(),
            hashed("buyer123"),
            UserRole::Buyer,
        );

        assert!(user.is_active);
        assert_eq!(user.role, UserRole::Buyer);
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_set_role_touches_updated_at() {
        let mut user = User::new(
            "Test Seller".to_string(),
            Email::new("seller1@blocal.bt").unwrap(),
            hashed("seller123"),
            UserRole::Buyer,
        );

        user.set_role(UserRole::Seller);
        assert_eq!(user.role, UserRole::Seller);
        assert!(user.updated_at >= user.created_at);
    }
}
