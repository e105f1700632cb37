//! User Role Value Object
//!
//! The three access levels of the marketplace. Role claims arrive from
//! session tokens and database rows as strings with unpredictable casing,
//! so every read goes through [`UserRole::from_claim`], which trims and
//! uppercases before matching. Anything that does not normalize to one of
//! the three roles is not a valid authorization input.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserRole {
    Admin,
    Seller,
    #[default]
    Buyer,
}

impl UserRole {
    /// Canonical claim string, always upper-case.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        use UserRole::*;
        match self {
            Admin => "ADMIN",
            Seller => "SELLER",
            Buyer => "BUYER",
        }
    }

    /// Parse a role claim, normalizing case drift.
    ///
    /// Trim + uppercase first, so `"admin"`, `" Admin "` and `"ADMIN"` are
    /// the same role. Returns `None` for anything outside the enumerated
    /// set; callers must treat that as an authorization failure, never as
    /// a default.
    pub fn from_claim(raw: &str) -> Option<Self> {
        use UserRole::*;
        match raw.trim().to_uppercase().as_str() {
            "ADMIN" => Some(Admin),
            "SELLER" => Some(Seller),
            "BUYER" => Some(Buyer),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }

    #[inline]
    pub const fn is_seller(&self) -> bool {
        matches!(self, UserRole::Seller)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_claim_exact() {
        assert_eq!(UserRole::from_claim("ADMIN"), Some(UserRole::Admin));
        assert_eq!(UserRole::from_claim("SELLER"), Some(UserRole::Seller));
        assert_eq!(UserRole::from_claim("BUYER"), Some(UserRole::Buyer));
    }

    #[test]
    fn test_from_claim_normalizes_case_and_whitespace() {
        assert_eq!(UserRole::from_claim("admin"), Some(UserRole::Admin));
        assert_eq!(UserRole::from_claim("Seller"), Some(UserRole::Seller));
        assert_eq!(UserRole::from_claim("  buyer  "), Some(UserRole::Buyer));
        assert_eq!(UserRole::from_claim("aDmIn"), Some(UserRole::Admin));
    }

    #[test]
    fn test_from_claim_is_idempotent_through_as_str() {
        for role in [UserRole::Admin, UserRole::Seller, UserRole::Buyer] {
            assert_eq!(UserRole::from_claim(role.as_str()), Some(role));
            assert_eq!(
                UserRole::from_claim(&role.as_str().to_lowercase()),
                Some(role)
            );
        }
    }

    #[test]
    fn test_from_claim_rejects_unknown() {
        assert_eq!(UserRole::from_claim(""), None);
        assert_eq!(UserRole::from_claim("USER"), None);
        assert_eq!(UserRole::from_claim("MODERATOR"), None);
        assert_eq!(UserRole::from_claim("ADMIN SELLER"), None);
    }

    #[test]
    fn test_default_is_buyer() {
        assert_eq!(UserRole::default(), UserRole::Buyer);
    }

    #[test]
    fn test_display() {
        assert_eq!(UserRole::Admin.to_string(), "ADMIN");
        assert_eq!(UserRole::Seller.to_string(), "SELLER");
        assert_eq!(UserRole::Buyer.to_string(), "BUYER");
    }
}
