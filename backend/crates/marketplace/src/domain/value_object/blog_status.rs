//! Blog Status Value Object
//!
//! Moderation overwrites the status directly with whatever the admin
//! screen sends ("PUBLISHED", "REJECTED", ...). The set is not enumerated
//! here; the only rule is that a status cannot be empty.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogStatus(String);

impl BlogStatus {
    /// Create a status, rejecting empty/whitespace-only input
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let status = raw.into().trim().to_string();

        if status.is_empty() {
            return None;
        }

        Some(Self(status))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(status: impl Into<String>) -> Self {
        Self(status.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlogStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_accepts_any_non_empty_value() {
        assert_eq!(BlogStatus::new("PUBLISHED").unwrap().as_str(), "PUBLISHED");
        assert_eq!(BlogStatus::new("rejected").unwrap().as_str(), "rejected");
    }

    #[test]
    fn test_status_trims_whitespace() {
        assert_eq!(BlogStatus::new("  PENDING  ").unwrap().as_str(), "PENDING");
    }

    #[test]
    fn test_empty_status_rejected() {
        assert!(BlogStatus::new("").is_none());
        assert!(BlogStatus::new("   ").is_none());
    }
}
