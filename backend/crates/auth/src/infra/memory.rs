//! In-memory user repository for unit tests.

use std::sync::Mutex;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

pub(crate) struct MemoryUserRepository {
    users: Mutex<Vec<User>>,
    fail: bool,
}

impl MemoryUserRepository {
    pub(crate) fn new() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    /// A repository whose every call fails, for fail-closed tests.
    pub(crate) fn failing() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub(crate) fn insert(&self, user: User) {
        self.users.lock().unwrap().push(user);
    }

    pub(crate) fn count(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    pub(crate) fn find(&self, email: &str) -> Option<User> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email.as_str() == email)
            .cloned()
    }

    fn check(&self) -> AuthResult<()> {
        if self.fail {
            return Err(AuthError::Internal("memory repository failure".to_string()));
        }
        Ok(())
    }
}

impl UserRepository for MemoryUserRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        self.check()?;

        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(AuthError::UserExists);
        }
        users.push(user.clone());
        Ok(())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        self.check()?;

        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| &u.email == email)
            .cloned())
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        self.check()?;

        Ok(self.users.lock().unwrap().iter().any(|u| &u.email == email))
    }
}
