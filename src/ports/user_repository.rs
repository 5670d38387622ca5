//! User repository port.

use crate::domain::catalog::User;
use crate::domain::foundation::{DomainError, UserId};
use async_trait::async_trait;

/// Repository port for user persistence.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Save a new user.
    ///
    /// # Errors
    ///
    /// - `DuplicateEmail` if the email is taken (detail `value` holds it)
    /// - `DatabaseError` on persistence failure
    async fn save(&self, user: &User) -> Result<(), DomainError>;

    /// Update an existing user.
    ///
    /// # Errors
    ///
    /// - `UserNotFound` if the user doesn't exist
    /// - `DuplicateEmail` if the new email is taken
    /// - `DatabaseError` on persistence failure
    async fn update(&self, user: &User) -> Result<(), DomainError>;

    /// Find a user by id. Returns `None` if not found.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// List every user.
    async fn list(&self) -> Result<Vec<User>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn UserRepository) {}
    }
}
