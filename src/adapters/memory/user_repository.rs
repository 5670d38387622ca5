//! In-memory UserRepository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::catalog::User;
use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::ports::UserRepository;

/// In-memory user store. Email uniqueness is checked under the write lock.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn duplicate_email(email: &str) -> DomainError {
    DomainError::new(ErrorCode::DuplicateEmail, "Email is already in use")
        .with_detail("value", email)
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, user: &User) -> Result<(), DomainError> {
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == user.email) {
            return Err(duplicate_email(&user.email));
        }
        users.insert(user.id, user.clone());
        Ok(())
    }

    async fn update(&self, user: &User) -> Result<(), DomainError> {
        let mut users = self.users.write().await;
        if !users.contains_key(&user.id) {
            return Err(DomainError::new(ErrorCode::UserNotFound, "User not found"));
        }
        if users.values().any(|u| u.id != user.id && u.email == user.email) {
            return Err(duplicate_email(&user.email));
        }
        users.insert(user.id, user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        let mut users: Vec<User> = self.users.read().await.values().cloned().collect();
        users.sort_by(|a, b| a.email.cmp(&b.email));
        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn rejects_duplicate_email_on_save() {
        let repo = InMemoryUserRepository::new();
        repo.save(&User::create("jane@example.com", "Jane", "Doe").unwrap())
            .await
            .unwrap();

        let err = repo
            .save(&User::create("jane@example.com", "Janet", "Roe").unwrap())
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::DuplicateEmail);
        assert_eq!(err.details.get("value"), Some(&"jane@example.com".to_string()));
    }

    #[tokio::test]
    async fn update_may_keep_own_email() {
        let repo = InMemoryUserRepository::new();
        let mut user = User::create("jane@example.com", "Jane", "Doe").unwrap();
        repo.save(&user).await.unwrap();

        user.first_name = "Janet".to_string();
        repo.update(&user).await.unwrap();

        let stored = repo.find_by_id(&user.id).await.unwrap().unwrap();
        assert_eq!(stored.first_name, "Janet");
    }

    #[tokio::test]
    async fn update_of_unknown_user_is_not_found() {
        let repo = InMemoryUserRepository::new();
        let user = User::create("jane@example.com", "Jane", "Doe").unwrap();
        let err = repo.update(&user).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::UserNotFound);
    }
}
