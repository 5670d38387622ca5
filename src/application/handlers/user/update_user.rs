//! UpdateUserHandler - Command handler for partial user updates.

use std::sync::Arc;

use crate::domain::catalog::{CatalogError, User, UserChanges};
use crate::domain::foundation::UserId;
use crate::ports::UserRepository;

/// Command to change some of a user's fields.
#[derive(Debug, Clone)]
pub struct UpdateUserCommand {
    pub user_id: UserId,
    pub changes: UserChanges,
}

#[derive(Debug, Clone)]
pub struct UpdateUserResult {
    pub user: User,
}

pub struct UpdateUserHandler {
    users: Arc<dyn UserRepository>,
}

impl UpdateUserHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, cmd: UpdateUserCommand) -> Result<UpdateUserResult, CatalogError> {
        let mut user = self
            .users
            .find_by_id(&cmd.user_id)
            .await?
            .ok_or_else(|| CatalogError::user_not_found(cmd.user_id))?;

        user.apply(cmd.changes)?;
        self.users.update(&user).await?;

        tracing::info!(user_id = %user.id, "User updated");
        Ok(UpdateUserResult { user })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryUserRepository;

    async fn stored_user(repo: &InMemoryUserRepository, email: &str) -> User {
        let user = User::create(email, "Jane", "Doe").unwrap();
        repo.save(&user).await.unwrap();
        user
    }

    #[tokio::test]
    async fn applies_given_fields_only() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let user = stored_user(&repo, "jane@example.com").await;
        let handler = UpdateUserHandler::new(repo.clone());

        let result = handler
            .handle(UpdateUserCommand {
                user_id: user.id,
                changes: UserChanges {
                    last_name: Some("Smith".to_string()),
                    ..Default::default()
                },
            })
            .await
            .unwrap();

        assert_eq!(result.user.first_name, "Jane");
        assert_eq!(result.user.last_name, "Smith");
        assert_eq!(repo.find_by_id(&user.id).await.unwrap(), Some(result.user));
    }

    #[tokio::test]
    async fn taking_another_users_email_is_rejected() {
        let repo = Arc::new(InMemoryUserRepository::new());
        stored_user(&repo, "jane@example.com").await;
        let other = stored_user(&repo, "john@example.com").await;
        let handler = UpdateUserHandler::new(repo);

        let err = handler
            .handle(UpdateUserCommand {
                user_id: other.id,
                changes: UserChanges {
                    email: Some("jane@example.com".to_string()),
                    ..Default::default()
                },
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CatalogError::DuplicateEmail(_)));
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let handler = UpdateUserHandler::new(Arc::new(InMemoryUserRepository::new()));
        let user_id = UserId::new();

        let err = handler
            .handle(UpdateUserCommand {
                user_id,
                changes: UserChanges::default(),
            })
            .await
            .unwrap_err();

        assert_eq!(err, CatalogError::user_not_found(user_id));
    }
}
