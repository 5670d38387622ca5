//! CreateUserHandler - Command handler for registering users.

use std::sync::Arc;

use crate::domain::catalog::{CatalogError, User};
use crate::ports::UserRepository;

/// Command to register a user.
#[derive(Debug, Clone)]
pub struct CreateUserCommand {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone)]
pub struct CreateUserResult {
    pub user: User,
}

pub struct CreateUserHandler {
    users: Arc<dyn UserRepository>,
}

impl CreateUserHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, cmd: CreateUserCommand) -> Result<CreateUserResult, CatalogError> {
        let user = User::create(cmd.email, cmd.first_name, cmd.last_name)?;
        self.users.save(&user).await?;

        tracing::info!(user_id = %user.id, "User created");
        Ok(CreateUserResult { user })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryUserRepository;

    fn command(email: &str) -> CreateUserCommand {
        CreateUserCommand {
            email: email.to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
        }
    }

    #[tokio::test]
    async fn creates_and_stores_user() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let handler = CreateUserHandler::new(repo.clone());

        let result = handler.handle(command("jane@example.com")).await.unwrap();

        let stored = repo.find_by_id(&result.user.id).await.unwrap();
        assert_eq!(stored, Some(result.user));
    }

    #[tokio::test]
    async fn invalid_fields_are_rejected_before_storage() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let handler = CreateUserHandler::new(repo.clone());

        let err = handler.handle(command("not-an-email")).await.unwrap_err();

        assert!(matches!(err, CatalogError::ValidationFailed(_)));
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn duplicate_email_is_reported() {
        let handler = CreateUserHandler::new(Arc::new(InMemoryUserRepository::new()));
        handler.handle(command("jane@example.com")).await.unwrap();

        let err = handler.handle(command("jane@example.com")).await.unwrap_err();

        assert_eq!(err, CatalogError::DuplicateEmail("jane@example.com".to_string()));
    }
}
