//! User query handlers.

use std::sync::Arc;

use crate::domain::catalog::{CatalogError, User};
use crate::domain::foundation::UserId;
use crate::ports::UserRepository;

#[derive(Debug, Clone)]
pub struct GetUserQuery {
    pub user_id: UserId,
}

pub struct GetUserHandler {
    users: Arc<dyn UserRepository>,
}

impl GetUserHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(&self, query: GetUserQuery) -> Result<User, CatalogError> {
        self.users
            .find_by_id(&query.user_id)
            .await?
            .ok_or_else(|| CatalogError::user_not_found(query.user_id))
    }
}

/// Lists every user.
pub struct ListUsersHandler {
    users: Arc<dyn UserRepository>,
}

impl ListUsersHandler {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    pub async fn handle(&self) -> Result<Vec<User>, CatalogError> {
        Ok(self.users.list().await?)
    }
}
