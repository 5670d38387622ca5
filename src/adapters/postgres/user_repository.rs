//! PostgreSQL implementation of UserRepository.

use crate::domain::catalog::User;
use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::ports::UserRepository;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::pool::violated_constraint;

const EMAIL_CONSTRAINT: &str = "users_email_key";

/// PostgreSQL implementation of the UserRepository port.
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    email: String,
    first_name: String,
    last_name: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: UserId::from_uuid(row.id),
            email: row.email,
            first_name: row.first_name,
            last_name: row.last_name,
        }
    }
}

fn write_error(e: sqlx::Error, user: &User, action: &str) -> DomainError {
    if violated_constraint(&e) == Some(EMAIL_CONSTRAINT) {
        return DomainError::new(ErrorCode::DuplicateEmail, "Email is already in use")
            .with_detail("value", user.email.clone());
    }
    DomainError::database(format!("Failed to {} user: {}", action, e))
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn save(&self, user: &User) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO users (id, email, first_name, last_name)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(user.id.as_uuid())
        .bind(&user.email)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .execute(&self.pool)
        .await
        .map_err(|e| write_error(e, user, "save"))?;

        Ok(())
    }

    async fn update(&self, user: &User) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE users SET email = $2, first_name = $3, last_name = $4
            WHERE id = $1
            "#,
        )
        .bind(user.id.as_uuid())
        .bind(&user.email)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .execute(&self.pool)
        .await
        .map_err(|e| write_error(e, user, "update"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(ErrorCode::UserNotFound, "User not found"));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let row: Option<UserRow> = sqlx::query_as(
            "SELECT id, email, first_name, last_name FROM users WHERE id = $1",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to find user: {}", e)))?;

        Ok(row.map(User::from))
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        let rows: Vec<UserRow> = sqlx::query_as(
            "SELECT id, email, first_name, last_name FROM users ORDER BY email",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to list users: {}", e)))?;

        Ok(rows.into_iter().map(User::from).collect())
    }
}
