//! User handlers.

mod create_user;
mod get_user;
mod update_user;

pub use create_user::{CreateUserCommand, CreateUserHandler, CreateUserResult};
pub use get_user::{GetUserHandler, GetUserQuery, ListUsersHandler};
pub use update_user::{UpdateUserCommand, UpdateUserHandler, UpdateUserResult};
