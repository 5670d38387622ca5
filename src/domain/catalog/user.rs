//! User record - the party that owns subscriptions.

use serde::{Deserialize, Serialize};

use super::validation::{check_email, check_length, finish, MAX_TEXT_LENGTH};
use crate::domain::foundation::{UserId, ValidationError};

const MIN_NAME_LENGTH: usize = 2;

/// A registered user.
///
/// Subscriptions point at users by `UserId`; the user record holds no
/// back-references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// Partial update for a user. `None` and blank strings leave a field as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl User {
    /// Creates a user after validating every field.
    pub fn create(
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Result<Self, Vec<ValidationError>> {
        let user = Self {
            id: UserId::new(),
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        };
        user.validate()?;
        Ok(user)
    }

    /// Applies non-blank changes and re-validates.
    ///
    /// On error the user is left untouched.
    pub fn apply(&mut self, changes: UserChanges) -> Result<(), Vec<ValidationError>> {
        let mut updated = self.clone();
        if let Some(email) = non_blank(changes.email) {
            updated.email = email;
        }
        if let Some(first_name) = non_blank(changes.first_name) {
            updated.first_name = first_name;
        }
        if let Some(last_name) = non_blank(changes.last_name) {
            updated.last_name = last_name;
        }
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        check_email("email", &self.email, &mut errors);
        check_length("email", &self.email, 1, MAX_TEXT_LENGTH, &mut errors);
        check_length("firstName", &self.first_name, MIN_NAME_LENGTH, MAX_TEXT_LENGTH, &mut errors);
        check_length("lastName", &self.last_name, MIN_NAME_LENGTH, MAX_TEXT_LENGTH, &mut errors);
        finish(errors)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
