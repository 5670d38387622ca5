//! Catalog-specific error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | UserNotFound | 404 |
//! | ProductNotFound | 404 |
//! | ProductPriceNotFound | 404 |
//! | ValidationFailed | 422 |
//! | DuplicateEmail | 409 |
//! | DuplicateProductName | 409 |
//! | Infrastructure | 500 |

use crate::domain::foundation::{
    DomainError, ErrorCode, ProductId, ProductPriceId, UserId, ValidationError,
};

/// Catalog-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No user with this id.
    UserNotFound(UserId),

    /// No product with this id.
    ProductNotFound(ProductId),

    /// No price with this id under the given product.
    ProductPriceNotFound(ProductPriceId),

    /// One or more fields failed validation.
    ValidationFailed(Vec<ValidationError>),

    /// Another user already uses this email.
    DuplicateEmail(String),

    /// Another product already uses this name.
    DuplicateProductName(String),

    /// Infrastructure error.
    Infrastructure(String),
}

impl CatalogError {
    pub fn user_not_found(id: UserId) -> Self {
        CatalogError::UserNotFound(id)
    }

    pub fn product_not_found(id: ProductId) -> Self {
        CatalogError::ProductNotFound(id)
    }

    pub fn product_price_not_found(id: ProductPriceId) -> Self {
        CatalogError::ProductPriceNotFound(id)
    }

    pub fn validation(errors: Vec<ValidationError>) -> Self {
        CatalogError::ValidationFailed(errors)
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        CatalogError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            CatalogError::UserNotFound(_) => ErrorCode::UserNotFound,
            CatalogError::ProductNotFound(_) => ErrorCode::ProductNotFound,
            CatalogError::ProductPriceNotFound(_) => ErrorCode::ProductPriceNotFound,
            CatalogError::ValidationFailed(_) => ErrorCode::ValidationFailed,
            CatalogError::DuplicateEmail(_) => ErrorCode::DuplicateEmail,
            CatalogError::DuplicateProductName(_) => ErrorCode::DuplicateProductName,
            CatalogError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    /// Returns a user-friendly error message.
    pub fn message(&self) -> String {
        match self {
            CatalogError::UserNotFound(id) => format!("User not found: {}", id),
            CatalogError::ProductNotFound(id) => format!("Product not found: {}", id),
            CatalogError::ProductPriceNotFound(id) => format!("Product price not found: {}", id),
            CatalogError::ValidationFailed(errors) => {
                let reasons: Vec<String> = errors.iter().map(ToString::to_string).collect();
                format!("Validation failed: {}", reasons.join("; "))
            }
            CatalogError::DuplicateEmail(email) => {
                format!("A user with email '{}' already exists", email)
            }
            CatalogError::DuplicateProductName(name) => {
                format!("A product named '{}' already exists", name)
            }
            CatalogError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for CatalogError {}

impl From<Vec<ValidationError>> for CatalogError {
    fn from(errors: Vec<ValidationError>) -> Self {
        CatalogError::ValidationFailed(errors)
    }
}

impl From<DomainError> for CatalogError {
    fn from(err: DomainError) -> Self {
        let value = err.details.get("value").cloned().unwrap_or_default();
        match err.code {
            ErrorCode::DuplicateEmail => CatalogError::DuplicateEmail(value),
            ErrorCode::DuplicateProductName => CatalogError::DuplicateProductName(value),
            _ => CatalogError::Infrastructure(err.to_string()),
        }
    }
}

impl From<CatalogError> for DomainError {
    fn from(err: CatalogError) -> Self {
        DomainError::new(err.code(), err.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_errors_carry_their_codes() {
        assert_eq!(
            CatalogError::user_not_found(UserId::new()).code(),
            ErrorCode::UserNotFound
        );
        assert_eq!(
            CatalogError::product_not_found(ProductId::new()).code(),
            ErrorCode::ProductNotFound
        );
        assert_eq!(
            CatalogError::product_price_not_found(ProductPriceId::new()).code(),
            ErrorCode::ProductPriceNotFound
        );
    }

    #[test]
    fn validation_message_lists_every_reason() {
        let err = CatalogError::validation(vec![
            ValidationError::empty_field("name"),
            ValidationError::out_of_range("price", 0, 10, -1),
        ]);
        let msg = err.message();
        assert!(msg.contains("'name'"));
        assert!(msg.contains("'price'"));
    }

    #[test]
    fn duplicate_email_survives_domain_error_round_trip() {
        let domain = DomainError::new(ErrorCode::DuplicateEmail, "taken")
            .with_detail("value", "jane@example.com");
        let err: CatalogError = domain.into();
        assert_eq!(err, CatalogError::DuplicateEmail("jane@example.com".to_string()));
    }

    #[test]
    fn unknown_domain_errors_become_infrastructure() {
        let err: CatalogError = DomainError::database("connection lost").into();
        assert!(matches!(err, CatalogError::Infrastructure(_)));
    }

    #[test]
    fn display_matches_message() {
        let err = CatalogError::DuplicateProductName("Streaming".to_string());
        assert_eq!(format!("{}", err), err.message());
    }
}
