//! # Error Types
//!
//! Error taxonomy for the state engine.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shopfront-core errors (this file)                                     │
//! │  ├── StoreError       - What every store/coordinator call returns      │
//! │  │   ├── Denied         gate rejected (role or not logged in)          │
//! │  │   ├── NotFound       unknown product / cart line (fail-soft)        │
//! │  │   └── InvalidInput   wraps ValidationError                          │
//! │  └── ValidationError  - Field-level input failures                     │
//! │                                                                         │
//! │  console errors (apps/console)                                         │
//! │  └── ApiError         - What the UI sees (serialized code + message)   │
//! │                                                                         │
//! │  Flow: ValidationError → StoreError → ApiError → UI                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every variant is recoverable. A failed call leaves all stores exactly as
//! they were before it.

use thiserror::Error;

use crate::authz::{DenialReason, Operation};
use crate::types::ProductId;

// =============================================================================
// Store Error
// =============================================================================

/// Errors returned by stores and the coordinator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The role gate rejected the command.
    ///
    /// ## When This Occurs
    /// - No one is logged in (every gated command)
    /// - A `user` session attempts catalog mutation
    #[error("{operation} denied: {reason}")]
    Denied {
        operation: Operation,
        reason: DenialReason,
    },

    /// The command referenced something that does not exist.
    ///
    /// Fail-soft: nothing was changed.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: ProductId },

    /// Input failed validation (wraps ValidationError).
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),
}

impl StoreError {
    /// Creates a not found error for a catalog product.
    pub fn product_not_found(id: ProductId) -> Self {
        StoreError::NotFound {
            entity: "Product",
            id,
        }
    }

    /// Creates a not found error for a cart line.
    pub fn cart_line_not_found(product_id: ProductId) -> Self {
        StoreError::NotFound {
            entity: "Cart line",
            id: product_id,
        }
    }

    /// Returns true if the gate rejected the command.
    pub fn is_denied(&self) -> bool {
        matches!(self, StoreError::Denied { .. })
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when caller input doesn't meet requirements and are checked
/// before any store is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., a malformed price string).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Role;

    #[test]
    fn test_error_messages() {
        let err = StoreError::product_not_found(42);
        assert_eq!(err.to_string(), "Product not found: 42");

        let err = StoreError::cart_line_not_found(7);
        assert_eq!(err.to_string(), "Cart line not found: 7");
    }

    #[test]
    fn test_denied_message() {
        let err = StoreError::Denied {
            operation: Operation::AddProduct,
            reason: DenialReason::InsufficientRole { role: Role::User },
        };
        assert_eq!(
            err.to_string(),
            "addProduct denied: role 'user' may not perform this operation"
        );
        assert!(err.is_denied());
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "userName".to_string(),
        };
        assert_eq!(err.to_string(), "userName is required");

        let err = ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        };
        assert_eq!(err.to_string(), "name must be at most 200 characters");
    }

    #[test]
    fn test_validation_converts_to_store_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        let store_err: StoreError = validation_err.into();
        assert!(matches!(store_err, StoreError::InvalidInput(_)));
        assert!(!store_err.is_denied());
    }
}
