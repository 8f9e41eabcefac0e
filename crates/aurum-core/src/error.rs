//! # Error Types
//!
//! Domain-specific error types for aurum-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  aurum-core errors (this file)                                         │
//! │  ├── CoreError        - Pricing, discount and rate lookup failures     │
//! │  └── ValidationError  - Product field validation failures              │
//! │                                                                         │
//! │  Desktop API errors (in app)                                           │
//! │  └── ApiError         - What the frontend sees (serialized)            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Frontend               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here is fatal. The order entry screen decides whether to prompt
//! the user again or abandon the operation.

use chrono::NaiveDate;
use thiserror::Error;

use crate::money::Money;
use crate::types::{MetalType, Purity};

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A numeric input is negative or otherwise out of range.
    ///
    /// ## When This Occurs
    /// - Negative net weight typed on the scale screen
    /// - Negative rate, making charge, wastage or stone value
    /// - Negative discount
    #[error("Invalid {field}: {reason}")]
    InvalidArgument { field: String, reason: String },

    /// Discount exceeds the order subtotal and strict mode is on.
    ///
    /// ## User Workflow
    /// ```text
    /// Subtotal ₹10000.00, cashier enters discount ₹12000.00
    ///      │
    ///      ▼
    /// DiscountMode::Strict?
    ///      ├── yes → InvalidDiscount { discount, subtotal }
    ///      └── no  → discount clamped to ₹10000.00
    /// ```
    #[error("Discount {discount} exceeds subtotal {subtotal}")]
    InvalidDiscount { discount: Money, subtotal: Money },

    /// No rate master entry covers the requested metal, purity and date.
    #[error("No {metal} rate for purity {purity} on {on}")]
    RateNotFound {
        metal: MetalType,
        purity: Purity,
        on: NaiveDate,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Shorthand for a negative-value `InvalidArgument`.
    pub fn negative(field: &str) -> Self {
        CoreError::InvalidArgument {
            field: field.to_string(),
            reason: "must not be negative".to_string(),
        }
    }

    /// Shorthand for an amount that does not fit the supported range.
    pub fn out_of_range(field: &str) -> Self {
        CoreError::InvalidArgument {
            field: field.to_string(),
            reason: "exceeds the supported range".to_string(),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors for product and order fields.
#[derive(Debug, Error)]
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

    /// Invalid format (e.g., invalid UUID, malformed HUID).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Two fields contradict each other.
    #[error("{field} must not exceed {other}")]
    Exceeds { field: String, other: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
