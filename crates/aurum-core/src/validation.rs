//! # Validation Module
//!
//! Input validation utilities for Aurum POS.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend                                                     │
//! │  └── Basic format checks, immediate feedback                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Desktop command (Rust)                                       │
//! │  ├── Type validation (deserialization)                                 │
//! │  └── THIS MODULE: field rules (SKU, HUID, weights, percentages)        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Pricing / aggregation                                        │
//! │  └── Non-negative checks on every numeric input                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::MAX_PERCENT_BPS;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Length of a Hallmark Unique Identification code.
pub const HUID_LEN: usize = 6;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a SKU (tag number printed on the piece).
///
/// ## Rules
/// - Must not be empty
/// - At most 50 characters
/// - Only alphanumeric characters, hyphens, underscores
///
/// ## Example
/// ```rust
/// use aurum_core::validation::validate_sku;
///
/// assert!(validate_sku("RNG-22K-0042").is_ok());
/// assert!(validate_sku("").is_err());
/// assert!(validate_sku("A".repeat(100).as_str()).is_err());
/// ```
pub fn validate_sku(sku: &str) -> ValidationResult<()> {
    let sku = sku.trim();

    if sku.is_empty() {
        return Err(ValidationError::Required {
            field: "sku".to_string(),
        });
    }

    if sku.len() > 50 {
        return Err(ValidationError::TooLong {
            field: "sku".to_string(),
            max: 50,
        });
    }

    if !sku
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "sku".to_string(),
            reason: "must contain only letters, numbers, hyphens, and underscores".to_string(),
        });
    }

    Ok(())
}

/// Validates a product name (1 to 200 characters after trimming).
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates and normalizes a HUID.
///
/// ## Rules
/// - Exactly six ASCII letters or digits
/// - Case-insensitive on input, stored upper-case
///
/// ## Example
/// ```rust
/// use aurum_core::validation::validate_huid;
///
/// assert_eq!(validate_huid(" ab12cd ").unwrap(), "AB12CD");
/// assert!(validate_huid("AB12C").is_err());
/// assert!(validate_huid("AB-2CD").is_err());
/// ```
pub fn validate_huid(huid: &str) -> ValidationResult<String> {
    let huid = huid.trim();

    if huid.is_empty() {
        return Err(ValidationError::Required {
            field: "huid".to_string(),
        });
    }

    if huid.len() != HUID_LEN || !huid.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ValidationError::InvalidFormat {
            field: "huid".to_string(),
            reason: format!("must be {} letters or digits", HUID_LEN),
        });
    }

    Ok(huid.to_ascii_uppercase())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Rejects negative values with `CoreError::InvalidArgument`.
///
/// Every numeric input to pricing and aggregation goes through this check.
///
/// ## Example
/// ```rust
/// use aurum_core::validation::ensure_non_negative;
///
/// assert!(ensure_non_negative("net weight", 0).is_ok());
/// assert!(ensure_non_negative("net weight", -1).is_err());
/// ```
pub fn ensure_non_negative(field: &str, value: i64) -> CoreResult<()> {
    if value < 0 {
        return Err(CoreError::negative(field));
    }
    Ok(())
}

/// Validates a product-level percentage (wastage, percentage making charge).
///
/// ## Rules
/// - Between 0 and MAX_PERCENT_BPS (100%)
pub fn validate_percentage_bps(field: &str, bps: i64) -> ValidationResult<()> {
    if !(0..=MAX_PERCENT_BPS).contains(&bps) {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: MAX_PERCENT_BPS,
        });
    }
    Ok(())
}

/// Validates a tax rate in basis points (0% to 100%).
pub fn validate_tax_rate_bps(bps: u32) -> ValidationResult<()> {
    if bps as i64 > MAX_PERCENT_BPS {
        return Err(ValidationError::OutOfRange {
            field: "tax_rate".to_string(),
            min: 0,
            max: MAX_PERCENT_BPS,
        });
    }
    Ok(())
}

/// Validates that net weight does not exceed gross weight.
pub fn validate_net_within_gross(net_mg: i64, gross_mg: i64) -> ValidationResult<()> {
    if net_mg > gross_mg {
        return Err(ValidationError::Exceeds {
            field: "net weight".to_string(),
            other: "gross weight".to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// UUID Validators
// =============================================================================

/// Validates a UUID string format.
///
/// ## Example
/// ```rust
/// use aurum_core::validation::validate_uuid;
///
/// assert!(validate_uuid("550e8400-e29b-41d4-a716-446655440000").is_ok());
/// assert!(validate_uuid("not-a-uuid").is_err());
/// ```
pub fn validate_uuid(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    uuid::Uuid::parse_str(id).map_err(|_| ValidationError::InvalidFormat {
        field: "id".to_string(),
        reason: "must be a valid UUID".to_string(),
    })?;

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_sku() {
        assert!(validate_sku("RNG-22K-0042").is_ok());
        assert!(validate_sku("chain_18").is_ok());

        assert!(validate_sku("").is_err());
        assert!(validate_sku("   ").is_err());
        assert!(validate_sku("has space").is_err());
        assert!(validate_sku(&"A".repeat(100)).is_err());
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Temple Necklace").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_huid() {
        assert_eq!(validate_huid("x7k2p9").unwrap(), "X7K2P9");
        assert!(matches!(
            validate_huid(""),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_huid("X7K2P9Q"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(validate_huid("X7K2P٩").is_err());
    }

    #[test]
    fn test_ensure_non_negative() {
        assert!(ensure_non_negative("stone value", 0).is_ok());
        assert!(ensure_non_negative("stone value", 150_000).is_ok());

        let err = ensure_non_negative("stone value", -1).unwrap_err();
        assert!(matches!(err, CoreError::InvalidArgument { ref field, .. } if field == "stone value"));
    }

    #[test]
    fn test_validate_percentage_bps() {
        assert!(validate_percentage_bps("wastage", 0).is_ok());
        assert!(validate_percentage_bps("wastage", 800).is_ok());
        assert!(validate_percentage_bps("wastage", 10000).is_ok());
        assert!(validate_percentage_bps("wastage", 10001).is_err());
        assert!(validate_percentage_bps("wastage", -1).is_err());
    }

    #[test]
    fn test_validate_tax_rate_bps() {
        assert!(validate_tax_rate_bps(300).is_ok());
        assert!(validate_tax_rate_bps(10001).is_err());
    }

    #[test]
    fn test_validate_net_within_gross() {
        assert!(validate_net_within_gross(9800, 10250).is_ok());
        assert!(validate_net_within_gross(10250, 10250).is_ok());
        assert!(validate_net_within_gross(10251, 10250).is_err());
    }

    #[test]
    fn test_validate_uuid() {
        assert!(validate_uuid("550e8400-e29b-41d4-a716-446655440000").is_ok());
        assert!(validate_uuid("").is_err());
        assert!(validate_uuid("123").is_err());
    }
}
