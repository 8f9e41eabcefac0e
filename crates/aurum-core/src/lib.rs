//! # aurum-core: Pure Business Logic for Aurum POS
//!
//! This crate holds the jewelry pricing rules as pure functions with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Aurum POS Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Desktop frontend                             │   │
//! │  │    Rate board ──► Tag scan ──► Order entry ──► Invoice          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    aurum-desktop commands                       │   │
//! │  │    quote_line_price, add_order_line, set_metal_rate, etc.       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ aurum-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────┐         │   │
//! │  │   │ pricing  │ │  order   │ │  rates   │ │ product  │         │   │
//! │  │   │ line     │ │ totals   │ │ provider │ │ HUID     │         │   │
//! │  │   │ price    │ │ tax/disc │ │ table    │ │ updates  │         │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────┘         │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic and half-up rounding
//! - [`types`] - Tax rate, weight, metal, purity, discount mode
//! - [`pricing`] - Line item price (rate × weight + wastage + making + stones)
//! - [`order`] - Order totals with discount and tax
//! - [`rates`] - Rate provider trait and in-memory rate master
//! - [`product`] - Jewelry product and tagged field updates
//! - [`report`] - Stock and sales summaries
//! - [`error`] - Domain error types
//! - [`validation`] - Field validation
//!
//! ## Example Usage
//!
//! ```rust
//! use aurum_core::money::Money;
//! use aurum_core::order::{compute_order_totals, TotalsPolicy};
//! use aurum_core::pricing::{calculate_line_price, MakingCharge, PricingInput};
//! use aurum_core::types::Weight;
//!
//! let input = PricingInput::new(
//!     Weight::from_mg(9800),
//!     Money::from_cents(550000),
//!     800,
//!     MakingCharge::Flat { amount_cents: 500000 },
//! );
//! let line = calculate_line_price(&input).unwrap();
//!
//! let totals = compute_order_totals(&[line], Money::zero(), &TotalsPolicy::default()).unwrap();
//! assert_eq!(totals.subtotal.cents(), 6321200);
//! assert_eq!(totals.tax.cents(), 189636);   // 3% of ₹63212.00
//! assert_eq!(totals.grand_total.cents(), 6510836);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod order;
pub mod pricing;
pub mod product;
pub mod rates;
pub mod report;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use order::{compute_order_totals, OrderTotals, TaxBreakdown, TotalsPolicy};
pub use pricing::{
    calculate_line_price, quote_product, MakingCharge, MakingChargeMode, PricedLineItem,
    PricingInput,
};
pub use product::{JewelryProduct, ProductField};
pub use rates::{RateEntry, RateProvider, RateTable};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Upper bound for product-level percentages (100%).
pub const MAX_PERCENT_BPS: i64 = 10_000;

/// Maximum number of lines on a single order.
///
/// ## Business Reason
/// Invoices are printed on a single A4 page.
pub const MAX_ORDER_LINES: usize = 50;
