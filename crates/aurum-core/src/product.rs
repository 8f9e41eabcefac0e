//! # Jewelry Product
//!
//! A tagged piece in stock and the explicit field-update contract used by
//! the product edit screen.
//!
//! ## Field Updates
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Edit screen changes "Net Weight" to 9.800 g                            │
//! │          │                                                              │
//! │          ▼                                                              │
//! │  ProductField::NetWeightMg(9800)                                        │
//! │          │                                                              │
//! │          ▼                                                              │
//! │  product.apply(update)                                                  │
//! │          ├── validate against the other fields (net <= gross)           │
//! │          ├── Err → product untouched                                    │
//! │          └── Ok  → field written, updated_at bumped                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreResult;
use crate::money::Money;
use crate::pricing::{MakingCharge, PricingInput};
use crate::types::{MetalType, Purity, Weight};
use crate::validation::{
    ensure_non_negative, validate_huid, validate_net_within_gross, validate_percentage_bps,
    validate_product_name, validate_sku,
};

// =============================================================================
// Jewelry Product
// =============================================================================

/// A piece available for sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct JewelryProduct {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Tag number printed on the piece.
    pub sku: String,

    /// Hallmark Unique Identification, when hallmarked.
    pub huid: Option<String>,

    /// Display name shown to the cashier and on the invoice.
    pub name: String,

    pub metal: MetalType,
    pub purity: Purity,

    /// Total weight including stones, in milligrams.
    pub gross_weight_mg: i64,

    /// Metal weight excluding stones, in milligrams.
    pub net_weight_mg: i64,

    /// Wastage surcharge in basis points.
    pub wastage_bps: i64,

    pub making_charge: MakingCharge,

    /// Value of certified stones, in paise.
    pub stone_value_cents: i64,

    /// Pieces on hand.
    pub current_stock: i64,

    /// Whether the product is active (soft delete).
    pub is_active: bool,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl JewelryProduct {
    /// Creates an active product with zero weights and no stock.
    pub fn new(sku: &str, name: &str, metal: MetalType, purity: Purity) -> Self {
        let now = Utc::now();
        JewelryProduct {
            id: uuid::Uuid::new_v4().to_string(),
            sku: sku.trim().to_string(),
            huid: None,
            name: name.trim().to_string(),
            metal,
            purity,
            gross_weight_mg: 0,
            net_weight_mg: 0,
            wastage_bps: 0,
            making_charge: MakingCharge::none(),
            stone_value_cents: 0,
            current_stock: 0,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[inline]
    pub fn net_weight(&self) -> Weight {
        Weight::from_mg(self.net_weight_mg)
    }

    #[inline]
    pub fn gross_weight(&self) -> Weight {
        Weight::from_mg(self.gross_weight_mg)
    }

    #[inline]
    pub fn stone_value(&self) -> Money {
        Money::from_cents(self.stone_value_cents)
    }

    /// Builds the pricing input for this piece at a given rate.
    pub fn pricing_input(&self, rate_per_gram: Money) -> PricingInput {
        PricingInput::new(
            self.net_weight(),
            rate_per_gram,
            self.wastage_bps,
            self.making_charge,
        )
        .with_stone_value(self.stone_value())
    }

    /// Checks every field rule at once (used before first save).
    pub fn validate(&self) -> CoreResult<()> {
        validate_sku(&self.sku)?;
        validate_product_name(&self.name)?;
        if let Some(huid) = &self.huid {
            validate_huid(huid)?;
        }
        ensure_non_negative("gross weight", self.gross_weight_mg)?;
        ensure_non_negative("net weight", self.net_weight_mg)?;
        validate_net_within_gross(self.net_weight_mg, self.gross_weight_mg)?;
        validate_percentage_bps("wastage", self.wastage_bps)?;
        validate_making_charge(&self.making_charge)?;
        ensure_non_negative("stone value", self.stone_value_cents)?;
        ensure_non_negative("stock", self.current_stock)?;
        Ok(())
    }

    /// Applies a single field update.
    ///
    /// The update is validated against the rest of the product before
    /// anything is written; on error the product is unchanged.
    ///
    /// ## Example
    /// ```rust
    /// use aurum_core::product::{JewelryProduct, ProductField};
    /// use aurum_core::types::{MetalType, Purity};
    ///
    /// let mut ring = JewelryProduct::new("RNG-01", "Solitaire Ring", MetalType::Gold, Purity::K18);
    /// ring.apply(ProductField::GrossWeightMg(4200)).unwrap();
    /// ring.apply(ProductField::NetWeightMg(3900)).unwrap();
    ///
    /// // Net weight may not exceed gross weight.
    /// assert!(ring.apply(ProductField::NetWeightMg(5000)).is_err());
    /// assert_eq!(ring.net_weight_mg, 3900);
    /// ```
    pub fn apply(&mut self, update: ProductField) -> CoreResult<()> {
        match update {
            ProductField::Name(name) => {
                validate_product_name(&name)?;
                self.name = name.trim().to_string();
            }
            ProductField::Huid(huid) => {
                self.huid = huid.as_deref().map(validate_huid).transpose()?;
            }
            ProductField::GrossWeightMg(mg) => {
                ensure_non_negative("gross weight", mg)?;
                validate_net_within_gross(self.net_weight_mg, mg)?;
                self.gross_weight_mg = mg;
            }
            ProductField::NetWeightMg(mg) => {
                ensure_non_negative("net weight", mg)?;
                validate_net_within_gross(mg, self.gross_weight_mg)?;
                self.net_weight_mg = mg;
            }
            ProductField::WastageBps(bps) => {
                validate_percentage_bps("wastage", bps)?;
                self.wastage_bps = bps;
            }
            ProductField::MakingCharge(charge) => {
                validate_making_charge(&charge)?;
                self.making_charge = charge;
            }
            ProductField::StoneValueCents(cents) => {
                ensure_non_negative("stone value", cents)?;
                self.stone_value_cents = cents;
            }
            ProductField::CurrentStock(stock) => {
                ensure_non_negative("stock", stock)?;
                self.current_stock = stock;
            }
            ProductField::IsActive(active) => {
                self.is_active = active;
            }
        }

        self.updated_at = Utc::now();
        Ok(())
    }
}

fn validate_making_charge(charge: &MakingCharge) -> CoreResult<()> {
    match *charge {
        MakingCharge::Flat { amount_cents } => ensure_non_negative("making charge", amount_cents),
        MakingCharge::Percent { bps } => {
            validate_percentage_bps("making charge percentage", bps)?;
            Ok(())
        }
    }
}

// =============================================================================
// Product Field
// =============================================================================

/// One editable product field together with its new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum ProductField {
    Name(String),
    Huid(Option<String>),
    GrossWeightMg(i64),
    NetWeightMg(i64),
    WastageBps(i64),
    MakingCharge(MakingCharge),
    StoneValueCents(i64),
    CurrentStock(i64),
    IsActive(bool),
}

// =============================================================================
// Unit Tests
// =============================================================================
