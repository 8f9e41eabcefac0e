//! # Domain Types
//!
//! Small value types shared by pricing, rates and products.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Value Types                                     │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    TaxRate      │   │     Weight      │   │    MetalType    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  bps (u32)      │   │  mg (i64)       │   │  Gold           │       │
//! │  │  300 = 3%       │   │  9800 = 9.8 g   │   │  Silver         │       │
//! │  └─────────────────┘   └─────────────────┘   │  Platinum       │       │
//! │                                              └─────────────────┘       │
//! │  ┌─────────────────┐   ┌─────────────────┐                              │
//! │  │     Purity      │   │  DiscountMode   │                              │
//! │  │  ─────────────  │   │  ─────────────  │                              │
//! │  │  per mille      │   │  Clamp          │                              │
//! │  │  916 = 22K      │   │  Strict         │                              │
//! │  └─────────────────┘   └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 300 bps = 3% (GST on jewelry, charged as 1.5% CGST + 1.5% SGST)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// The 3% rate applied to jewelry sales.
    pub const JEWELRY_GST: TaxRate = TaxRate(300);

    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a percentage (for config parsing).
    pub fn from_percentage(pct: f64) -> Self {
        TaxRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::JEWELRY_GST
    }
}

// =============================================================================
// Weight
// =============================================================================

/// A metal weight in milligrams.
///
/// Counter scales read to three decimal places of a gram, so milligrams hold
/// every weight exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Weight(i64);

impl Weight {
    #[inline]
    pub const fn from_mg(mg: i64) -> Self {
        Weight(mg)
    }

    /// Creates a weight from whole grams and a milligram remainder.
    ///
    /// ```rust
    /// use aurum_core::types::Weight;
    ///
    /// assert_eq!(Weight::from_grams_mg(9, 800).mg(), 9800);
    /// ```
    #[inline]
    pub const fn from_grams_mg(grams: i64, mg: i64) -> Self {
        Weight(grams * 1000 + mg)
    }

    #[inline]
    pub const fn mg(&self) -> i64 {
        self.0
    }

    #[inline]
    pub const fn zero() -> Self {
        Weight(0)
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:03} g", sign, (self.0 / 1000).abs(), (self.0 % 1000).abs())
    }
}

impl std::ops::Add for Weight {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Weight(self.0 + other.0)
    }
}

impl std::ops::Mul<i64> for Weight {
    type Output = Self;

    #[inline]
    fn mul(self, pieces: i64) -> Self {
        Weight(self.0 * pieces)
    }
}

// =============================================================================
// Metal Type
// =============================================================================

/// The precious metal a piece is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum MetalType {
    Gold,
    Silver,
    Platinum,
}

impl fmt::Display for MetalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MetalType::Gold => "gold",
            MetalType::Silver => "silver",
            MetalType::Platinum => "platinum",
        };
        f.write_str(name)
    }
}

// =============================================================================
// Purity
// =============================================================================

/// Metal fineness in parts per thousand, as stamped by the hallmark.
///
/// ## Common Grades
/// | Grade        | Fineness |
/// |--------------|----------|
/// | 24K          | 999      |
/// | 22K          | 916      |
/// | 18K          | 750      |
/// | 14K          | 585      |
/// | Sterling     | 925      |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Purity(u16);

impl Purity {
    pub const K24: Purity = Purity(999);
    pub const K22: Purity = Purity(916);
    pub const K18: Purity = Purity(750);
    pub const K14: Purity = Purity(585);
    pub const STERLING: Purity = Purity(925);

    /// Creates a purity from fineness per mille. Values above 999 are not
    /// hallmarkable and are rejected.
    pub const fn from_fineness(per_mille: u16) -> Option<Self> {
        if per_mille == 0 || per_mille > 999 {
            None
        } else {
            Some(Purity(per_mille))
        }
    }

    /// Maps a karat grade to its hallmark fineness.
    ///
    /// ```rust
    /// use aurum_core::types::Purity;
    ///
    /// assert_eq!(Purity::from_karat(22), Some(Purity::K22));
    /// assert_eq!(Purity::from_karat(21), None);
    /// ```
    pub const fn from_karat(karat: u8) -> Option<Self> {
        match karat {
            24 => Some(Purity(999)),
            23 => Some(Purity(958)),
            22 => Some(Purity(916)),
            20 => Some(Purity(833)),
            18 => Some(Purity(750)),
            14 => Some(Purity(585)),
            9 => Some(Purity(375)),
            _ => None,
        }
    }

    #[inline]
    pub const fn fineness(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for Purity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Discount Mode
// =============================================================================

/// What to do when a discount exceeds the order subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum DiscountMode {
    /// Reduce the discount to the subtotal.
    Clamp,
    /// Reject with `CoreError::InvalidDiscount`.
    Strict,
}

impl Default for DiscountMode {
    fn default() -> Self {
        DiscountMode::Clamp
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
