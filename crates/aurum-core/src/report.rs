//! # Reports
//!
//! Stock and sales summaries computed over in-memory collections.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::order::OrderTotals;
use crate::product::JewelryProduct;
use crate::types::{MetalType, Purity, Weight};

/// Stock on hand for one (metal, purity) grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct StockSummaryRow {
    pub metal: MetalType,
    pub purity: Purity,
    /// Number of pieces on hand.
    pub pieces: i64,
    /// Net metal weight of all pieces on hand.
    pub net_weight: Weight,
}

/// Groups active, in-stock products by metal and purity.
///
/// Rows are ordered by metal, then by purity from finest to coarsest.
pub fn summarize_stock(products: &[JewelryProduct]) -> Vec<StockSummaryRow> {
    let mut grades: BTreeMap<(MetalType, std::cmp::Reverse<Purity>), StockSummaryRow> =
        BTreeMap::new();

    for product in products.iter().filter(|p| p.is_active && p.current_stock > 0) {
        let row = grades
            .entry((product.metal, std::cmp::Reverse(product.purity)))
            .or_insert(StockSummaryRow {
                metal: product.metal,
                purity: product.purity,
                pieces: 0,
                net_weight: Weight::zero(),
            });
        row.pieces += product.current_stock;
        row.net_weight = row.net_weight + product.net_weight() * product.current_stock;
    }

    grades.into_values().collect()
}

/// Totals across a set of orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SalesSummary {
    pub order_count: usize,
    pub subtotal: Money,
    pub discount: Money,
    pub tax: Money,
    pub grand_total: Money,
}

pub fn summarize_sales(orders: &[OrderTotals]) -> SalesSummary {
    orders.iter().fold(SalesSummary::default(), |acc, t| SalesSummary {
        order_count: acc.order_count + 1,
        subtotal: acc.subtotal + t.subtotal,
        discount: acc.discount + t.discount,
        tax: acc.tax + t.tax,
        grand_total: acc.grand_total + t.grand_total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::{compute_order_totals, TotalsPolicy};
    use crate::pricing::PricedLineItem;

    fn piece(metal: MetalType, purity: Purity, net_mg: i64, stock: i64) -> JewelryProduct {
        let mut p = JewelryProduct::new("TAG-1", "Piece", metal, purity);
        p.gross_weight_mg = net_mg;
        p.net_weight_mg = net_mg;
        p.current_stock = stock;
        p
    }

    #[test]
    fn test_stock_summary_groups_and_orders() {
        let mut retired = piece(MetalType::Gold, Purity::K22, 5_000, 4);
        retired.is_active = false;

        let products = vec![
            piece(MetalType::Silver, Purity::STERLING, 20_000, 10),
            piece(MetalType::Gold, Purity::K18, 3_000, 1),
            piece(MetalType::Gold, Purity::K22, 9_800, 2),
            piece(MetalType::Gold, Purity::K22, 1_200, 1),
            piece(MetalType::Gold, Purity::K22, 7_000, 0),
            retired,
        ];

        let rows = summarize_stock(&products);
        assert_eq!(rows.len(), 3);

        assert_eq!((rows[0].metal, rows[0].purity), (MetalType::Gold, Purity::K22));
        assert_eq!(rows[0].pieces, 3);
        assert_eq!(rows[0].net_weight.mg(), 9_800 * 2 + 1_200);

        assert_eq!((rows[1].metal, rows[1].purity), (MetalType::Gold, Purity::K18));
        assert_eq!(rows[2].metal, MetalType::Silver);
        assert_eq!(rows[2].net_weight.mg(), 200_000);
    }

    #[test]
    fn test_stock_summary_empty() {
        assert!(summarize_stock(&[]).is_empty());
    }

    #[test]
    fn test_sales_summary() {
        let line = |cents| PricedLineItem {
            base_price: Money::from_cents(cents),
            wastage_amount: Money::zero(),
            making_amount: Money::zero(),
            stone_value: Money::zero(),
            final_price: Money::from_cents(cents),
        };
        let policy = TotalsPolicy::default();
        let a = compute_order_totals(&[line(6321200)], Money::zero(), &policy).unwrap();
        let b = compute_order_totals(&[line(18000000)], Money::from_cents(200000), &policy).unwrap();

        let summary = summarize_sales(&[a, b]);
        assert_eq!(summary.order_count, 2);
        assert_eq!(summary.subtotal.cents(), 24321200);
        assert_eq!(summary.discount.cents(), 200000);
        assert_eq!(summary.tax, a.tax + b.tax);
        assert_eq!(summary.grand_total, a.grand_total + b.grand_total);

        assert_eq!(summarize_sales(&[]), SalesSummary::default());
    }
}
