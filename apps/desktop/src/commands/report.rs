//! # Report Commands
//!
//! End-of-day summaries for the back office.

use tracing::debug;

use aurum_core::report::{summarize_sales, summarize_stock, SalesSummary, StockSummaryRow};
use aurum_core::OrderTotals;

use crate::state::CatalogState;

/// Stock on hand grouped by metal and purity.
pub fn stock_report(catalog: &CatalogState) -> Vec<StockSummaryRow> {
    debug!("stock_report command");
    catalog.with_products(summarize_stock)
}

/// Totals across the orders the shell has recorded for a period.
pub fn sales_report(orders: &[OrderTotals]) -> SalesSummary {
    debug!(orders = orders.len(), "sales_report command");
    summarize_sales(orders)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aurum_core::{JewelryProduct, MetalType, Purity, TotalsPolicy};

    #[test]
    fn test_stock_report() {
        let mut chain = JewelryProduct::new("CHN-1", "Rope Chain", MetalType::Gold, Purity::K22);
        chain.gross_weight_mg = 12_500;
        chain.net_weight_mg = 12_500;
        chain.current_stock = 2;
        let mut anklet = JewelryProduct::new("ANK-1", "Anklet", MetalType::Silver, Purity::STERLING);
        anklet.gross_weight_mg = 40_000;
        anklet.net_weight_mg = 40_000;
        anklet.current_stock = 1;
        let catalog = CatalogState::from_products(vec![anklet, chain]);

        let rows = stock_report(&catalog);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].metal, MetalType::Gold);
        assert_eq!(rows[0].pieces, 2);
        assert_eq!(rows[0].net_weight.mg(), 25_000);
        assert_eq!(rows[1].metal, MetalType::Silver);
    }

    #[test]
    fn test_sales_report() {
        let policy = TotalsPolicy::default();
        let line = aurum_core::calculate_line_price(&aurum_core::PricingInput::new(
            aurum_core::Weight::from_mg(9800),
            aurum_core::Money::from_cents(550000),
            800,
            aurum_core::MakingCharge::Flat { amount_cents: 500000 },
        ))
        .unwrap();
        let totals = aurum_core::compute_order_totals(&[line], aurum_core::Money::zero(), &policy)
            .unwrap();

        let summary = sales_report(&[totals, totals]);
        assert_eq!(summary.order_count, 2);
        assert_eq!(summary.grand_total.cents(), 2 * 6510836);
        assert_eq!(sales_report(&[]), SalesSummary::default());
    }
}
