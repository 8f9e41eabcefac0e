//! # Order Commands
//!
//! Commands for building the order at the counter.
//!
//! ## Order Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│  Lines   │────►│ Discount │────►│ Invoice  │       │
//! │  │  Order   │     │  priced  │     │ & totals │     │ (shell)  │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                                                │
//! │                   add_order_line                                        │
//! │                   add_product_to_order                                  │
//! │                   remove_order_line                                     │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear_order ─────────────────────► (back to empty)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use aurum_core::{Money, OrderTotals};
use aurum_core::validation::validate_uuid;

use crate::commands::pricing::QuoteRequest;
use crate::error::ApiError;
use crate::state::{CatalogState, ConfigState, Order, OrderLine, OrderState, RateState};

/// Order response including lines, totals and display strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub lines: Vec<OrderLine>,
    pub totals: OrderTotals,
    /// Grand total formatted with the store currency
    pub grand_total_display: String,
}

impl OrderResponse {
    fn build(order: &Order, config: &ConfigState) -> Result<Self, ApiError> {
        let totals = order.totals(&config.totals_policy())?;
        Ok(OrderResponse {
            lines: order.lines.clone(),
            totals,
            grand_total_display: config.format_currency(totals.grand_total.cents()),
        })
    }

    /// Builds the response after a mutation, storing a clamped discount
    /// back on the order.
    fn settle(order: &mut Order, config: &ConfigState) -> Result<Self, ApiError> {
        let response = Self::build(order, config)?;
        if response.totals.discount != order.discount {
            warn!(
                entered = %order.discount,
                applied = %response.totals.discount,
                "Discount clamped to subtotal"
            );
            order.discount = response.totals.discount;
        }
        Ok(response)
    }
}

/// Applies `mutate` to the order and settles the totals.
///
/// On any error the order is restored to what it was before the call.
fn update_order<F>(
    order: &OrderState,
    config: &ConfigState,
    mutate: F,
) -> Result<OrderResponse, ApiError>
where
    F: FnOnce(&mut Order) -> Result<(), ApiError>,
{
    order.with_order_mut(|o| {
        let before = o.clone();
        let result = mutate(o).and_then(|()| OrderResponse::settle(o, config));
        if result.is_err() {
            *o = before;
        }
        result
    })
}

/// Request body for a manually quoted line.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddLineRequest {
    pub description: String,
    pub quote: QuoteRequest,
}

/// Gets the current order with totals.
pub fn get_order(order: &OrderState, config: &ConfigState) -> Result<OrderResponse, ApiError> {
    debug!("get_order command");
    order.with_order(|o| OrderResponse::build(o, config))
}

/// Prices a manually entered piece and adds it to the order.
pub fn add_order_line(
    order: &OrderState,
    config: &ConfigState,
    request: AddLineRequest,
) -> Result<OrderResponse, ApiError> {
    debug!(description = %request.description, "add_order_line command");

    if request.description.trim().is_empty() {
        return Err(ApiError::validation("description is required"));
    }

    let line = OrderLine::new(&request.description, None, request.quote.into_input(config))?;

    update_order(order, config, |o| o.add_line(line).map_err(ApiError::order))
}

/// Prices a stocked product at the rate in force and adds it to the order.
///
/// A product can be on the order at most `current_stock` times.
pub fn add_product_to_order(
    order: &OrderState,
    config: &ConfigState,
    rates: &RateState,
    catalog: &CatalogState,
    product_id: &str,
    on: Option<NaiveDate>,
) -> Result<OrderResponse, ApiError> {
    let on = on.unwrap_or_else(super::today);
    debug!(product_id = %product_id, on = %on, "add_product_to_order command");

    let product = catalog.get(product_id)?;
    if !product.is_active {
        return Err(ApiError::validation("Product is not available for sale"));
    }
    if product.current_stock <= 0 {
        return Err(ApiError::order(format!("{} is out of stock", product.sku)));
    }

    let rate = aurum_core::RateProvider::rate_on(rates, product.metal, product.purity, on)?;
    let description = match &product.huid {
        Some(huid) => format!("{} (HUID {})", product.name, huid),
        None => product.name.clone(),
    };
    let line = OrderLine::new(&description, Some(product.id.clone()), product.pricing_input(rate))?;

    update_order(order, config, |o| {
        let on_order = o
            .lines
            .iter()
            .filter(|l| l.product_id.as_deref() == Some(product.id.as_str()))
            .count() as i64;
        if on_order >= product.current_stock {
            return Err(ApiError::order(format!(
                "{} is out of stock ({} on hand, {} on order)",
                product.sku, product.current_stock, on_order
            )));
        }
        o.add_line(line).map_err(ApiError::order)
    })
}

/// Removes a line from the order.
///
/// In strict mode a removal that leaves the discount above the subtotal is
/// rejected and the line stays.
pub fn remove_order_line(
    order: &OrderState,
    config: &ConfigState,
    line_id: &str,
) -> Result<OrderResponse, ApiError> {
    debug!(line_id = %line_id, "remove_order_line command");
    validate_uuid(line_id).map_err(|e| ApiError::validation(e.to_string()))?;

    update_order(order, config, |o| {
        o.remove_line(line_id).map(drop).map_err(ApiError::order)
    })
}

/// Sets the order discount.
///
/// In strict mode a discount above the subtotal is rejected and the
/// previous discount is kept.
pub fn set_order_discount(
    order: &OrderState,
    config: &ConfigState,
    discount_cents: i64,
) -> Result<OrderResponse, ApiError> {
    debug!(discount_cents = discount_cents, "set_order_discount command");

    update_order(order, config, |o| {
        o.set_discount(Money::from_cents(discount_cents))
            .map_err(ApiError::validation)
    })
}

/// Clears the order.
pub fn clear_order(order: &OrderState, config: &ConfigState) -> Result<OrderResponse, ApiError> {
    debug!("clear_order command");
    update_order(order, config, |o| {
        o.clear();
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use aurum_core::{JewelryProduct, MakingCharge, MetalType, Purity};

    fn bangle_request() -> AddLineRequest {
        AddLineRequest {
            description: "22K Bangle".to_string(),
            quote: QuoteRequest {
                net_weight_mg: 9800,
                rate_per_gram_cents: 550000,
                wastage_bps: 800,
                making_charge: 500000,
                stone_value_cents: 0,
            },
        }
    }

    fn necklace_request() -> AddLineRequest {
        // 30 g × ₹5500.00 = ₹165000.00 + ₹15000.00 making = ₹180000.00
        AddLineRequest {
            description: "Temple Necklace".to_string(),
            quote: QuoteRequest {
                net_weight_mg: 30_000,
                rate_per_gram_cents: 550000,
                wastage_bps: 0,
                making_charge: 1_500_000,
                stone_value_cents: 0,
            },
        }
    }

    #[test]
    fn test_order_flow_matches_reference_totals() {
        let order = OrderState::new();
        let config = ConfigState::default();

        add_order_line(&order, &config, bangle_request()).unwrap();
        add_order_line(&order, &config, necklace_request()).unwrap();
        let response = set_order_discount(&order, &config, 200000).unwrap();

        assert_eq!(response.totals.subtotal.cents(), 24321200);
        assert_eq!(response.totals.tax.cents(), 723636);
        assert_eq!(response.totals.grand_total.cents(), 24844836);
        assert_eq!(response.grand_total_display, "₹248448.36");
    }

    #[test]
    fn test_remove_line_updates_totals() {
        let order = OrderState::new();
        let config = ConfigState::default();

        let response = add_order_line(&order, &config, bangle_request()).unwrap();
        let line_id = response.lines[0].id.clone();

        let response = remove_order_line(&order, &config, &line_id).unwrap();
        assert!(response.lines.is_empty());
        assert!(response.totals.grand_total.is_zero());

        let err = remove_order_line(&order, &config, &line_id).unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderError);

        let err = remove_order_line(&order, &config, "not-a-uuid").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_clamped_discount() {
        let order = OrderState::new();
        let config = ConfigState::default();
        add_order_line(&order, &config, bangle_request()).unwrap();

        let response = set_order_discount(&order, &config, 9_999_999).unwrap();
        assert_eq!(response.totals.discount.cents(), 6321200);
        assert!(response.totals.grand_total.is_zero());
        assert_eq!(order.with_order(|o| o.discount.cents()), 6321200);
    }

    fn plain_line(description: &str, cents: i64) -> AddLineRequest {
        // 1 g at `cents` per gram, no wastage or making
        AddLineRequest {
            description: description.to_string(),
            quote: QuoteRequest {
                net_weight_mg: 1_000,
                rate_per_gram_cents: cents,
                wastage_bps: 0,
                making_charge: 0,
                stone_value_cents: 0,
            },
        }
    }

    #[test]
    fn test_clamped_discount_does_not_grow_with_new_lines() {
        let order = OrderState::new();
        let config = ConfigState::default();
        add_order_line(&order, &config, plain_line("Silver Coin", 10_000)).unwrap();

        let response = set_order_discount(&order, &config, 1_000_000).unwrap();
        assert_eq!(response.totals.discount.cents(), 10_000);

        let response = add_order_line(&order, &config, plain_line("Gold Coin", 500_000)).unwrap();
        assert_eq!(response.totals.subtotal.cents(), 510_000);
        assert_eq!(response.totals.discount.cents(), 10_000);
        assert_eq!(response.totals.price_before_tax.cents(), 500_000);
        assert_eq!(response.totals.grand_total.cents(), 515_000);
    }

    #[test]
    fn test_strict_removal_that_breaks_discount_is_rolled_back() {
        let order = OrderState::new();
        let config = ConfigState {
            strict_discount: true,
            ..ConfigState::default()
        };
        let response = add_order_line(&order, &config, plain_line("Silver Coin", 10_000)).unwrap();
        let first_id = response.lines[0].id.clone();
        add_order_line(&order, &config, plain_line("Silver Coin", 10_000)).unwrap();
        set_order_discount(&order, &config, 15_000).unwrap();

        let err = remove_order_line(&order, &config, &first_id).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidDiscount);
        assert_eq!(order.with_order(|o| o.line_count()), 2);
        assert_eq!(order.with_order(|o| o.discount.cents()), 15_000);

        // Lowering the discount first lets the removal through
        set_order_discount(&order, &config, 5_000).unwrap();
        let response = remove_order_line(&order, &config, &first_id).unwrap();
        assert_eq!(response.lines.len(), 1);
        assert_eq!(response.totals.grand_total.cents(), 5_150);
    }

    #[test]
    fn test_strict_discount_keeps_previous_value() {
        let order = OrderState::new();
        let config = ConfigState {
            strict_discount: true,
            ..ConfigState::default()
        };
        add_order_line(&order, &config, bangle_request()).unwrap();
        set_order_discount(&order, &config, 1000).unwrap();

        let err = set_order_discount(&order, &config, 9_999_999).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidDiscount);
        assert_eq!(order.with_order(|o| o.discount.cents()), 1000);
    }

    #[test]
    fn test_negative_inputs_rejected() {
        let order = OrderState::new();
        let config = ConfigState::default();

        let mut request = bangle_request();
        request.quote.stone_value_cents = -1;
        assert_eq!(
            add_order_line(&order, &config, request).unwrap_err().code,
            ErrorCode::ValidationError
        );

        assert_eq!(
            set_order_discount(&order, &config, -1).unwrap_err().code,
            ErrorCode::ValidationError
        );
        assert!(order.with_order(|o| o.is_empty()));
    }

    #[test]
    fn test_add_product_to_order() {
        let day = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let order = OrderState::new();
        let config = ConfigState::default();
        let rates = RateState::new();
        rates
            .with_rates_mut(|r| r.set_rate(MetalType::Gold, Purity::K22, day, Money::from_cents(550000)))
            .unwrap();

        let catalog = CatalogState::new();
        let mut bangle = JewelryProduct::new("BNG-0001", "Plain Bangle", MetalType::Gold, Purity::K22);
        bangle.huid = Some("AB12CD".to_string());
        bangle.gross_weight_mg = 9_800;
        bangle.net_weight_mg = 9_800;
        bangle.wastage_bps = 800;
        bangle.making_charge = MakingCharge::Flat { amount_cents: 500000 };
        bangle.current_stock = 1;
        let id = bangle.id.clone();
        catalog.insert(bangle).unwrap();

        let response = add_product_to_order(&order, &config, &rates, &catalog, &id, Some(day)).unwrap();
        assert_eq!(response.lines[0].description, "Plain Bangle (HUID AB12CD)");
        assert_eq!(response.lines[0].product_id.as_deref(), Some(id.as_str()));
        assert_eq!(response.totals.subtotal.cents(), 6321200);

        // Only one piece on hand, and it is already on the order
        let err = add_product_to_order(&order, &config, &rates, &catalog, &id, Some(day)).unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderError);
        assert_eq!(order.with_order(|o| o.line_count()), 1);

        let err = add_product_to_order(&order, &config, &rates, &catalog, "missing", Some(day)).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_clear_order() {
        let order = OrderState::new();
        let config = ConfigState::default();
        add_order_line(&order, &config, bangle_request()).unwrap();

        let response = clear_order(&order, &config).unwrap();
        assert!(response.lines.is_empty());
        assert_eq!(response.totals, OrderTotals::zero());
    }
}
