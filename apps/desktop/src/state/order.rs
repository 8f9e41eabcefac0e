//! # Order State
//!
//! Manages the order currently being written up at the counter.
//!
//! ## Thread Safety
//! The order is wrapped in `Arc<Mutex<T>>` because several commands may
//! touch it and only one should modify it at a time.
//!
//! ## Order Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order State Operations                               │
//! │                                                                         │
//! │  Frontend Action          Command                  Order State Change   │
//! │  ───────────────          ───────                  ──────────────────   │
//! │                                                                         │
//! │  Scan tag / enter item ──► add_order_line() ─────► lines.push(line)    │
//! │                                                                         │
//! │  Click Remove ───────────► remove_order_line() ──► lines.remove(i)     │
//! │                                                                         │
//! │  Enter discount ─────────► set_order_discount() ─► discount = d        │
//! │                                                                         │
//! │  Click Clear ────────────► clear_order() ────────► lines.clear()       │
//! │                                                                         │
//! │  View order ─────────────► get_order() ──────────► (read only)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use aurum_core::{
    calculate_line_price, compute_order_totals, CoreResult, Money, OrderTotals, PricedLineItem,
    PricingInput, TotalsPolicy, MAX_ORDER_LINES,
};

/// A line on the order.
///
/// The priced components are recomputed from `input` whenever the line is
/// created; a line never carries a price that disagrees with its input.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    /// Line ID (UUID)
    pub id: String,

    /// Product this line was quoted from, if any
    pub product_id: Option<String>,

    /// Text printed on the invoice
    pub description: String,

    pub input: PricingInput,

    pub priced: PricedLineItem,

    pub added_at: DateTime<Utc>,
}

impl OrderLine {
    /// Prices the input and wraps it as a new line.
    pub fn new(description: &str, product_id: Option<String>, input: PricingInput) -> CoreResult<Self> {
        let priced = calculate_line_price(&input)?;
        Ok(OrderLine {
            id: uuid::Uuid::new_v4().to_string(),
            product_id,
            description: description.trim().to_string(),
            input,
            priced,
            added_at: Utc::now(),
        })
    }
}

/// The order being built.
///
/// ## Invariants
/// - At most `MAX_ORDER_LINES` lines
/// - Discount is never negative
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub lines: Vec<OrderLine>,

    /// Discount as entered by the cashier
    pub discount: Money,

    pub created_at: DateTime<Utc>,
}

impl Default for Order {
    fn default() -> Self {
        Self::new()
    }
}

impl Order {
    pub fn new() -> Self {
        Order {
            lines: Vec::new(),
            discount: Money::zero(),
            created_at: Utc::now(),
        }
    }

    /// Appends a priced line.
    pub fn add_line(&mut self, line: OrderLine) -> Result<(), String> {
        if self.lines.len() >= MAX_ORDER_LINES {
            return Err(format!(
                "Order cannot have more than {} lines",
                MAX_ORDER_LINES
            ));
        }
        self.lines.push(line);
        Ok(())
    }

    /// Removes a line by ID.
    pub fn remove_line(&mut self, line_id: &str) -> Result<OrderLine, String> {
        let index = self
            .lines
            .iter()
            .position(|l| l.id == line_id)
            .ok_or_else(|| format!("Line {} not in order", line_id))?;
        Ok(self.lines.remove(index))
    }

    /// Records the discount entered by the cashier.
    ///
    /// Range checks against the subtotal happen in `totals`.
    pub fn set_discount(&mut self, discount: Money) -> Result<(), String> {
        if discount.is_negative() {
            return Err("Discount must not be negative".to_string());
        }
        self.discount = discount;
        Ok(())
    }

    /// Clears all lines and the discount.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.discount = Money::zero();
        self.created_at = Utc::now();
    }

    pub fn priced_lines(&self) -> Vec<PricedLineItem> {
        self.lines.iter().map(|l| l.priced).collect()
    }

    pub fn totals(&self, policy: &TotalsPolicy) -> CoreResult<OrderTotals> {
        compute_order_totals(&self.priced_lines(), self.discount, policy)
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Shared order state.
#[derive(Debug)]
pub struct OrderState {
    order: Arc<Mutex<Order>>,
}

impl OrderState {
    pub fn new() -> Self {
        OrderState {
            order: Arc::new(Mutex::new(Order::new())),
        }
    }

    /// Executes a function with read access to the order.
    pub fn with_order<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Order) -> R,
    {
        let order = self.order.lock().expect("Order mutex poisoned");
        f(&order)
    }

    /// Executes a function with write access to the order.
    pub fn with_order_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Order) -> R,
    {
        let mut order = self.order.lock().expect("Order mutex poisoned");
        f(&mut order)
    }
}

impl Default for OrderState {
    fn default() -> Self {
        Self::new()
    }
}
