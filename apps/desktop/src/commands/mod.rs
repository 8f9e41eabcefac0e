//! # Commands Module
//!
//! Functions the desktop shell invokes. Each takes only the state it needs
//! and returns `Result<T, ApiError>`.
//!
//! ## Command Groups
//! - [`pricing`] - quote_line_price, quote_product
//! - [`order`] - get_order, add_order_line, add_product_to_order,
//!   remove_order_line, set_order_discount, clear_order
//! - [`rates`] - set_metal_rate, get_metal_rate, get_rate_history, get_rate_board
//! - [`catalog`] - add_product, update_product, list_products
//! - [`report`] - stock_report, sales_report
//! - [`config`] - get_config

pub mod catalog;
pub mod config;
pub mod order;
pub mod pricing;
pub mod rates;
pub mod report;

use chrono::{Local, NaiveDate};

/// The business day at the counter.
pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}
