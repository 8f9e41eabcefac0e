//! # Tauri Shell
//!
//! `#[tauri::command]` adapters over [`crate::commands`], compiled with the
//! `tauri-shell` feature. Each adapter pulls its state out of Tauri's
//! managed state and delegates; no logic lives here.
//!
//! ## Wiring
//! ```text
//! tauri::Builder::default()
//!     │
//!     ▼
//! shell::register(builder, AppStates::from_env())
//!     │  .manage(ConfigState) .manage(OrderState)
//!     │  .manage(RateState)   .manage(CatalogState)
//!     │  .invoke_handler(generate_handler![...])
//!     ▼
//! builder.run(tauri::generate_context!())   ◄─── in the app binary
//! ```

use chrono::NaiveDate;
use tauri::State;

use aurum_core::report::{SalesSummary, StockSummaryRow};
use aurum_core::{JewelryProduct, MetalType, OrderTotals, PricedLineItem, ProductField, RateEntry};

use crate::commands;
use crate::commands::catalog::NewProductRequest;
use crate::commands::order::{AddLineRequest, OrderResponse};
use crate::commands::pricing::QuoteRequest;
use crate::commands::rates::{RateResponse, SetRateRequest};
use crate::error::ApiError;
use crate::state::{CatalogState, ConfigState, OrderState, RateState};
use crate::AppStates;

/// Manages every state on `builder` and installs the command handler.
pub fn register<R: tauri::Runtime>(
    builder: tauri::Builder<R>,
    states: AppStates,
) -> tauri::Builder<R> {
    builder
        .manage(states.config)
        .manage(states.order)
        .manage(states.rates)
        .manage(states.catalog)
        .invoke_handler(tauri::generate_handler![
            // Config
            get_config,
            // Pricing
            quote_line_price,
            quote_product,
            // Order
            get_order,
            add_order_line,
            add_product_to_order,
            remove_order_line,
            set_order_discount,
            clear_order,
            // Rates
            set_metal_rate,
            get_metal_rate,
            get_rate_history,
            get_rate_board,
            // Catalog
            add_product,
            update_product,
            list_products,
            // Reports
            stock_report,
            sales_report,
        ])
}

// =============================================================================
// Config & Pricing
// =============================================================================

#[tauri::command]
pub fn get_config(config: State<'_, ConfigState>) -> ConfigState {
    commands::config::get_config(&config)
}

#[tauri::command]
pub fn quote_line_price(
    config: State<'_, ConfigState>,
    request: QuoteRequest,
) -> Result<PricedLineItem, ApiError> {
    commands::pricing::quote_line_price(&config, request)
}

#[tauri::command]
pub fn quote_product(
    rates: State<'_, RateState>,
    catalog: State<'_, CatalogState>,
    product_id: String,
    on: Option<NaiveDate>,
) -> Result<PricedLineItem, ApiError> {
    commands::pricing::quote_product(&rates, &catalog, &product_id, on)
}

// =============================================================================
// Order
// =============================================================================

#[tauri::command]
pub fn get_order(
    order: State<'_, OrderState>,
    config: State<'_, ConfigState>,
) -> Result<OrderResponse, ApiError> {
    commands::order::get_order(&order, &config)
}

#[tauri::command]
pub fn add_order_line(
    order: State<'_, OrderState>,
    config: State<'_, ConfigState>,
    request: AddLineRequest,
) -> Result<OrderResponse, ApiError> {
    commands::order::add_order_line(&order, &config, request)
}

#[tauri::command]
pub fn add_product_to_order(
    order: State<'_, OrderState>,
    config: State<'_, ConfigState>,
    rates: State<'_, RateState>,
    catalog: State<'_, CatalogState>,
    product_id: String,
    on: Option<NaiveDate>,
) -> Result<OrderResponse, ApiError> {
    commands::order::add_product_to_order(&order, &config, &rates, &catalog, &product_id, on)
}

#[tauri::command]
pub fn remove_order_line(
    order: State<'_, OrderState>,
    config: State<'_, ConfigState>,
    line_id: String,
) -> Result<OrderResponse, ApiError> {
    commands::order::remove_order_line(&order, &config, &line_id)
}

#[tauri::command]
pub fn set_order_discount(
    order: State<'_, OrderState>,
    config: State<'_, ConfigState>,
    discount_cents: i64,
) -> Result<OrderResponse, ApiError> {
    commands::order::set_order_discount(&order, &config, discount_cents)
}

#[tauri::command]
pub fn clear_order(
    order: State<'_, OrderState>,
    config: State<'_, ConfigState>,
) -> Result<OrderResponse, ApiError> {
    commands::order::clear_order(&order, &config)
}

// =============================================================================
// Rates
// =============================================================================

#[tauri::command]
pub fn set_metal_rate(
    rates: State<'_, RateState>,
    config: State<'_, ConfigState>,
    request: SetRateRequest,
) -> Result<RateResponse, ApiError> {
    commands::rates::set_metal_rate(&rates, &config, request)
}

#[tauri::command]
pub fn get_metal_rate(
    rates: State<'_, RateState>,
    config: State<'_, ConfigState>,
    metal: MetalType,
    fineness: u16,
    on: Option<NaiveDate>,
) -> Result<RateResponse, ApiError> {
    commands::rates::get_metal_rate(&rates, &config, metal, fineness, on)
}

#[tauri::command]
pub fn get_rate_history(
    rates: State<'_, RateState>,
    metal: MetalType,
    fineness: u16,
) -> Result<Vec<RateEntry>, ApiError> {
    commands::rates::get_rate_history(&rates, metal, fineness)
}

#[tauri::command]
pub fn get_rate_board(rates: State<'_, RateState>, on: Option<NaiveDate>) -> Vec<RateEntry> {
    commands::rates::get_rate_board(&rates, on)
}

// =============================================================================
// Catalog & Reports
// =============================================================================

#[tauri::command]
pub fn add_product(
    catalog: State<'_, CatalogState>,
    request: NewProductRequest,
) -> Result<JewelryProduct, ApiError> {
    commands::catalog::add_product(&catalog, request)
}

#[tauri::command]
pub fn update_product(
    catalog: State<'_, CatalogState>,
    product_id: String,
    update: ProductField,
) -> Result<JewelryProduct, ApiError> {
    commands::catalog::update_product(&catalog, &product_id, update)
}

#[tauri::command]
pub fn list_products(
    catalog: State<'_, CatalogState>,
    query: String,
    include_inactive: Option<bool>,
    limit: Option<usize>,
) -> Vec<JewelryProduct> {
    commands::catalog::list_products(&catalog, &query, include_inactive.unwrap_or(false), limit)
}

#[tauri::command]
pub fn stock_report(catalog: State<'_, CatalogState>) -> Vec<StockSummaryRow> {
    commands::report::stock_report(&catalog)
}

#[tauri::command]
pub fn sales_report(orders: Vec<OrderTotals>) -> SalesSummary {
    commands::report::sales_report(&orders)
}
