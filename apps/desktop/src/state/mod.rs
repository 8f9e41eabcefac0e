//! # State Module
//!
//! Application state for the desktop shell.
//!
//! ## Why Multiple State Types?
//! Each command declares exactly the state it needs, and independent states
//! don't block each other.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐ ┌──────────────┐ ┌──────────────┐ ┌──────────────┐   │
//! │  │ ConfigState  │ │  OrderState  │ │  RateState   │ │ CatalogState │   │
//! │  │              │ │              │ │              │ │              │   │
//! │  │  tax rate    │ │  Arc<Mutex<  │ │  Arc<RwLock< │ │  Arc<RwLock< │   │
//! │  │  making mode │ │    Order     │ │   RateTable  │ │  Vec<Product>│   │
//! │  │  discount    │ │  >>          │ │  >>          │ │  >>          │   │
//! │  └──────────────┘ └──────────────┘ └──────────────┘ └──────────────┘   │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • ConfigState: read-only after initialization                         │
//! │  • OrderState: exclusive access through the mutex                      │
//! │  • RateState / CatalogState: many readers, one writer                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod catalog;
mod config;
mod order;
mod rates;

pub use catalog::CatalogState;
pub use config::ConfigState;
pub use order::{Order, OrderLine, OrderState};
pub use rates::RateState;
