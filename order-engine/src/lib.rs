//! FlexOrder order composition engine
//!
//! The core behind a merchant's digital menu: it normalizes the
//! operator-authored menu document, prices customizations, manages the
//! cart, validates checkout input, tracks the daily opening window, caches
//! the merchant record locally, and assembles/submits orders through an
//! external transport.
//!
//! # Module structure
//!
//! ```text
//! order-engine/src/
//! ├── core/      # configuration, session state (the controller)
//! ├── catalog/   # menu document normalization
//! ├── pricing/   # customization applicability and price computation
//! ├── cart/      # cart line management
//! ├── checkout/  # delivery/payment form validation
//! ├── hours/     # open/closed status from the daily window
//! ├── cache/     # TTL cache over durable key-value storage
//! ├── client/    # remote fetch and order transport seams
//! ├── orders/    # order assembly and guarded submission
//! └── utils/     # logging setup
//! ```
//!
//! Presentation (screens, navigation, styling) and the concrete remote
//! backend live outside this crate and reach it through
//! [`core::AppState`] and the [`client`] traits.

pub mod cache;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod client;
pub mod core;
pub mod hours;
pub mod orders;
pub mod pricing;
pub mod utils;

// Re-export public types
pub use cache::{DataCache, KvStorage, RedbStorage};
pub use cart::{CartError, CartManager};
pub use catalog::normalize;
pub use checkout::{validate, ValidationReport};
pub use client::{MerchantFetcher, OrderTransport};
pub use core::{AppState, Config};
pub use hours::{HoursMonitor, OpeningWindow, StoreStatus};
pub use orders::{build_order, OrderSubmitter};

// Re-export shared types for convenience
pub use shared::error::{FetchError, SubmitError};
pub use shared::menu::{MenuCatalog, MenuDocument, MenuItem, MerchantConfig, MerchantRecord};
pub use shared::order::{CartLine, CheckoutForm, Order, PaymentMethod, Selection};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
